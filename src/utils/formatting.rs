//! Formatting utilities used for CLI and report outputs.

use unicode_width::UnicodeWidthStr;

use super::colors::strip_ansi;

/// Round to two decimal places (currency precision). Never yields `-0.0`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

pub fn fmt_money(amount: f64) -> String {
    format!("{:.2}元", amount)
}

pub fn fmt_hours(hours: f64) -> String {
    format!("{:.2}小时", hours)
}

/// Terminal display width, ignoring ANSI sequences and counting CJK as two cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}
