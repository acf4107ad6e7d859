//! ANSI color helpers for terminal output.

use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Amount color:
/// \>0 → green
/// 0 → grey
pub fn paint_amount(value: f64, text: &str) -> String {
    if value > 0.0 {
        Colour::Green.paint(text).to_string()
    } else {
        Colour::Fixed(244).paint(text).to_string()
    }
}

/// Lateness is red when present, untouched otherwise
pub fn paint_late(minutes: i64, text: &str) -> String {
    if minutes > 0 {
        Colour::Red.paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Remote punches are highlighted in cyan
pub fn paint_remote(text: &str) -> String {
    Colour::Cyan.paint(text).to_string()
}
