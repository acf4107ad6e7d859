use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_clock_time;
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Marker the attendance source appends to punches recorded away from the worksite.
pub const REMOTE_MARKER: &str = "异地打卡";

static REMOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[(（]\s*异地打卡\s*[)）]|异地打卡").expect("valid marker regex"));

static DATE_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d{4}-\d{2}-\d{2}\s+").expect("valid date regex"));

/// A single clock reading of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ClockEvent {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub is_remote: bool,
}

impl ClockEvent {
    pub fn new(date: NaiveDate, time: NaiveTime, is_remote: bool) -> Self {
        Self {
            date,
            time,
            is_remote,
        }
    }

    /// Parse a raw timestamp such as `20:30:00`, `14:00:00(异地打卡)` or
    /// `2025-01-20 08:55:00`. The remote marker becomes `is_remote` and is
    /// never part of the stored time.
    pub fn parse(date: NaiveDate, raw: &str) -> AppResult<Self> {
        let is_remote = raw.contains(REMOTE_MARKER);
        let cleaned = REMOTE_RE.replace_all(raw, "");
        let cleaned = DATE_PREFIX_RE.replace(cleaned.trim(), "");

        let time =
            parse_clock_time(&cleaned).ok_or_else(|| AppError::InvalidTime(raw.to_string()))?;

        Ok(Self::new(date, time, is_remote))
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}

impl fmt::Display for ClockEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time_str())
    }
}
