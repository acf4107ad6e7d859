use serde::{Deserialize, Serialize};
use std::fmt;

/// Pay classification of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCategory {
    OrdinaryWorkday,
    Weekend,
    Holiday,
    /// Listed in the holiday calendar without the statutory 3x wage.
    WeekendHoliday,
}

impl DayCategory {
    pub const ALL: [DayCategory; 4] = [
        DayCategory::OrdinaryWorkday,
        DayCategory::Weekend,
        DayCategory::Holiday,
        DayCategory::WeekendHoliday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DayCategory::OrdinaryWorkday => "工作日",
            DayCategory::Weekend => "周末",
            DayCategory::Holiday => "节假日",
            DayCategory::WeekendHoliday => "周末节假日",
        }
    }

    /// Wage multiplier applied to the hourly base
    pub fn multiplier(&self) -> f64 {
        self.bucket().multiplier()
    }

    /// Hourly overtime rate for this category (20/30/60 at the default base of 20)
    pub fn pay_rate(&self, hourly_rate: f64) -> f64 {
        self.multiplier() * hourly_rate
    }

    pub fn bucket(&self) -> PayBucket {
        match self {
            DayCategory::OrdinaryWorkday => PayBucket::Workday,
            DayCategory::Weekend | DayCategory::WeekendHoliday => PayBucket::Weekend,
            DayCategory::Holiday => PayBucket::Holiday,
        }
    }

    pub fn is_workday(&self) -> bool {
        matches!(self, DayCategory::OrdinaryWorkday)
    }

    /// Normalize a free-form day-type label coming from the attendance source.
    pub fn from_label(label: &str) -> Option<Self> {
        let l = label.trim().to_lowercase();

        if l.is_empty() {
            return None;
        }

        if l.contains("周末节假") || l == "weekend_holiday" || l == "weekend-holiday" {
            return Some(DayCategory::WeekendHoliday);
        }

        if l.contains("工作") || l.contains("weekday") || l == "normal" || l == "workday" {
            return Some(DayCategory::OrdinaryWorkday);
        }

        if l.contains("周末")
            || l.contains("星期六")
            || l.contains("星期日")
            || l.contains("weekend")
            || l == "saturday"
            || l == "sunday"
        {
            return Some(DayCategory::Weekend);
        }

        if l.contains("节假") || l.contains("holiday") || l.contains("festival") {
            return Some(DayCategory::Holiday);
        }

        None
    }
}

impl fmt::Display for DayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregation bucket for hours and pay. Weekend-holidays share the weekend rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayBucket {
    Workday,
    Weekend,
    Holiday,
}

impl PayBucket {
    pub fn multiplier(&self) -> f64 {
        match self {
            PayBucket::Workday => 1.0,
            PayBucket::Weekend => 1.5,
            PayBucket::Holiday => 3.0,
        }
    }

    pub fn rate(&self, hourly_rate: f64) -> f64 {
        self.multiplier() * hourly_rate
    }

    pub fn label(&self) -> &'static str {
        match self {
            PayBucket::Workday => "工作日",
            PayBucket::Weekend => "周末",
            PayBucket::Holiday => "节假日",
        }
    }
}
