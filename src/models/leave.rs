use crate::utils::time::hours_between;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveCategory {
    Annual,
    Personal,
    DelayDeduction,
}

impl LeaveCategory {
    pub const ALL: [LeaveCategory; 3] = [
        LeaveCategory::Annual,
        LeaveCategory::Personal,
        LeaveCategory::DelayDeduction,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LeaveCategory::Annual => "年假",
            LeaveCategory::Personal => "事假",
            LeaveCategory::DelayDeduction => "迟到抵扣",
        }
    }
}

/// Leave covering part of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeaveInterval {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub category: LeaveCategory,
}

impl LeaveInterval {
    pub fn hours(&self) -> f64 {
        hours_between(self.start, self.end).max(0.0)
    }

    pub fn same_span(&self, start: NaiveTime, end: NaiveTime) -> bool {
        self.start == start && self.end == end
    }
}

/// Leave / cancellation / deduction application as listed by the HR system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// Pipe-delimited summary: `applicant|category|status|range|...`
    #[serde(rename = "abstract", alias = "abstractText")]
    pub abstract_text: String,
    /// Key to fetch delay-deduction forms
    #[serde(default, alias = "authKey", skip_serializing_if = "Option::is_none")]
    pub auth_key: Option<String>,
}

impl LeaveRecord {
    pub fn new(abstract_text: &str) -> Self {
        Self {
            abstract_text: abstract_text.to_string(),
            auth_key: None,
        }
    }

    pub fn with_auth_key(mut self, key: &str) -> Self {
        self.auth_key = Some(key.to_string());
        self
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.abstract_text.split('|').nth(index).map(str::trim)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionForm {
    #[serde(rename = "CARDBEGINTIME")]
    pub begin: String,
    #[serde(rename = "CARDENDTIME")]
    pub end: String,
}

/// One form returned by the delay-deduction source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionEntry {
    #[serde(rename = "formData")]
    pub form_data: DeductionForm,
}

impl DeductionEntry {
    pub fn new(begin: &str, end: &str) -> Self {
        Self {
            form_data: DeductionForm {
                begin: begin.to_string(),
                end: end.to_string(),
            },
        }
    }
}

pub type IntervalsByDate = BTreeMap<NaiveDate, Vec<LeaveInterval>>;

/// Per-day leave intervals of a month, one map per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeaveBook {
    pub annual: IntervalsByDate,
    pub personal: IntervalsByDate,
    pub deduction: IntervalsByDate,
    /// Records that could not be used, with the reason
    pub skipped: Vec<String>,
}

impl LeaveBook {
    pub fn intervals(&self, category: LeaveCategory) -> &IntervalsByDate {
        match category {
            LeaveCategory::Annual => &self.annual,
            LeaveCategory::Personal => &self.personal,
            LeaveCategory::DelayDeduction => &self.deduction,
        }
    }

    pub fn intervals_mut(&mut self, category: LeaveCategory) -> &mut IntervalsByDate {
        match category {
            LeaveCategory::Annual => &mut self.annual,
            LeaveCategory::Personal => &mut self.personal,
            LeaveCategory::DelayDeduction => &mut self.deduction,
        }
    }

    pub fn push(&mut self, interval: LeaveInterval) {
        self.intervals_mut(interval.category)
            .entry(interval.date)
            .or_default()
            .push(interval);
    }

    pub fn total_hours(&self, category: LeaveCategory) -> f64 {
        self.intervals(category)
            .values()
            .flatten()
            .map(LeaveInterval::hours)
            .sum::<f64>()
            + 0.0
    }

    pub fn count(&self, category: LeaveCategory) -> usize {
        self.intervals(category).values().map(Vec::len).sum()
    }
}
