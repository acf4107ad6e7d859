use super::clock_event::ClockEvent;
use super::day_category::DayCategory;
use chrono::NaiveDate;
use serde::Serialize;

/// Pay figures of one attended day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyResult {
    pub date: NaiveDate,
    pub first_check: Option<ClockEvent>,
    pub last_check: Option<ClockEvent>,
    pub day_category: DayCategory,
    pub pay_rate: f64,
    pub overtime_hours: f64,
    pub overtime_pay: f64,
    pub meal_allowance: f64,
    pub total_income: f64,
    pub late_minutes: i64,
    pub early_leave_minutes: i64,
}

impl DailyResult {
    pub fn is_remote(&self) -> bool {
        self.first_check.is_some_and(|c| c.is_remote) || self.last_check.is_some_and(|c| c.is_remote)
    }

    pub fn first_check_str(&self) -> String {
        self.first_check
            .map(|c| c.time_str())
            .unwrap_or_else(|| "--:--:--".to_string())
    }

    pub fn last_check_str(&self) -> String {
        self.last_check
            .map(|c| c.time_str())
            .unwrap_or_else(|| "--:--:--".to_string())
    }
}
