use super::month::YearMonth;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IncomeSummary {
    pub total_overtime_pay: f64,
    pub workday_overtime_pay: f64,
    pub weekend_overtime_pay: f64,
    pub holiday_overtime_pay: f64,
    pub total_meal_allowance: f64,
    pub total_income: f64,
    /// Overtime pay recomputed after personal-leave netting
    pub actual_overtime_pay: f64,
    pub actual_total_income: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HoursSummary {
    pub workday_hours: f64,
    pub weekend_hours: f64,
    pub holiday_hours: f64,
    pub total_hours: f64,
    pub actual_workday_hours: f64,
    pub actual_weekend_hours: f64,
    pub actual_holiday_hours: f64,
    pub actual_total_hours: f64,
}

/// Outcome of the tiered lateness deduction. Informational: never applied to pay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LatenessNetting {
    pub starting_minutes: i64,
    pub penalty_minutes: i64,
    pub remaining_minutes: i64,
    pub occurrences: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttendanceSummary {
    pub required_workdays: u32,
    pub actual_workdays: u32,
    pub late_count: u32,
    pub late_minutes: i64,
    pub early_leave_count: u32,
    pub early_leave_minutes: i64,
    pub personal_leave_hours: f64,
    /// Personal leave left over after all buckets were exhausted (dropped)
    pub unconsumed_leave_hours: f64,
    pub annual_leave_hours: f64,
    pub deduction_leave_hours: f64,
    pub lateness: LatenessNetting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankLevel {
    VeryLow,
    Low,
    Normal,
    Good,
    Excellent,
    Expert,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rank {
    pub level: RankLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub month: YearMonth,
    pub hourly_rate: f64,
    pub income: IncomeSummary,
    pub hours: HoursSummary,
    pub attendance: AttendanceSummary,
    pub rank: Rank,
    pub tips: Vec<String>,
}
