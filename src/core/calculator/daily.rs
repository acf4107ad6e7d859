//! Per-day overtime, pay, meal allowance and lateness.

use crate::core::rules::{PayrollContext, WorkRules};
use crate::models::{ClockEvent, DailyResult, DayCategory};
use crate::utils::formatting::round2;
use crate::utils::time::{hours_between, minutes_between};
use chrono::NaiveDate;

/// Overtime hours of one day, never negative.
///
/// Remote last check → 0. Ordinary days count from the overtime start to the
/// last check; other days count the whole on-site span. A missing check is a
/// zero-length day.
pub fn overtime_hours(
    first: Option<&ClockEvent>,
    last: Option<&ClockEvent>,
    category: DayCategory,
    rules: &WorkRules,
) -> f64 {
    let Some(last) = last else {
        return 0.0;
    };

    if last.is_remote {
        return 0.0;
    }

    let hours = match category {
        DayCategory::OrdinaryWorkday => hours_between(rules.overtime_start, last.time),
        DayCategory::Weekend | DayCategory::Holiday | DayCategory::WeekendHoliday => match first {
            Some(first) => hours_between(first.time, last.time),
            None => 0.0,
        },
    };

    hours.max(0.0)
}

pub fn meal_allowance(hours: f64, category: DayCategory, rules: &WorkRules) -> f64 {
    let threshold = if category.is_workday() {
        rules.workday_meal_threshold
    } else {
        rules.rest_day_meal_threshold
    };

    if hours >= threshold {
        rules.meal_allowance
    } else {
        0.0
    }
}

/// Whole minutes late on ordinary days. `reported` is the source's own figure
/// and wins over the computed one.
pub fn late_minutes(
    first: Option<&ClockEvent>,
    category: DayCategory,
    reported: Option<i64>,
    rules: &WorkRules,
) -> i64 {
    let Some(first) = first else {
        return 0;
    };

    if first.is_remote || !category.is_workday() {
        return 0;
    }

    reported
        .unwrap_or_else(|| minutes_between(rules.work_start, first.time))
        .max(0)
}

/// Whole minutes left before the end of the working day on ordinary days.
pub fn early_leave_minutes(
    last: Option<&ClockEvent>,
    category: DayCategory,
    rules: &WorkRules,
) -> i64 {
    match last {
        Some(last) if !last.is_remote && category.is_workday() => {
            minutes_between(last.time, rules.work_end).max(0)
        }
        _ => 0,
    }
}

pub struct DailyCalculator<'a> {
    hourly_rate: f64,
    rules: &'a WorkRules,
}

impl<'a> DailyCalculator<'a> {
    pub fn new(hourly_rate: f64, rules: &'a WorkRules) -> Self {
        Self { hourly_rate, rules }
    }

    pub fn from_context(ctx: &'a PayrollContext) -> Self {
        Self::new(ctx.hourly_rate, &ctx.rules)
    }

    pub fn compute(
        &self,
        date: NaiveDate,
        first: Option<ClockEvent>,
        last: Option<ClockEvent>,
        category: DayCategory,
        reported_late: Option<i64>,
    ) -> DailyResult {
        let hours = overtime_hours(first.as_ref(), last.as_ref(), category, self.rules);
        let pay_rate = category.pay_rate(self.hourly_rate);
        let overtime_pay = round2(hours * pay_rate);
        let meal = meal_allowance(hours, category, self.rules);

        DailyResult {
            date,
            first_check: first,
            last_check: last,
            day_category: category,
            pay_rate,
            overtime_hours: hours,
            overtime_pay,
            meal_allowance: meal,
            total_income: round2(overtime_pay + meal),
            late_minutes: late_minutes(first.as_ref(), category, reported_late, self.rules),
            early_leave_minutes: early_leave_minutes(last.as_ref(), category, self.rules),
        }
    }
}

/// One day under the default rules.
pub fn compute_day(
    date: NaiveDate,
    first: Option<ClockEvent>,
    last: Option<ClockEvent>,
    category: DayCategory,
    hourly_rate: f64,
) -> DailyResult {
    let rules = WorkRules::default();
    DailyCalculator::new(hourly_rate, &rules).compute(date, first, last, category, None)
}
