//! Monthly aggregation and reconciliation.

use super::netting::{BucketHours, net_lateness, net_leave};
use crate::core::report::{rank_for, tips_for};
use crate::core::rules::PayrollContext;
use crate::models::summary::{AttendanceSummary, HoursSummary, IncomeSummary};
use crate::models::{DailyResult, MonthCalendar, MonthlySummary, PayBucket};
use crate::utils::formatting::round2;

/// Late arrivals of the month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatenessTotals {
    pub count: u32,
    pub minutes: i64,
}

impl LatenessTotals {
    pub fn from_results(results: &[DailyResult]) -> Self {
        results
            .iter()
            .filter(|r| r.late_minutes > 0)
            .fold(Self::default(), |acc, r| Self {
                count: acc.count + 1,
                minutes: acc.minutes + r.late_minutes,
            })
    }
}

fn bucket_pay(results: &[DailyResult], bucket: PayBucket) -> f64 {
    round2(
        results
            .iter()
            .filter(|r| r.day_category.bucket() == bucket)
            .map(|r| r.overtime_pay)
            .sum(),
    )
}

/// Aggregate the daily results of one month and net personal leave and
/// lateness against them. `results` must be in chronological order: the
/// lateness deduction depends on it.
pub fn reconcile(
    results: &[DailyResult],
    calendar: &MonthCalendar,
    personal_leave_hours: f64,
    lateness: LatenessTotals,
    ctx: &PayrollContext,
) -> MonthlySummary {
    // 1. Totals
    let total_overtime_pay = round2(results.iter().map(|r| r.overtime_pay).sum());
    let total_meal_allowance = round2(results.iter().map(|r| r.meal_allowance).sum());
    let total_income = round2(results.iter().map(|r| r.total_income).sum());
    let hours = BucketHours::from_results(results);

    // 2-3. Attendance days
    let required_workdays = calendar.required_workdays();
    let actual_workdays = results
        .iter()
        .filter(|r| r.day_category.is_workday())
        .count() as u32;

    // 4. Personal leave against overtime, in bucket priority
    let leave = net_leave(hours, personal_leave_hours, ctx.netting_order);
    let actual_overtime_pay = round2(leave.netted.pay(ctx.hourly_rate));

    // 5. Lateness penalty (reported only)
    let lateness_netting = net_lateness(results, lateness.minutes);
    let (early_leave_count, early_leave_minutes) = results
        .iter()
        .filter(|r| r.early_leave_minutes > 0)
        .fold((0, 0), |(count, minutes), r| {
            (count + 1, minutes + r.early_leave_minutes)
        });

    // 6. Income after netting
    let actual_total_income = round2(actual_overtime_pay + total_meal_allowance);

    let income = IncomeSummary {
        total_overtime_pay,
        workday_overtime_pay: bucket_pay(results, PayBucket::Workday),
        weekend_overtime_pay: bucket_pay(results, PayBucket::Weekend),
        holiday_overtime_pay: bucket_pay(results, PayBucket::Holiday),
        total_meal_allowance,
        total_income,
        actual_overtime_pay,
        actual_total_income,
    };

    let hours = HoursSummary {
        workday_hours: hours.workday,
        weekend_hours: hours.weekend,
        holiday_hours: hours.holiday,
        total_hours: hours.total(),
        actual_workday_hours: leave.netted.workday,
        actual_weekend_hours: leave.netted.weekend,
        actual_holiday_hours: leave.netted.holiday,
        actual_total_hours: leave.netted.total(),
    };

    let attendance = AttendanceSummary {
        required_workdays,
        actual_workdays,
        late_count: lateness.count,
        late_minutes: lateness.minutes,
        early_leave_count,
        early_leave_minutes,
        personal_leave_hours: personal_leave_hours.max(0.0),
        unconsumed_leave_hours: leave.remaining_leave,
        lateness: lateness_netting,
        ..Default::default()
    };

    // 7. Qualitative tier
    let rank = rank_for(income.total_overtime_pay);
    let tips = tips_for(&income, &hours, &attendance);

    MonthlySummary {
        month: calendar.month,
        hourly_rate: ctx.hourly_rate,
        income,
        hours,
        attendance,
        rank,
        tips,
    }
}
