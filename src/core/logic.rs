use crate::core::calculator::attendance::first_last;
use crate::core::calculator::{DailyCalculator, LatenessTotals, reconcile};
use crate::core::classifier::classify_with_label;
use crate::core::leave::{LeaveExtractor, hours_in_month};
use crate::core::report::render_report;
use crate::core::rules::PayrollContext;
use crate::errors::{AppError, AppResult};
use crate::models::{
    AttendanceDay, DailyResult, LeaveBook, LeaveCategory, MonthCalendar, MonthlySummary,
};
use crate::providers::Sources;
use crate::ui::messages::warning;
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Everything one monthly run produces.
#[derive(Debug, Clone)]
pub struct MonthlyRun {
    pub calendar: MonthCalendar,
    pub results: Vec<DailyResult>,
    pub leave: LeaveBook,
    pub summary: MonthlySummary,
    pub report: String,
    /// Non-fatal problems met on the way
    pub warnings: Vec<String>,
}

#[derive(Default)]
struct MergedDay {
    clock: Vec<String>,
    late_minutes: Option<i64>,
    day_type: Option<String>,
}

pub struct Core;

impl Core {
    /// One result per distinct in-month date, in date order.
    ///
    /// An empty batch or an unparsable date is fatal; out-of-month days and
    /// unreadable timestamps are skipped with a warning.
    pub fn daily_results(
        days: &[AttendanceDay],
        calendar: &MonthCalendar,
        ctx: &PayrollContext,
    ) -> AppResult<(Vec<DailyResult>, Vec<String>)> {
        if days.is_empty() {
            return Err(AppError::EmptyOrMalformedData(
                "no attendance records".into(),
            ));
        }

        let mut warnings = Vec::new();
        let mut merged: BTreeMap<NaiveDate, MergedDay> = BTreeMap::new();

        for day in days {
            let date = parse_date(&day.date).ok_or_else(|| {
                AppError::EmptyOrMalformedData(format!("malformed attendance date '{}'", day.date))
            })?;

            if !ctx.month.contains(date) {
                warnings.push(format!("{} is outside {}, skipped", day.date, ctx.month));
                continue;
            }

            let entry = merged.entry(date).or_default();
            entry.clock.extend(day.clock.iter().cloned());
            entry.late_minutes = entry.late_minutes.or(day.late_minutes);
            entry.day_type = entry.day_type.take().or_else(|| day.day_type.clone());
        }

        if merged.is_empty() {
            return Err(AppError::EmptyOrMalformedData(format!(
                "no attendance records in {}",
                ctx.month
            )));
        }

        let calculator = DailyCalculator::from_context(ctx);

        let results = merged
            .into_iter()
            .map(|(date, day)| {
                let checks = first_last(date, &day.clock);
                warnings.extend(
                    checks
                        .skipped
                        .iter()
                        .map(|raw| format!("{date}: unreadable timestamp '{raw}' ignored")),
                );

                let category = classify_with_label(date, day.day_type.as_deref(), calendar);
                calculator.compute(date, checks.first, checks.last, category, day.late_minutes)
            })
            .collect();

        Ok((results, warnings))
    }

    /// Fetch, classify, compute and reconcile one month.
    ///
    /// `personal_leave_hours` overrides the hours derived from the leave records.
    pub fn run_month(
        sources: &Sources,
        ctx: &PayrollContext,
        personal_leave_hours: Option<f64>,
        separator: char,
    ) -> AppResult<MonthlyRun> {
        let calendar = sources.calendar.calendar(ctx.month)?;
        let days = sources.attendance.attendance(ctx.month)?;
        let records = sources.leave.leave_records(ctx.month)?;

        let (results, mut warnings) = Self::daily_results(&days, &calendar, ctx)?;
        for w in &warnings {
            warning(w);
        }

        let leave = LeaveExtractor::new(&ctx.rules, sources.deductions).extract(&records);
        warnings.extend(leave.skipped.iter().cloned());

        let personal = personal_leave_hours
            .unwrap_or_else(|| hours_in_month(&leave, LeaveCategory::Personal, ctx.month));

        let mut summary = reconcile(
            &results,
            &calendar,
            personal,
            LatenessTotals::from_results(&results),
            ctx,
        );
        summary.attendance.annual_leave_hours =
            hours_in_month(&leave, LeaveCategory::Annual, ctx.month);
        summary.attendance.deduction_leave_hours =
            hours_in_month(&leave, LeaveCategory::DelayDeduction, ctx.month);

        let report = render_report(&summary, separator);

        Ok(MonthlyRun {
            calendar,
            results,
            leave,
            summary,
            report,
            warnings,
        })
    }
}
