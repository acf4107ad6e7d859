use rovertime::core::calculator::netting::lateness_penalty;
use rovertime::core::calculator::{
    BucketHours, LatenessTotals, compute_day, net_lateness, net_leave, reconcile,
};
use rovertime::core::logic::Core;
use rovertime::core::report::{rank_for, render_report};
use rovertime::core::rules::{NettingOrder, PayrollContext};
use rovertime::errors::{AppError, AppResult};
use rovertime::models::summary::RankLevel;
use rovertime::models::{
    AttendanceDay, ClockEvent, DailyResult, DayCategory, LeaveRecord, MonthCalendar, PayBucket,
    YearMonth,
};
use rovertime::providers::{
    AttendanceProvider, HolidayCalendarProvider, LeaveRecordsProvider, NoDeductions, Sources,
};

mod common;
use common::d;

fn day(date: &str, first: &str, last: &str, category: DayCategory) -> DailyResult {
    compute_day(
        d(date),
        Some(ClockEvent::parse(d(date), first).unwrap()),
        Some(ClockEvent::parse(d(date), last).unwrap()),
        category,
        20.0,
    )
}

fn late_day(date: &str, minutes: i64) -> DailyResult {
    let mut r = day(date, "09:00:00", "18:00:00", DayCategory::OrdinaryWorkday);
    r.late_minutes = minutes;
    r
}

#[test]
fn test_rank_tiers() {
    let cases = [
        (0.0, RankLevel::VeryLow, "李在赣神魔？"),
        (299.99, RankLevel::VeryLow, "李在赣神魔？"),
        (300.0, RankLevel::Low, "不太行"),
        (500.0, RankLevel::Normal, "一般，建议多加点 冲1000"),
        (1000.0, RankLevel::Good, "牛逼"),
        (1500.0, RankLevel::Good, "牛逼"),
        (1500.01, RankLevel::Excellent, "逆天"),
    ];

    for (income, level, message) in cases {
        let rank = rank_for(income);
        assert_eq!(rank.level, level, "{income}");
        assert_eq!(rank.message, message, "{income}");
    }

    let top = rank_for(2345.5);
    assert_eq!(top.level, RankLevel::Expert);
    assert!(top.message.contains("345.50"));
}

#[test]
fn test_leave_netting_order_and_clamp() {
    let hours = BucketHours::new(3.0, 5.0, 2.0);

    let n = net_leave(hours, 4.0, NettingOrder::default());
    assert_eq!(n.netted, BucketHours::new(0.0, 4.0, 2.0));
    assert_eq!(n.remaining_leave, 0.0);

    // More leave than overtime: everything goes to zero, the rest is dropped
    let n = net_leave(hours, 12.5, NettingOrder::default());
    assert_eq!(n.netted.total(), 0.0);
    assert_eq!(n.remaining_leave, 2.5);

    // Holidays first
    let order = NettingOrder([PayBucket::Holiday, PayBucket::Weekend, PayBucket::Workday]);
    let n = net_leave(hours, 4.0, order);
    assert_eq!(n.netted, BucketHours::new(3.0, 3.0, 0.0));
}

#[test]
fn test_leave_netting_sum_property() {
    let grid = [0.0, 0.5, 1.0, 3.0, 7.25];

    for w in grid {
        for we in grid {
            for h in grid {
                for leave in [0.0, 0.5, 4.0, 9.0, 20.0] {
                    let n = net_leave(BucketHours::new(w, we, h), leave, NettingOrder::default());
                    let expected = (w + we + h - leave).max(0.0);
                    assert!((n.netted.total() - expected).abs() < 1e-9);
                }
            }
        }
    }
}

#[test]
fn test_lateness_penalty_tiers() {
    assert_eq!(lateness_penalty(0), 0);
    assert_eq!(lateness_penalty(1), 61);
    assert_eq!(lateness_penalty(30), 90);
    assert_eq!(lateness_penalty(31), 151);
    assert_eq!(lateness_penalty(60), 180);
    assert_eq!(lateness_penalty(61), 480);
}

#[test]
fn test_lateness_netting_stops_at_zero() {
    let results = vec![
        late_day("2025-10-13", 10),
        late_day("2025-10-14", 0),
        late_day("2025-10-15", 45),
        late_day("2025-10-16", 5),
    ];

    // Remainder starts at 60: the first penalty (70) exhausts it
    let n = net_lateness(&results, 60);
    assert_eq!(n.occurrences, 1);
    assert_eq!(n.penalty_minutes, 70);
    assert_eq!(n.remaining_minutes, -10);

    // Deterministic for a fixed order
    assert_eq!(net_lateness(&results, 60), n);
}

#[test]
fn test_lateness_netting_depends_on_order() {
    let a = late_day("2025-10-13", 10);
    let b = late_day("2025-10-14", 90);

    let forward = net_lateness(&[a.clone(), b.clone()], 100);
    let backward = net_lateness(&[b, a], 100);

    assert_eq!(forward.penalty_minutes, 70 + 480);
    assert_eq!(backward.penalty_minutes, 480);
}

#[test]
fn test_reconcile_month() {
    let month = YearMonth::new(2025, 10).unwrap();
    let calendar = MonthCalendar::new(month).with_holiday(d("2025-10-01"), 3);
    let ctx = PayrollContext::new(month);

    let results = vec![
        day("2025-10-01", "10:00:00", "14:00:00", DayCategory::Holiday),
        day("2025-10-15", "08:55:00", "20:30:00", DayCategory::OrdinaryWorkday),
        day("2025-10-18", "10:00:00", "12:00:00", DayCategory::Weekend),
    ];

    let s = reconcile(
        &results,
        &calendar,
        2.0,
        LatenessTotals::from_results(&results),
        &ctx,
    );

    assert_eq!(s.income.holiday_overtime_pay, 240.0);
    assert_eq!(s.income.workday_overtime_pay, 30.0);
    assert_eq!(s.income.weekend_overtime_pay, 60.0);
    assert_eq!(s.income.total_overtime_pay, 330.0);
    // 20 (holiday, 4h) + 20 (workday, 1.5h) + 0 (weekend, 2h)
    assert_eq!(s.income.total_meal_allowance, 40.0);
    assert_eq!(s.income.total_income, 370.0);

    // 2h leave: 1.5 from workdays, 0.5 from the weekend
    assert_eq!(s.hours.actual_workday_hours, 0.0);
    assert_eq!(s.hours.actual_weekend_hours, 1.5);
    assert_eq!(s.hours.actual_holiday_hours, 4.0);
    assert_eq!(s.income.actual_overtime_pay, 1.5 * 30.0 + 4.0 * 60.0);
    assert_eq!(s.income.actual_total_income, 285.0 + 40.0);

    assert_eq!(s.attendance.actual_workdays, 1);
    assert_eq!(s.attendance.late_count, 0);
    assert_eq!(s.rank.level, RankLevel::Low);
    assert_eq!(s.tips.len(), 1);

    let report = render_report(&s, '-');
    assert!(report.contains("2025-10 收入统计"));
    assert!(report.contains("330.00元"));
    assert!(report.contains("评价: 不太行"));
}

#[test]
fn test_hourly_rate_scales_pay() {
    let month = YearMonth::new(2025, 10).unwrap();
    let ctx = PayrollContext::new(month).with_hourly_rate(40.0);

    let (results, _) = Core::daily_results(
        &[AttendanceDay::new("2025-10-15", &["09:00:00", "21:00:00"])],
        &MonthCalendar::new(month),
        &ctx,
    )
    .unwrap();

    assert_eq!(results[0].pay_rate, 40.0);
    assert_eq!(results[0].overtime_pay, 80.0);
}

struct Memory {
    days: Vec<AttendanceDay>,
    calendar: MonthCalendar,
    leave: Vec<LeaveRecord>,
}

impl AttendanceProvider for Memory {
    fn attendance(&self, _month: YearMonth) -> AppResult<Vec<AttendanceDay>> {
        Ok(self.days.clone())
    }
}

impl HolidayCalendarProvider for Memory {
    fn calendar(&self, _month: YearMonth) -> AppResult<MonthCalendar> {
        Ok(self.calendar.clone())
    }
}

impl LeaveRecordsProvider for Memory {
    fn leave_records(&self, _month: YearMonth) -> AppResult<Vec<LeaveRecord>> {
        Ok(self.leave.clone())
    }
}

fn sources(memory: &Memory) -> Sources<'_> {
    Sources {
        attendance: memory,
        calendar: memory,
        leave: memory,
        deductions: &NoDeductions,
    }
}

#[test]
fn test_run_month_merges_and_filters_days() {
    let month = YearMonth::new(2025, 10).unwrap();
    let memory = Memory {
        days: vec![
            AttendanceDay::new("2025-10-16", &["09:40:00", "19:30:00"]).with_late_minutes(40),
            AttendanceDay::new("2025-10-15", &["08:50:00"]),
            AttendanceDay::new("2025-10-15", &["20:00:00", "nonsense"]),
            AttendanceDay::new("2025-09-30", &["09:00:00", "22:00:00"]),
            AttendanceDay::new("2025-10-17", &["09:00:00", "20:00:00"]).with_day_type("节假日"),
        ],
        calendar: MonthCalendar::new(month),
        leave: vec![
            LeaveRecord::new("王五|年假|已批准|2025-10-20 09:00 - 2025-10-20 18:00"),
            LeaveRecord::new("王五|事假|已批准|2025-10-21 09:00 - 2025-10-21 10:00"),
        ],
    };

    let run = Core::run_month(&sources(&memory), &PayrollContext::new(month), None, '-').unwrap();

    let dates: Vec<String> = run.results.iter().map(|r| r.date.to_string()).collect();
    assert_eq!(dates, vec!["2025-10-15", "2025-10-16", "2025-10-17"]);

    // Merged day: 08:50 → 20:00
    assert_eq!(run.results[0].overtime_hours, 1.0);
    assert_eq!(run.results[1].late_minutes, 40);
    assert_eq!(run.results[2].day_category, DayCategory::Holiday);
    // 09:00 → 20:00 at the holiday rate
    assert_eq!(run.results[2].overtime_pay, 11.0 * 60.0);

    // out-of-month day and the unreadable timestamp
    assert_eq!(run.warnings.len(), 2);

    let a = &run.summary.attendance;
    assert_eq!(a.annual_leave_hours, 9.0);
    assert_eq!(a.personal_leave_hours, 1.0);
    assert_eq!(a.late_count, 1);
    assert_eq!(a.lateness.penalty_minutes, 120 + 40);
    assert!(run.report.contains("考勤统计"));
}

#[test]
fn test_personal_leave_override() {
    let month = YearMonth::new(2025, 10).unwrap();
    let memory = Memory {
        days: vec![AttendanceDay::new("2025-10-15", &["09:00:00", "21:00:00"])],
        calendar: MonthCalendar::new(month),
        leave: vec![LeaveRecord::new(
            "王五|事假|已批准|2025-10-21 09:00 - 2025-10-21 18:00",
        )],
    };

    let run =
        Core::run_month(&sources(&memory), &PayrollContext::new(month), Some(0.5), '-').unwrap();

    assert_eq!(run.summary.attendance.personal_leave_hours, 0.5);
    assert_eq!(run.summary.hours.actual_workday_hours, 1.5);
}

#[test]
fn test_empty_or_foreign_attendance_is_fatal() {
    let month = YearMonth::new(2025, 10).unwrap();
    let ctx = PayrollContext::new(month);
    let cal = MonthCalendar::new(month);

    let err = Core::daily_results(&[], &cal, &ctx).unwrap_err();
    assert!(matches!(err, AppError::EmptyOrMalformedData(_)));

    let err = Core::daily_results(&[AttendanceDay::new("yesterday", &[])], &cal, &ctx)
        .unwrap_err();
    assert!(matches!(err, AppError::EmptyOrMalformedData(_)));

    let err = Core::daily_results(
        &[AttendanceDay::new("2025-11-03", &["09:00:00"])],
        &cal,
        &ctx,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::EmptyOrMalformedData(_)));
}

#[test]
fn test_context_netting_order() {
    let month = YearMonth::new(2025, 10).unwrap();
    let ctx = PayrollContext::new(month).with_netting_order(NettingOrder([
        PayBucket::Holiday,
        PayBucket::Weekend,
        PayBucket::Workday,
    ]));

    let results = vec![
        day("2025-10-01", "10:00:00", "14:00:00", DayCategory::Holiday),
        day("2025-10-15", "08:55:00", "21:00:00", DayCategory::OrdinaryWorkday),
    ];

    let s = reconcile(
        &results,
        &MonthCalendar::new(month),
        3.0,
        LatenessTotals::from_results(&results),
        &ctx,
    );

    assert_eq!(s.hours.actual_holiday_hours, 1.0);
    assert_eq!(s.hours.actual_workday_hours, 2.0);
    assert_eq!(s.income.actual_overtime_pay, 60.0 + 40.0);
}

#[test]
fn test_early_leave_totals_and_tips() {
    let month = YearMonth::new(2025, 10).unwrap();
    let ctx = PayrollContext::new(month);

    let mut results: Vec<DailyResult> = ["2025-10-13", "2025-10-14", "2025-10-15", "2025-10-16"]
        .iter()
        .map(|date| day(date, "08:55:00", "17:10:00", DayCategory::OrdinaryWorkday))
        .collect();
    results.push(late_day("2025-10-17", 12));

    let s = reconcile(
        &results,
        &MonthCalendar::new(month),
        0.0,
        LatenessTotals::from_results(&results),
        &ctx,
    );

    assert_eq!(s.attendance.early_leave_count, 4);
    assert_eq!(s.attendance.early_leave_minutes, 80);
    assert!(s.tips.iter().any(|t| t.contains("早退次数较多")));
    assert!(s.tips.iter().any(|t| t.contains("既有迟到又有早退")));

    let report = render_report(&s, '-');
    assert!(report.contains("4次，共80分钟"));
}

#[test]
fn test_no_negative_zero_in_summary() {
    let month = YearMonth::new(2025, 10).unwrap();
    let ctx = PayrollContext::new(month);
    let results = vec![day("2025-10-15", "09:00:00", "18:00:00", DayCategory::OrdinaryWorkday)];

    let s = reconcile(
        &results,
        &MonthCalendar::new(month),
        0.0,
        LatenessTotals::from_results(&results),
        &ctx,
    );

    for value in [
        s.income.weekend_overtime_pay,
        s.income.holiday_overtime_pay,
        s.income.total_overtime_pay,
        s.income.actual_overtime_pay,
    ] {
        assert!(value.is_sign_positive(), "{value}");
    }
    assert!(!render_report(&s, '-').contains("-0.00"));
}

#[test]
fn test_hours_table_uses_bucket_labels() {
    let month = YearMonth::new(2025, 10).unwrap();
    let ctx = PayrollContext::new(month);
    let results = vec![day("2025-10-18", "10:00:00", "12:00:00", DayCategory::WeekendHoliday)];

    let s = reconcile(
        &results,
        &MonthCalendar::new(month),
        0.0,
        LatenessTotals::from_results(&results),
        &ctx,
    );
    let report = render_report(&s, '-');

    for bucket in [PayBucket::Workday, PayBucket::Weekend, PayBucket::Holiday] {
        let row = report
            .lines()
            .find(|l| l.split(" | ").next().map(str::trim) == Some(bucket.label()));
        assert!(row.is_some_and(|l| l.contains("小时")), "{bucket:?}");
    }
    // Weekend-holidays land in the weekend row
    assert_eq!(s.hours.weekend_hours, 2.0);
}
