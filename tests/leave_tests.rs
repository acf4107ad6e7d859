use rovertime::core::leave::{LeaveExtractor, hours_in_month, parse_range, split_range};
use rovertime::core::rules::WorkRules;
use rovertime::errors::{AppError, AppResult};
use rovertime::models::{DeductionEntry, LeaveCategory, LeaveRecord, YearMonth};
use rovertime::providers::{DelayDeductionProvider, NoDeductions};

mod common;
use common::d;

struct FixedDeductions;

impl DelayDeductionProvider for FixedDeductions {
    fn deduction_entries(&self, auth_key: &str) -> AppResult<Vec<DeductionEntry>> {
        match auth_key {
            "k1" => Ok(vec![
                DeductionEntry::new("2025-10-15 09:00", "2025-10-15 09:30"),
                DeductionEntry::new("garbage", "2025-10-16 09:30"),
            ]),
            _ => Err(AppError::Provider(format!("unknown key {auth_key}"))),
        }
    }
}

fn record(category: &str, range: &str) -> LeaveRecord {
    LeaveRecord::new(&format!("李四|{category}|备注|{range}"))
}

#[test]
fn test_parse_range_separators() {
    let (s, e) = parse_range("2025-10-15 14:00 - 2025-10-15 18:00").unwrap();
    assert_eq!(s.format("%H:%M").to_string(), "14:00");
    assert_eq!(e.format("%H:%M").to_string(), "18:00");

    assert!(parse_range("2025-10-15 09:00 至 2025-10-16 12:00").is_some());
    // End before start
    assert!(parse_range("2025-10-16 09:00 - 2025-10-15 12:00").is_none());
    assert!(parse_range("tomorrow").is_none());
}

#[test]
fn test_split_multi_day_range() {
    let rules = WorkRules::default();
    let (s, e) = parse_range("2025-10-15 14:00 - 2025-10-17 12:00").unwrap();
    let pieces = split_range(s, e, &rules);

    let hours: Vec<(String, String, String)> = pieces
        .iter()
        .map(|(d, s, e)| {
            (
                d.to_string(),
                s.format("%H:%M").to_string(),
                e.format("%H:%M").to_string(),
            )
        })
        .collect();

    assert_eq!(
        hours,
        vec![
            ("2025-10-15".into(), "14:00".into(), "18:00".into()),
            ("2025-10-16".into(), "09:00".into(), "18:00".into()),
            ("2025-10-17".into(), "09:00".into(), "12:00".into()),
        ]
    );
}

#[test]
fn test_extract_leave_and_hours() {
    let rules = WorkRules::default();
    let records = vec![
        record("年假", "2025-10-15 09:00 - 2025-10-15 18:00"),
        record("事假", "2025-10-20 14:00 - 2025-10-21 12:00"),
    ];

    let book = LeaveExtractor::new(&rules, &NoDeductions).extract(&records);
    let october = YearMonth::new(2025, 10).unwrap();

    assert_eq!(book.count(LeaveCategory::Annual), 1);
    assert_eq!(book.count(LeaveCategory::Personal), 2);
    assert_eq!(hours_in_month(&book, LeaveCategory::Annual, october), 9.0);
    assert_eq!(hours_in_month(&book, LeaveCategory::Personal, october), 7.0);
    assert!(book.skipped.is_empty());
}

#[test]
fn test_leave_outside_month_not_counted() {
    let rules = WorkRules::default();
    let records = vec![record("事假", "2025-10-31 14:00 - 2025-11-03 18:00")];

    let book = LeaveExtractor::new(&rules, &NoDeductions).extract(&records);

    assert_eq!(
        hours_in_month(&book, LeaveCategory::Personal, YearMonth::new(2025, 10).unwrap()),
        4.0
    );
    assert_eq!(book.total_hours(LeaveCategory::Personal), 4.0 + 9.0 + 9.0 + 9.0);
}

#[test]
fn test_cancellation_exact_match_removes_interval() {
    let rules = WorkRules::default();
    let records = vec![
        record("事假", "2025-10-15 14:00 - 2025-10-15 18:00"),
        record("年假", "2025-10-16 09:00 - 2025-10-16 18:00"),
        record("销假", "2025-10-15 14:00 - 2025-10-15 18:00"),
    ];

    let book = LeaveExtractor::new(&rules, &NoDeductions).extract(&records);

    assert_eq!(book.count(LeaveCategory::Personal), 0);
    assert!(!book.personal.contains_key(&d("2025-10-15")));
    assert_eq!(book.count(LeaveCategory::Annual), 1);
}

/// A cancellation that only overlaps the leave leaves it untouched.
/// Accepted but suspicious: the user probably meant to shorten the leave.
#[test]
fn test_cancellation_partial_overlap_is_noop() {
    let rules = WorkRules::default();
    let records = vec![
        record("事假", "2025-10-15 09:00 - 2025-10-15 18:00"),
        record("销假", "2025-10-15 14:00 - 2025-10-15 18:00"),
    ];

    let book = LeaveExtractor::new(&rules, &NoDeductions).extract(&records);

    assert_eq!(book.count(LeaveCategory::Personal), 1);
    assert_eq!(book.total_hours(LeaveCategory::Personal), 9.0);
}

#[test]
fn test_cancellation_before_leave_has_no_effect() {
    let rules = WorkRules::default();
    let records = vec![
        record("销假", "2025-10-15 14:00 - 2025-10-15 18:00"),
        record("事假", "2025-10-15 14:00 - 2025-10-15 18:00"),
    ];

    let book = LeaveExtractor::new(&rules, &NoDeductions).extract(&records);
    assert_eq!(book.count(LeaveCategory::Personal), 1);
}

#[test]
fn test_delay_deductions_from_provider() {
    let rules = WorkRules::default();
    let records = vec![
        record("迟到扣减", "").with_auth_key("k1"),
        record("迟到抵扣", "").with_auth_key("missing"),
        record("迟到抵扣", ""),
    ];

    let book = LeaveExtractor::new(&rules, &FixedDeductions).extract(&records);

    assert_eq!(book.count(LeaveCategory::DelayDeduction), 1);
    assert_eq!(book.total_hours(LeaveCategory::DelayDeduction), 0.5);
    // garbage form, unknown key, missing key
    assert_eq!(book.skipped.len(), 3);
}

#[test]
fn test_malformed_records_are_skipped() {
    let rules = WorkRules::default();
    let records = vec![
        record("调休", "2025-10-15 09:00 - 2025-10-15 18:00"),
        record("事假", "yesterday"),
        LeaveRecord::new("only-one-field"),
    ];

    let book = LeaveExtractor::new(&rules, &NoDeductions).extract(&records);

    assert_eq!(book.count(LeaveCategory::Personal), 0);
    assert_eq!(book.skipped.len(), 3);
}

#[test]
fn test_empty_leave_hours_are_positive_zero() {
    let rules = WorkRules::default();
    let book = LeaveExtractor::new(&rules, &NoDeductions).extract(&[]);
    let october = YearMonth::new(2025, 10).unwrap();

    for category in LeaveCategory::ALL {
        assert!(hours_in_month(&book, category, october).is_sign_positive());
        assert!(book.total_hours(category).is_sign_positive());
    }
}
