//! Turns leave, cancellation and delay-deduction applications into per-day intervals.

use crate::core::rules::WorkRules;
use crate::models::{LeaveBook, LeaveCategory, LeaveInterval, LeaveRecord, YearMonth};
use crate::providers::DelayDeductionProvider;
use crate::ui::messages::warning;
use crate::utils::time::parse_timestamp;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Position of the category in the pipe-delimited abstract.
const CATEGORY_FIELD: usize = 1;
/// Position of the time range in the pipe-delimited abstract.
const RANGE_FIELD: usize = 3;

const RANGE_SEPARATORS: [&str; 2] = [" 至 ", " - "];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordKind {
    Leave(LeaveCategory),
    Cancellation,
    DelayDeduction,
}

fn record_kind(label: &str) -> Option<RecordKind> {
    if label.contains("销假") {
        Some(RecordKind::Cancellation)
    } else if label.contains("年假") {
        Some(RecordKind::Leave(LeaveCategory::Annual))
    } else if label.contains("事假") {
        Some(RecordKind::Leave(LeaveCategory::Personal))
    } else if label.contains('扣') || label.contains('抵') {
        Some(RecordKind::DelayDeduction)
    } else {
        None
    }
}

/// Parse `YYYY-MM-DD HH:MM - YYYY-MM-DD HH:MM` (or with ` 至 `).
pub fn parse_range(range: &str) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let (start, end) = RANGE_SEPARATORS
        .iter()
        .find_map(|sep| range.split_once(*sep))?;

    let start = parse_timestamp(start)?;
    let end = parse_timestamp(end)?;

    (end >= start).then_some((start, end))
}

/// Split a range into one `(date, start, end)` piece per covered day.
///
/// First day: literal start → leave-day end (or the literal end when the request
/// stays within one day). Interior days: full leave day. Last day: leave-day
/// start → literal end. Empty pieces are dropped.
pub fn split_range(
    start: NaiveDateTime,
    end: NaiveDateTime,
    rules: &WorkRules,
) -> Vec<(NaiveDate, NaiveTime, NaiveTime)> {
    let (first, last) = (start.date(), end.date());

    let pieces: Vec<(NaiveDate, NaiveTime, NaiveTime)> = if first == last {
        vec![(first, start.time(), end.time().min(rules.leave_day_end))]
    } else {
        first
            .iter_days()
            .take_while(|d| *d <= last)
            .map(|d| {
                if d == first {
                    (d, start.time(), rules.leave_day_end)
                } else if d == last {
                    (d, rules.leave_day_start, end.time())
                } else {
                    (d, rules.leave_day_start, rules.leave_day_end)
                }
            })
            .collect()
    };

    pieces.into_iter().filter(|(_, s, e)| e > s).collect()
}

pub struct LeaveExtractor<'a> {
    rules: &'a WorkRules,
    deductions: &'a dyn DelayDeductionProvider,
}

impl<'a> LeaveExtractor<'a> {
    pub fn new(rules: &'a WorkRules, deductions: &'a dyn DelayDeductionProvider) -> Self {
        Self { rules, deductions }
    }

    /// Records are applied in order; a cancellation only affects intervals
    /// stored before it. Unusable records are reported and skipped.
    pub fn extract(&self, records: &[LeaveRecord]) -> LeaveBook {
        let mut book = LeaveBook::default();

        for record in records {
            let label = record.field(CATEGORY_FIELD).unwrap_or_default();

            match record_kind(label) {
                Some(RecordKind::Leave(category)) => self.add_leave(&mut book, record, category),
                Some(RecordKind::Cancellation) => self.cancel(&mut book, record),
                Some(RecordKind::DelayDeduction) => self.add_deductions(&mut book, record),
                None => skip(
                    &mut book,
                    format!("unrecognised leave category '{label}': {}", record.abstract_text),
                ),
            }
        }

        book
    }

    fn pieces(
        &self,
        book: &mut LeaveBook,
        record: &LeaveRecord,
    ) -> Option<Vec<(NaiveDate, NaiveTime, NaiveTime)>> {
        let raw = record.field(RANGE_FIELD).unwrap_or_default();

        match parse_range(raw) {
            Some((start, end)) => Some(split_range(start, end, self.rules)),
            None => {
                skip(
                    book,
                    format!("malformed leave time range '{raw}': {}", record.abstract_text),
                );
                None
            }
        }
    }

    fn add_leave(&self, book: &mut LeaveBook, record: &LeaveRecord, category: LeaveCategory) {
        let Some(pieces) = self.pieces(book, record) else {
            return;
        };

        for (date, start, end) in pieces {
            book.push(LeaveInterval {
                date,
                start,
                end,
                category,
            });
        }
    }

    /// Exact start+end match per covered day; anything else is left untouched.
    fn cancel(&self, book: &mut LeaveBook, record: &LeaveRecord) {
        let Some(pieces) = self.pieces(book, record) else {
            return;
        };

        for (date, start, end) in pieces {
            for category in [LeaveCategory::Annual, LeaveCategory::Personal] {
                let map = book.intervals_mut(category);

                if let Some(list) = map.get_mut(&date) {
                    list.retain(|i| !i.same_span(start, end));
                    if list.is_empty() {
                        map.remove(&date);
                    }
                }
            }
        }
    }

    fn add_deductions(&self, book: &mut LeaveBook, record: &LeaveRecord) {
        let Some(key) = record.auth_key.as_deref().filter(|k| !k.trim().is_empty()) else {
            skip(
                book,
                format!("delay deduction without authorization key: {}", record.abstract_text),
            );
            return;
        };

        let entries = match self.deductions.deduction_entries(key) {
            Ok(entries) => entries,
            Err(e) => {
                skip(book, format!("delay deduction '{key}' unavailable: {e}"));
                return;
            }
        };

        for entry in entries {
            let form = &entry.form_data;

            match (parse_timestamp(&form.begin), parse_timestamp(&form.end)) {
                (Some(begin), Some(end)) => book.push(LeaveInterval {
                    date: begin.date(),
                    start: begin.time(),
                    end: end.time(),
                    category: LeaveCategory::DelayDeduction,
                }),
                _ => skip(
                    book,
                    format!(
                        "malformed delay deduction form '{}' - '{}'",
                        form.begin, form.end
                    ),
                ),
            }
        }
    }
}

fn skip(book: &mut LeaveBook, reason: String) {
    warning(&reason);
    book.skipped.push(reason);
}

/// Hours of `category` leave falling inside `month`
pub fn hours_in_month(book: &LeaveBook, category: LeaveCategory, month: YearMonth) -> f64 {
    book.intervals(category)
        .iter()
        .filter(|(d, _)| month.contains(**d))
        .flat_map(|(_, list)| list.iter())
        .map(LeaveInterval::hours)
        .sum::<f64>()
        + 0.0
}
