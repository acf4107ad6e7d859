//! Grouping raw punches into days and picking each day's first/last check.

use crate::models::{AttendanceDay, ClockEvent, RawPunch};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Marker the HR export uses for voided punches.
const VOID_MARKER: &str = "无效";

/// Group raw punch rows by calendar date, dates ascending and each day's
/// timestamps in time order. Empty or voided timestamps are dropped.
pub fn group_punches(punches: &[RawPunch]) -> Vec<AttendanceDay> {
    let mut by_date: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for p in punches {
        let time = p.time.trim();
        if p.date.trim().is_empty() || time.is_empty() || time.contains(VOID_MARKER) {
            continue;
        }

        by_date
            .entry(p.date.trim().to_string())
            .or_default()
            .push(time.to_string());
    }

    by_date
        .into_iter()
        .map(|(date, mut clock)| {
            clock.sort_by_key(|t| sort_key(t));
            AttendanceDay {
                date,
                clock,
                ..Default::default()
            }
        })
        .collect()
}

/// Time-of-day part of a raw timestamp, for ordering
fn sort_key(raw: &str) -> String {
    raw.rsplit(' ').next().unwrap_or(raw).to_string()
}

/// First and last check of a day plus the timestamps that could not be parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayChecks {
    pub first: Option<ClockEvent>,
    pub last: Option<ClockEvent>,
    pub skipped: Vec<String>,
}

/// Earliest and latest parsable timestamp of the day.
pub fn first_last(date: NaiveDate, clock: &[String]) -> DayChecks {
    let mut skipped = Vec::new();

    let mut events: Vec<ClockEvent> = clock
        .iter()
        .filter_map(|raw| match ClockEvent::parse(date, raw) {
            Ok(ev) => Some(ev),
            Err(_) => {
                skipped.push(raw.clone());
                None
            }
        })
        .collect();

    events.sort_by_key(|e| e.time);

    DayChecks {
        first: events.first().copied(),
        last: events.last().copied(),
        skipped,
    }
}
