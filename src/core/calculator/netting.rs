//! Netting of personal leave and lateness against accrued overtime.

use crate::core::rules::NettingOrder;
use crate::models::summary::LatenessNetting;
use crate::models::{DailyResult, PayBucket};
use std::ops::ControlFlow;

/// Overtime hours per pay bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BucketHours {
    pub workday: f64,
    pub weekend: f64,
    pub holiday: f64,
}

impl BucketHours {
    pub fn new(workday: f64, weekend: f64, holiday: f64) -> Self {
        Self {
            workday,
            weekend,
            holiday,
        }
    }

    pub fn from_results(results: &[DailyResult]) -> Self {
        results.iter().fold(Self::default(), |acc, r| {
            let bucket = r.day_category.bucket();
            acc.with(bucket, acc.get(bucket) + r.overtime_hours)
        })
    }

    pub fn get(&self, bucket: PayBucket) -> f64 {
        match bucket {
            PayBucket::Workday => self.workday,
            PayBucket::Weekend => self.weekend,
            PayBucket::Holiday => self.holiday,
        }
    }

    pub fn with(mut self, bucket: PayBucket, hours: f64) -> Self {
        match bucket {
            PayBucket::Workday => self.workday = hours,
            PayBucket::Weekend => self.weekend = hours,
            PayBucket::Holiday => self.holiday = hours,
        }
        self
    }

    pub fn total(&self) -> f64 {
        self.workday + self.weekend + self.holiday
    }

    /// Σ hours × bucket rate
    pub fn pay(&self, hourly_rate: f64) -> f64 {
        [PayBucket::Workday, PayBucket::Weekend, PayBucket::Holiday]
            .iter()
            .map(|b| self.get(*b) * b.rate(hourly_rate))
            .sum()
    }
}

/// Accumulator of the leave fold: leave still to consume and the netted buckets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaveNetting {
    pub remaining_leave: f64,
    pub netted: BucketHours,
}

/// Consume `leave_hours` bucket by bucket in `order`, never below zero.
/// Leave left after the last bucket is dropped.
pub fn net_leave(hours: BucketHours, leave_hours: f64, order: NettingOrder) -> LeaveNetting {
    let start = LeaveNetting {
        remaining_leave: leave_hours.max(0.0),
        netted: hours,
    };

    order.0.iter().fold(start, |acc, bucket| {
        let available = acc.netted.get(*bucket).max(0.0);
        let consumed = available.min(acc.remaining_leave);

        LeaveNetting {
            remaining_leave: acc.remaining_leave - consumed,
            netted: acc.netted.with(*bucket, available - consumed),
        }
    })
}

/// Penalty minutes for one late arrival:
/// 1–30 → 60 + late, 31–60 → 120 + late, over 60 → flat 480.
pub fn lateness_penalty(late_minutes: i64) -> i64 {
    match late_minutes {
        i64::MIN..=0 => 0,
        1..=30 => 60 + late_minutes,
        31..=60 => 120 + late_minutes,
        _ => 480,
    }
}

/// Walk the days in the given order, deducting each day's penalty from the
/// remainder that starts at `total_late_minutes`; stops once it reaches zero.
pub fn net_lateness(results: &[DailyResult], total_late_minutes: i64) -> LatenessNetting {
    let start = LatenessNetting {
        starting_minutes: total_late_minutes,
        penalty_minutes: 0,
        remaining_minutes: total_late_minutes,
        occurrences: 0,
    };

    let flow = results.iter().try_fold(start, |acc, day| {
        if acc.remaining_minutes <= 0 {
            return ControlFlow::Break(acc);
        }

        let penalty = lateness_penalty(day.late_minutes);
        if penalty == 0 {
            return ControlFlow::Continue(acc);
        }

        ControlFlow::Continue(LatenessNetting {
            penalty_minutes: acc.penalty_minutes + penalty,
            remaining_minutes: acc.remaining_minutes - penalty,
            occurrences: acc.occurrences + 1,
            ..acc
        })
    });

    match flow {
        ControlFlow::Continue(acc) | ControlFlow::Break(acc) => acc,
    }
}
