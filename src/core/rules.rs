//! Fixed pay rules and the explicit context a monthly run is computed under.

use crate::models::{PayBucket, YearMonth};
use chrono::NaiveTime;

#[derive(Debug, Clone, PartialEq)]
pub struct WorkRules {
    /// Ordinary-day overtime starts here
    pub overtime_start: NaiveTime,
    /// Arrivals after this are late on ordinary days
    pub work_start: NaiveTime,
    /// Departures before this are early leave on ordinary days
    pub work_end: NaiveTime,
    /// Bounds of a full leave day
    pub leave_day_start: NaiveTime,
    pub leave_day_end: NaiveTime,
    pub meal_allowance: f64,
    /// Overtime hours earning the meal allowance on ordinary days
    pub workday_meal_threshold: f64,
    /// Same, for weekends and holidays
    pub rest_day_meal_threshold: f64,
}

impl Default for WorkRules {
    fn default() -> Self {
        Self {
            overtime_start: hm(19, 0),
            work_start: hm(9, 0),
            work_end: hm(17, 30),
            leave_day_start: hm(9, 0),
            leave_day_end: hm(18, 0),
            meal_allowance: 20.0,
            workday_meal_threshold: 1.0,
            rest_day_meal_threshold: 4.0,
        }
    }
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
}

/// Priority in which personal leave consumes overtime buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NettingOrder(pub [PayBucket; 3]);

impl Default for NettingOrder {
    fn default() -> Self {
        NettingOrder([PayBucket::Workday, PayBucket::Weekend, PayBucket::Holiday])
    }
}

/// Everything a reconciliation needs besides the data itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollContext {
    pub month: YearMonth,
    pub hourly_rate: f64,
    pub rules: WorkRules,
    pub netting_order: NettingOrder,
}

impl PayrollContext {
    pub const DEFAULT_HOURLY_RATE: f64 = 20.0;

    pub fn new(month: YearMonth) -> Self {
        Self {
            month,
            hourly_rate: Self::DEFAULT_HOURLY_RATE,
            rules: WorkRules::default(),
            netting_order: NettingOrder::default(),
        }
    }

    pub fn with_hourly_rate(mut self, rate: f64) -> Self {
        self.hourly_rate = rate;
        self
    }

    pub fn with_rules(mut self, rules: WorkRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_netting_order(mut self, order: NettingOrder) -> Self {
        self.netting_order = order;
        self
    }
}
