use super::month::YearMonth;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Wage multiplier marking a statutory holiday.
pub const STATUTORY_HOLIDAY_WAGE: u8 = 3;

/// Holiday and make-up workday reference sets scoped to one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCalendar {
    pub month: YearMonth,
    /// date → wage multiplier
    pub holidays: BTreeMap<NaiveDate, u8>,
    /// weekend dates that require attendance
    pub workdays: BTreeSet<NaiveDate>,
}

impl MonthCalendar {
    pub fn new(month: YearMonth) -> Self {
        Self {
            month,
            holidays: BTreeMap::new(),
            workdays: BTreeSet::new(),
        }
    }

    /// Build a calendar keeping only the entries that fall inside `month`.
    pub fn from_entries<H, W>(month: YearMonth, holidays: H, workdays: W) -> Self
    where
        H: IntoIterator<Item = (NaiveDate, u8)>,
        W: IntoIterator<Item = NaiveDate>,
    {
        Self {
            month,
            holidays: holidays
                .into_iter()
                .filter(|(d, _)| month.contains(*d))
                .collect(),
            workdays: workdays.into_iter().filter(|d| month.contains(*d)).collect(),
        }
    }

    pub fn with_holiday(mut self, date: NaiveDate, wage: u8) -> Self {
        if self.month.contains(date) {
            self.holidays.insert(date, wage);
        }
        self
    }

    pub fn with_workday(mut self, date: NaiveDate) -> Self {
        if self.month.contains(date) {
            self.workdays.insert(date);
        }
        self
    }

    pub fn holiday_wage(&self, date: NaiveDate) -> Option<u8> {
        self.holidays.get(&date).copied()
    }

    pub fn is_makeup_workday(&self, date: NaiveDate) -> bool {
        self.workdays.contains(&date)
    }

    /// Saturdays and Sundays of the month not listed in either set.
    pub fn unmarked_weekends(&self) -> u32 {
        self.month
            .weekend_days()
            .filter(|d| !self.holidays.contains_key(d) && !self.workdays.contains(d))
            .count() as u32
    }

    /// days − |holidays| − unmarked weekends, floored at zero
    pub fn required_workdays(&self) -> u32 {
        self.month
            .days_in_month()
            .saturating_sub(self.holidays.len() as u32)
            .saturating_sub(self.unmarked_weekends())
    }
}
