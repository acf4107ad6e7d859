//! Seams to the systems the attendance, holiday and leave data come from.

pub mod file;

use crate::errors::AppResult;
use crate::models::{AttendanceDay, DeductionEntry, LeaveRecord, MonthCalendar, YearMonth};

pub use file::FileProvider;

pub trait AttendanceProvider {
    /// Clock readings grouped by calendar date
    fn attendance(&self, month: YearMonth) -> AppResult<Vec<AttendanceDay>>;
}

pub trait HolidayCalendarProvider {
    /// Holidays and make-up workdays of `month`
    fn calendar(&self, month: YearMonth) -> AppResult<MonthCalendar>;
}

pub trait LeaveRecordsProvider {
    fn leave_records(&self, month: YearMonth) -> AppResult<Vec<LeaveRecord>>;
}

pub trait DelayDeductionProvider {
    fn deduction_entries(&self, auth_key: &str) -> AppResult<Vec<DeductionEntry>>;
}

/// A delay-deduction source with nothing in it.
pub struct NoDeductions;

impl DelayDeductionProvider for NoDeductions {
    fn deduction_entries(&self, _auth_key: &str) -> AppResult<Vec<DeductionEntry>> {
        Ok(Vec::new())
    }
}

/// The four sources one monthly run reads from.
pub struct Sources<'a> {
    pub attendance: &'a dyn AttendanceProvider,
    pub calendar: &'a dyn HolidayCalendarProvider,
    pub leave: &'a dyn LeaveRecordsProvider,
    pub deductions: &'a dyn DelayDeductionProvider,
}

impl<'a> Sources<'a> {
    /// All four sources served by one provider
    pub fn all<P>(provider: &'a P) -> Self
    where
        P: AttendanceProvider + HolidayCalendarProvider + LeaveRecordsProvider + DelayDeductionProvider,
    {
        Self {
            attendance: provider,
            calendar: provider,
            leave: provider,
            deductions: provider,
        }
    }
}
