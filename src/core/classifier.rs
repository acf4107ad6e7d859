//! Day classification against the month's holiday and make-up workday sets.

use crate::errors::{AppError, AppResult};
use crate::models::calendar::STATUTORY_HOLIDAY_WAGE;
use crate::models::{DayCategory, MonthCalendar};
use crate::utils::date::{is_weekend, parse_date};
use chrono::NaiveDate;

/// Holiday set first (3x wage → Holiday, otherwise WeekendHoliday),
/// then unlisted Saturdays/Sundays → Weekend, everything else → OrdinaryWorkday.
pub fn classify(date: NaiveDate, calendar: &MonthCalendar) -> DayCategory {
    if let Some(wage) = calendar.holiday_wage(date) {
        return if wage == STATUTORY_HOLIDAY_WAGE {
            DayCategory::Holiday
        } else {
            DayCategory::WeekendHoliday
        };
    }

    if !calendar.is_makeup_workday(date) && is_weekend(date) {
        return DayCategory::Weekend;
    }

    DayCategory::OrdinaryWorkday
}

pub fn classify_str(date: &str, calendar: &MonthCalendar) -> AppResult<DayCategory> {
    let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
    Ok(classify(d, calendar))
}

/// An explicit, recognised label wins over the calendar.
pub fn classify_with_label(
    date: NaiveDate,
    label: Option<&str>,
    calendar: &MonthCalendar,
) -> DayCategory {
    label
        .and_then(DayCategory::from_label)
        .unwrap_or_else(|| classify(date, calendar))
}
