pub mod attendance;
pub mod calendar;
pub mod clock_event;
pub mod daily_result;
pub mod day_category;
pub mod leave;
pub mod month;
pub mod summary;

pub use attendance::{AttendanceDay, RawPunch};
pub use calendar::MonthCalendar;
pub use clock_event::ClockEvent;
pub use daily_result::DailyResult;
pub use day_category::{DayCategory, PayBucket};
pub use leave::{DeductionEntry, LeaveBook, LeaveCategory, LeaveInterval, LeaveRecord};
pub use month::YearMonth;
pub use summary::MonthlySummary;
