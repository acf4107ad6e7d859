use super::data_dir;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::classifier::classify;
use crate::errors::{AppError, AppResult};
use crate::models::YearMonth;
use crate::providers::{FileProvider, HolidayCalendarProvider};
use crate::utils::date::{parse_date, weekday_label};

/// Handle the `classify` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Classify { date, data } = cmd {
        let day = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;

        let provider = FileProvider::new(data_dir(data, cfg));
        let calendar = provider.calendar(YearMonth::of(day))?;
        let category = classify(day, &calendar);

        println!(
            "{} ({}): {} x{}",
            day.format("%Y-%m-%d"),
            weekday_label(day),
            category.label(),
            category.multiplier()
        );
    }

    Ok(())
}
