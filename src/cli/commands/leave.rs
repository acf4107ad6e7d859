use super::{data_dir, month_arg, separator};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::leave::{LeaveExtractor, hours_in_month};
use crate::core::report::render_leave_table;
use crate::errors::AppResult;
use crate::models::LeaveCategory;
use crate::providers::{FileProvider, LeaveRecordsProvider};
use crate::ui::messages::info;
use crate::utils::fmt_hours;

/// Handle the `leave` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Leave { month, data } = cmd {
        let month = month_arg(month)?;
        let rules = cfg.rules()?;

        let provider = FileProvider::new(data_dir(data, cfg));
        let records = provider.leave_records(month)?;
        let book = LeaveExtractor::new(&rules, &provider).extract(&records);

        if LeaveCategory::ALL.iter().all(|c| book.count(*c) == 0) {
            info(format!("No leave recorded for {month}"));
            return Ok(());
        }

        println!("{}", render_leave_table(&book, separator(cfg)));
        for category in LeaveCategory::ALL {
            println!(
                "{}: {}",
                category.label(),
                fmt_hours(hours_in_month(&book, category, month))
            );
        }
    }

    Ok(())
}
