use super::{data_dir, month_arg, separator};
use crate::cli::parser::Commands;
use crate::config::{Config, non_negative};
use crate::core::logic::Core;
use crate::core::report::render_daily_table;
use crate::core::rules::PayrollContext;
use crate::errors::AppResult;
use crate::models::{DailyResult, MonthlySummary};
use crate::providers::{FileProvider, Sources};
use serde::Serialize;

#[derive(Serialize)]
struct CalcOutput<'a> {
    summary: &'a MonthlySummary,
    days: &'a [DailyResult],
}

/// Handle the `calc` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        month,
        data,
        rate,
        personal_leave_hours,
        details,
        json,
    } = cmd
    {
        let month = month_arg(month)?;
        let hourly_rate = non_negative("hourly rate", rate.unwrap_or(cfg.hourly_rate))?;
        let personal_leave_hours = personal_leave_hours
            .map(|h| non_negative("personal leave hours", h))
            .transpose()?;

        let ctx = PayrollContext::new(month)
            .with_hourly_rate(hourly_rate)
            .with_rules(cfg.rules()?);

        let provider = FileProvider::new(data_dir(data, cfg));
        let sep = separator(cfg);
        let run = Core::run_month(&Sources::all(&provider), &ctx, personal_leave_hours, sep)?;

        if *json {
            let out = CalcOutput {
                summary: &run.summary,
                days: &run.results,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
            return Ok(());
        }

        if *details {
            println!("{}", render_daily_table(&run.results, sep, true));
        }
        print!("{}", run.report);
    }

    Ok(())
}
