pub mod calc;
pub mod classify;
pub mod config;
pub mod init;
pub mod leave;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::YearMonth;
use crate::utils::date::today;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// `--data` if given, else the configured data directory
fn data_dir(data: &Option<String>, cfg: &Config) -> PathBuf {
    data.as_deref()
        .map(expand_tilde)
        .unwrap_or_else(|| cfg.resolved_data_dir())
}

/// Parse `YYYY-MM`, defaulting to the current month
fn month_arg(month: &Option<String>) -> AppResult<YearMonth> {
    match month {
        Some(m) => m.parse(),
        None => Ok(YearMonth::of(today())),
    }
}

fn separator(cfg: &Config) -> char {
    cfg.separator_char.chars().next().unwrap_or('-')
}
