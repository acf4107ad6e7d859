//! Providers backed by JSON/CSV files in a data directory.
//!
//! Layout (a `-YYYY-MM` suffixed file wins over the plain one):
//! - `attendance.json` / `attendance.csv`: grouped days or raw punches
//! - `holidays.json`: `{holidays, workdays}` or the holiday-API layout
//! - `leave.json`: leave applications (optional)
//! - `deductions.json`: authorization key → delay-deduction forms (optional)

use super::{
    AttendanceProvider, DelayDeductionProvider, HolidayCalendarProvider, LeaveRecordsProvider,
};
use crate::core::calculator::attendance::group_punches;
use crate::errors::{AppError, AppResult};
use crate::models::{
    AttendanceDay, DeductionEntry, LeaveRecord, MonthCalendar, RawPunch, YearMonth,
};
use crate::utils::date::parse_date;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
#[serde(untagged)]
enum AttendanceFile {
    Punches(Vec<RawPunch>),
    Days(Vec<AttendanceDay>),
}

#[derive(Deserialize)]
struct ApiDay {
    holiday: bool,
    #[serde(default)]
    wage: Option<u8>,
    #[serde(default)]
    date: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HolidayFile {
    Direct {
        holidays: BTreeMap<String, u8>,
        #[serde(default)]
        workdays: Vec<String>,
    },
    Api {
        holiday: BTreeMap<String, ApiDay>,
    },
}

pub struct FileProvider {
    dir: PathBuf,
}

impl FileProvider {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// `<stem>-YYYY-MM.<ext>` if present, else `<stem>.<ext>`
    fn locate(&self, stem: &str, month: Option<YearMonth>, ext: &str) -> Option<PathBuf> {
        let monthly = month.map(|m| self.dir.join(format!("{stem}-{m}.{ext}")));
        let plain = self.dir.join(format!("{stem}.{ext}"));

        monthly
            .into_iter()
            .chain(std::iter::once(plain))
            .find(|p| p.exists())
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

fn malformed(what: &str, path: &Path, e: impl std::fmt::Display) -> AppError {
    AppError::EmptyOrMalformedData(format!("{what} file {}: {e}", path.display()))
}

impl AttendanceProvider for FileProvider {
    fn attendance(&self, month: YearMonth) -> AppResult<Vec<AttendanceDay>> {
        let days = if let Some(path) = self.locate("attendance", Some(month), "json") {
            match Self::read_json::<AttendanceFile>(&path) {
                Ok(AttendanceFile::Punches(p)) => group_punches(&p),
                Ok(AttendanceFile::Days(d)) => d,
                Err(e) => return Err(malformed("attendance", &path, e)),
            }
        } else if let Some(path) = self.locate("attendance", Some(month), "csv") {
            let mut rdr = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_path(&path)?;

            let punches = rdr
                .deserialize::<RawPunch>()
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| malformed("attendance", &path, e))?;

            group_punches(&punches)
        } else {
            return Err(AppError::EmptyOrMalformedData(format!(
                "no attendance file in {}",
                self.dir.display()
            )));
        };

        if days.is_empty() {
            return Err(AppError::EmptyOrMalformedData(
                "attendance file contains no records".into(),
            ));
        }

        Ok(days)
    }
}

impl HolidayCalendarProvider for FileProvider {
    fn calendar(&self, month: YearMonth) -> AppResult<MonthCalendar> {
        let path = self.locate("holidays", Some(month), "json").ok_or_else(|| {
            AppError::EmptyOrMalformedData(format!("no holidays file in {}", self.dir.display()))
        })?;

        let file: HolidayFile =
            Self::read_json(&path).map_err(|e| malformed("holidays", &path, e))?;

        let date = |s: &str| {
            parse_date(s).ok_or_else(|| malformed("holidays", &path, format!("bad date '{s}'")))
        };

        let (holidays, workdays) = match file {
            HolidayFile::Direct { holidays, workdays } => {
                let holidays = holidays
                    .iter()
                    .map(|(d, wage)| Ok((date(d.as_str())?, *wage)))
                    .collect::<AppResult<Vec<_>>>()?;
                let workdays = workdays
                    .iter()
                    .map(|d| date(d.as_str()))
                    .collect::<AppResult<Vec<_>>>()?;
                (holidays, workdays)
            }
            HolidayFile::Api { holiday } => {
                let mut holidays = Vec::new();
                let mut workdays = Vec::new();

                for (key, day) in &holiday {
                    // keys are MM-DD; the entry's own date wins when present
                    let full = day
                        .date
                        .clone()
                        .unwrap_or_else(|| format!("{:04}-{key}", month.year));
                    let d = date(full.as_str())?;

                    if day.holiday {
                        holidays.push((d, day.wage.unwrap_or(0)));
                    } else {
                        workdays.push(d);
                    }
                }
                (holidays, workdays)
            }
        };

        Ok(MonthCalendar::from_entries(month, holidays, workdays))
    }
}

impl LeaveRecordsProvider for FileProvider {
    fn leave_records(&self, month: YearMonth) -> AppResult<Vec<LeaveRecord>> {
        match self.locate("leave", Some(month), "json") {
            Some(path) => Self::read_json(&path),
            None => Ok(Vec::new()),
        }
    }
}

impl DelayDeductionProvider for FileProvider {
    fn deduction_entries(&self, auth_key: &str) -> AppResult<Vec<DeductionEntry>> {
        let Some(path) = self.locate("deductions", None, "json") else {
            return Err(AppError::Provider("no deductions file".into()));
        };

        let mut forms: BTreeMap<String, Vec<DeductionEntry>> = Self::read_json(&path)?;

        forms
            .remove(auth_key)
            .ok_or_else(|| AppError::Provider(format!("no deduction forms for key '{auth_key}'")))
    }
}
