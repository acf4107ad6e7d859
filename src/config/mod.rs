use crate::core::rules::WorkRules;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_time;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys every configuration file is expected to carry.
pub const CONFIG_KEYS: [&str; 11] = [
    "data_dir",
    "hourly_rate",
    "overtime_start",
    "work_start",
    "work_end",
    "leave_day_start",
    "leave_day_end",
    "meal_allowance",
    "workday_meal_threshold",
    "rest_day_meal_threshold",
    "separator_char",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: f64,
    #[serde(default = "default_overtime_start")]
    pub overtime_start: String,
    #[serde(default = "default_work_start")]
    pub work_start: String,
    #[serde(default = "default_work_end")]
    pub work_end: String,
    #[serde(default = "default_leave_day_start")]
    pub leave_day_start: String,
    #[serde(default = "default_leave_day_end")]
    pub leave_day_end: String,
    #[serde(default = "default_meal_allowance")]
    pub meal_allowance: f64,
    /// Overtime hours earning the meal allowance on ordinary days
    #[serde(default = "default_workday_meal_threshold")]
    pub workday_meal_threshold: f64,
    /// Same, for weekends and holidays
    #[serde(default = "default_rest_day_meal_threshold")]
    pub rest_day_meal_threshold: f64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_hourly_rate() -> f64 {
    20.0
}
fn default_overtime_start() -> String {
    "19:00".to_string()
}
fn default_work_start() -> String {
    "09:00".to_string()
}
fn default_work_end() -> String {
    "17:30".to_string()
}
fn default_leave_day_start() -> String {
    "09:00".to_string()
}
fn default_leave_day_end() -> String {
    "18:00".to_string()
}
fn default_meal_allowance() -> f64 {
    20.0
}
fn default_workday_meal_threshold() -> f64 {
    1.0
}
fn default_rest_day_meal_threshold() -> f64 {
    4.0
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::data_dir().to_string_lossy().to_string(),
            hourly_rate: default_hourly_rate(),
            overtime_start: default_overtime_start(),
            work_start: default_work_start(),
            work_end: default_work_end(),
            leave_day_start: default_leave_day_start(),
            leave_day_end: default_leave_day_end(),
            meal_allowance: default_meal_allowance(),
            workday_meal_threshold: default_workday_meal_threshold(),
            rest_day_meal_threshold: default_rest_day_meal_threshold(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rovertime")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rovertime")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rovertime.conf")
    }

    /// Default directory holding attendance, holiday and leave files
    pub fn data_dir() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Load configuration from an explicit file, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Data directory with `~/` expanded
    pub fn resolved_data_dir(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// Build the work rules used by the calculators
    pub fn rules(&self) -> AppResult<WorkRules> {
        let time = |s: &str| parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()));

        non_negative("hourly_rate", self.hourly_rate)?;

        Ok(WorkRules {
            overtime_start: time(&self.overtime_start)?,
            work_start: time(&self.work_start)?,
            work_end: time(&self.work_end)?,
            leave_day_start: time(&self.leave_day_start)?,
            leave_day_end: time(&self.leave_day_end)?,
            meal_allowance: non_negative("meal_allowance", self.meal_allowance)?,
            workday_meal_threshold: non_negative(
                "workday_meal_threshold",
                self.workday_meal_threshold,
            )?,
            rest_day_meal_threshold: non_negative(
                "rest_day_meal_threshold",
                self.rest_day_meal_threshold,
            )?,
        })
    }

    /// Return the keys of [`CONFIG_KEYS`] missing from the file at `path`
    pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let yaml: Value = serde_yaml::from_str(&content)?;

        let map = yaml
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration root is not a mapping".into()))?;

        Ok(CONFIG_KEYS
            .iter()
            .filter(|k| !map.contains_key(Value::String(k.to_string())))
            .map(|k| k.to_string())
            .collect())
    }

    /// Initialize configuration file and data directory
    pub fn init_all(config_path: Option<&Path>, is_test: bool) -> AppResult<PathBuf> {
        let path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let mut config = Config::default();

        // A custom config file keeps its data directory beside it
        if config_path.is_some()
            && let Some(dir) = path.parent()
        {
            config.data_dir = dir.join("data").to_string_lossy().to_string();
        }

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())?;
        }

        let data_dir = config.resolved_data_dir();
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir)?;
        }

        Ok(path)
    }
}

/// Reject NaN, infinities and negative amounts
pub fn non_negative(name: &str, value: f64) -> AppResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::Config(format!(
            "{name} must be a finite, non-negative number (got {value})"
        )));
    }
    Ok(value)
}
