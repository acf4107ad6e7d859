#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    cargo_bin_cmd!("rovertime")
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Create an empty, unique data directory inside the system temp dir
pub fn setup_data_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rovertime_data", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).unwrap();
    path
}

pub fn write_file(dir: &PathBuf, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

/// A configuration file pointing at `data_dir`, beside it in the temp dir
pub fn write_config(name: &str, data_dir: &PathBuf) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rovertime.conf", name));
    let yaml = format!(
        "data_dir: {}\nhourly_rate: 20.0\novertime_start: \"19:00\"\nwork_start: \"09:00\"\nwork_end: \"17:30\"\nleave_day_start: \"09:00\"\nleave_day_end: \"18:00\"\nmeal_allowance: 20.0\nworkday_meal_threshold: 1.0\nrest_day_meal_threshold: 4.0\nseparator_char: \"-\"\n",
        data_dir.display()
    );
    fs::write(&path, yaml).unwrap();
    path.to_string_lossy().to_string()
}

/// January 2025: Jan 1 statutory holiday, Jan 26 (Sunday) make-up workday,
/// three days of attendance and one personal leave afternoon.
pub fn init_january_data(name: &str) -> (PathBuf, String) {
    let dir = setup_data_dir(name);

    write_file(
        &dir,
        "holidays.json",
        r#"{"holidays": {"2025-01-01": 3}, "workdays": ["2025-01-26"]}"#,
    );

    write_file(
        &dir,
        "attendance.json",
        r#"[
            {"date": "2025-01-01", "clock": ["10:00:00", "14:00:00"]},
            {"date": "2025-01-02", "clock": ["08:55:00", "12:00:00", "20:30:00"]},
            {"date": "2025-01-03", "clock": ["09:20:00", "21:00:00"]},
            {"date": "2025-01-04", "clock": ["10:00:00", "15:00:00(异地打卡)"]}
        ]"#,
    );

    write_file(
        &dir,
        "leave.json",
        r#"[
            {"abstract": "张三|事假|1天|2025-01-06 14:00 - 2025-01-06 18:00"}
        ]"#,
    );

    let cfg = write_config(name, &dir);
    (dir, cfg)
}
