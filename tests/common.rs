#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use rworkhours::config::DailyTime;
use rworkhours::core::SessionController;
use rworkhours::store::TimesStore;
use std::path::{Path, PathBuf};

/// Binary under test with `HOME` pointed at `home`.
pub fn rwh(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rworkhours");
    cmd.env("HOME", home).env("APPDATA", home).env_remove("RUST_LOG");
    cmd
}

pub fn config_file(home: &Path) -> PathBuf {
    home.join(".rworkhours").join("rworkhours.conf")
}

pub fn times_file(home: &Path) -> PathBuf {
    home.join(".rworkhours").join("work_times.json")
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn hm(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid time")
}

pub const STANDARD_DAY: DailyTime = DailyTime(7, 30);

pub fn open(path: &Path, today: NaiveDate) -> SessionController {
    SessionController::open_on(TimesStore::new(path), STANDARD_DAY, today).expect("open log")
}
