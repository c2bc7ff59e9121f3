//! Time utilities: parsing and formatting HH:MM clock values and signed
//! hours:minutes durations.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

/// `[-]H+:MM`, minutes strictly below 60.
static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-)?(\d{1,4}):([0-5]\d)$").expect("valid duration regex"));

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Parse a clock value, failing with `InvalidTime` on anything but `HH:MM`.
pub fn parse_clock(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Current local wall-clock time truncated to the minute.
pub fn now_hm() -> NaiveTime {
    let now = Local::now().time();
    NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now)
}

pub fn minutes_of_day(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// Parse a signed `[-]HH:MM` duration into minutes.
///
/// The hour field is not limited to a clock day and may carry a single digit
/// (`-1:30`), which is how some older logs store negative balances.
pub fn parse_signed_duration(s: &str) -> AppResult<i64> {
    let caps = DURATION_RE
        .captures(s.trim())
        .ok_or_else(|| AppError::InvalidDuration(s.to_string()))?;

    let negative = caps.get(1).is_some();
    let hours: i64 = caps[2]
        .parse()
        .map_err(|_| AppError::InvalidDuration(s.to_string()))?;
    let minutes: i64 = caps[3]
        .parse()
        .map_err(|_| AppError::InvalidDuration(s.to_string()))?;

    let total = hours * 60 + minutes;
    Ok(if negative { -total } else { total })
}

/// Parse an unsigned `HH:MM` duration into minutes.
pub fn parse_unsigned_duration(s: &str) -> AppResult<i64> {
    if s.trim_start().starts_with('-') {
        return Err(AppError::InvalidDuration(s.to_string()));
    }
    parse_signed_duration(s)
}

/// `-01:30`, `-00:30`, `00:00`, `12:05`
pub fn format_signed_duration(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Unsigned `HH:MM`; negative inputs are clamped to `00:00`.
pub fn format_unsigned_duration(mins: i64) -> String {
    let m = mins.max(0);
    format!("{:02}:{:02}", m / 60, m % 60)
}
