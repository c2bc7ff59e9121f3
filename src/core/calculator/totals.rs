//! Daily and grand totals for a finished session.
//!
//! The daily total is the time worked on the current date. The grand total is
//! the running balance against the expected daily time: it is rebuilt at every
//! logout from the previous day's balance plus the whole daily total minus the
//! expected time for one day.

use crate::config::DailyTime;
use crate::errors::{AppError, AppResult};
use crate::utils::time::{
    format_signed_duration, format_time, format_unsigned_duration, minutes_of_day, parse_clock,
    parse_signed_duration, parse_unsigned_duration,
};
use chrono::NaiveTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    pub daily_total: String,
    pub grand_total: String,
}

/// Minutes between two clock values of the same day.
///
/// Sessions crossing midnight are not supported: `end` earlier than `start`
/// is rejected.
pub fn elapsed_minutes(start: NaiveTime, end: NaiveTime) -> AppResult<i64> {
    let elapsed = minutes_of_day(end) - minutes_of_day(start);
    if elapsed < 0 {
        return Err(AppError::InvalidTime(format!(
            "session end {} is earlier than its start {}",
            format_time(end),
            format_time(start)
        )));
    }
    Ok(elapsed)
}

pub fn compute_totals(
    start: NaiveTime,
    end: NaiveTime,
    daily_total: Option<&str>,
    grand_total: Option<&str>,
    daily_time: DailyTime,
) -> AppResult<Totals> {
    let prior_daily = daily_total.map(parse_unsigned_duration).transpose()?.unwrap_or(0);
    let prior_grand = grand_total.map(parse_signed_duration).transpose()?.unwrap_or(0);

    let daily = prior_daily + elapsed_minutes(start, end)?;
    let grand = prior_grand + daily - daily_time.as_minutes();

    Ok(Totals {
        daily_total: format_unsigned_duration(daily),
        grand_total: format_signed_duration(grand),
    })
}

/// String flavour of [`compute_totals`] taking `HH:MM` clock values.
pub fn comp_totals(
    start: &str,
    end: &str,
    daily_total: Option<&str>,
    grand_total: Option<&str>,
    daily_time: DailyTime,
) -> AppResult<Totals> {
    compute_totals(
        parse_clock(start)?,
        parse_clock(end)?,
        daily_total,
        grand_total,
        daily_time,
    )
}
