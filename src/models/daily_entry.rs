use super::session::Session;
use crate::utils::date::date_key;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// All sessions recorded for one calendar date, plus the totals computed at
/// the last logout of that date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub date: String,
    #[serde(default)]
    pub times: Vec<Session>,
    #[serde(rename = "daily total", default)]
    pub daily_total: Option<String>,
    #[serde(rename = "grand total", default)]
    pub grand_total: Option<String>,
}

impl DailyEntry {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: date_key(date),
            times: Vec::new(),
            daily_total: None,
            grand_total: None,
        }
    }

    pub fn is_for(&self, date: NaiveDate) -> bool {
        self.date == date_key(date)
    }

    pub fn last_session(&self) -> Option<&Session> {
        self.times.last()
    }

    pub fn last_session_mut(&mut self) -> Option<&mut Session> {
        self.times.last_mut()
    }

    /// The trailing session, if it has no end yet.
    pub fn open_session(&self) -> Option<&Session> {
        self.last_session().filter(|s| s.is_open())
    }
}
