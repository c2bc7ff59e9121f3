use crate::errors::AppError;
use crate::utils::time::{format_time, parse_clock, parse_time};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One login-to-logout interval of a day.
///
/// On disk a session is a short JSON list: `[start]`, `[start, end]`,
/// `[start, end, project]` or `[start, null, project]`. Older files may carry
/// `[start, project]` or several project names after the start/end slots;
/// the last name is the one kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<String>>", into = "Vec<Option<String>>")]
pub struct Session {
    pub start: NaiveTime,
    pub end: Option<NaiveTime>,
    pub project: Option<String>,
}

impl Session {
    pub fn open(start: NaiveTime) -> Self {
        Self {
            start,
            end: None,
            project: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    pub fn start_str(&self) -> String {
        format_time(self.start)
    }

    pub fn end_str(&self) -> Option<String> {
        self.end.map(format_time)
    }
}

impl TryFrom<Vec<Option<String>>> for Session {
    type Error = AppError;

    fn try_from(slots: Vec<Option<String>>) -> Result<Self, Self::Error> {
        let start = match slots.first() {
            Some(Some(s)) => parse_clock(s)?,
            _ => {
                return Err(AppError::InvalidSession(
                    "a session must start with a HH:MM time".into(),
                ));
            }
        };

        // Slot 1 is the end time when it reads as HH:MM; every other string
        // is a project name and the last one written wins.
        let mut rest = slots.iter().skip(1);
        let end = match slots.get(1) {
            Some(Some(s)) => parse_time(s),
            _ => None,
        };
        if end.is_some() {
            rest.next();
        }
        let project = rest.flatten().last().cloned();

        Ok(Session {
            start,
            end,
            project,
        })
    }
}

impl From<Session> for Vec<Option<String>> {
    fn from(s: Session) -> Self {
        let start = Some(format_time(s.start));
        let end = s.end.map(format_time);
        match (end, s.project) {
            (None, None) => vec![start],
            (Some(e), None) => vec![start, Some(e)],
            (end, Some(p)) => vec![start, end, Some(p)],
        }
    }
}
