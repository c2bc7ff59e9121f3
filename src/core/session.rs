//! Login / logout state machine over the session log.

use crate::config::DailyTime;
use crate::core::calculator::compute_totals;
use crate::errors::AppResult;
use crate::models::{DailyEntry, Project, Session};
use crate::store::TimesStore;
use crate::utils::date;
use crate::utils::time::{format_time, now_hm};
use chrono::{NaiveDate, NaiveTime};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    LoggedOut,
    LoggedIn,
}

/// Reply of a user-facing operation.
///
/// `Applied` means the log was changed and saved; `Unchanged` carries an
/// informational message and nothing was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Applied(String),
    Unchanged(String),
}

impl Status {
    pub fn text(&self) -> &str {
        match self {
            Status::Applied(s) | Status::Unchanged(s) => s,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Status::Applied(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Owns the in-memory log for one run. Index 0 is always today's entry.
pub struct SessionController {
    store: TimesStore,
    entries: Vec<DailyEntry>,
    daily_time: DailyTime,
    state: LoginState,
}

impl SessionController {
    pub fn open(store: TimesStore, daily_time: DailyTime) -> AppResult<Self> {
        Self::open_on(store, daily_time, date::today())
    }

    /// Load the log and resolve the entry for `today`.
    pub fn open_on(store: TimesStore, daily_time: DailyTime, today: NaiveDate) -> AppResult<Self> {
        let entries = store.load()?;
        Ok(Self::from_entries(store, entries, daily_time, today))
    }

    pub fn from_entries(
        store: TimesStore,
        mut entries: Vec<DailyEntry>,
        daily_time: DailyTime,
        today: NaiveDate,
    ) -> Self {
        let reuse = entries.first().is_some_and(|e| e.is_for(today));

        let state = if reuse {
            if entries[0].open_session().is_some() {
                LoginState::LoggedIn
            } else {
                LoginState::LoggedOut
            }
        } else {
            if let Some(stale) = entries.first()
                && let Some(open) = stale.open_session()
            {
                tracing::warn!(
                    date = %stale.date,
                    start = %open.start_str(),
                    "session left open on an earlier day is ignored"
                );
            }
            entries.insert(0, DailyEntry::new(today));
            LoginState::LoggedOut
        };

        tracing::debug!(?state, entries = entries.len(), "session controller ready");

        Self {
            store,
            entries,
            daily_time,
            state,
        }
    }

    pub fn state(&self) -> LoginState {
        self.state
    }

    pub fn is_logged_in(&self) -> bool {
        self.state == LoginState::LoggedIn
    }

    pub fn entries(&self) -> &[DailyEntry] {
        &self.entries
    }

    pub fn today(&self) -> &DailyEntry {
        &self.entries[0]
    }

    fn today_mut(&mut self) -> &mut DailyEntry {
        &mut self.entries[0]
    }

    fn current_start(&self) -> Option<String> {
        self.today().last_session().map(Session::start_str)
    }

    pub fn log_in(&mut self) -> AppResult<Status> {
        self.log_in_at(now_hm())
    }

    pub fn log_in_at(&mut self, at: NaiveTime) -> AppResult<Status> {
        if self.is_logged_in() {
            return Ok(Status::Unchanged(format!(
                "Already logged in at {}",
                self.current_start().unwrap_or_default()
            )));
        }

        let snapshot = self.today().clone();
        self.today_mut().times.push(Session::open(at));
        self.commit(snapshot, LoginState::LoggedIn)?;

        Ok(Status::Applied(format!(
            "Successfully logged in at {}",
            format_time(at)
        )))
    }

    pub fn log_out(&mut self) -> AppResult<Status> {
        self.log_out_at(now_hm())
    }

    pub fn log_out_at(&mut self, at: NaiveTime) -> AppResult<Status> {
        let start = match (self.state, self.today().open_session()) {
            (LoginState::LoggedIn, Some(open)) => open.start,
            _ => return Ok(Status::Unchanged("Not logged in".into())),
        };

        let previous_grand = self
            .entries
            .get(1)
            .and_then(|e| e.grand_total.as_deref());

        let totals = compute_totals(
            start,
            at,
            self.today().daily_total.as_deref(),
            previous_grand,
            self.daily_time,
        )?;

        let snapshot = self.today().clone();
        let today = self.today_mut();
        today.daily_total = Some(totals.daily_total);
        today.grand_total = Some(totals.grand_total);
        if let Some(session) = today.last_session_mut() {
            session.end = Some(at);
        }
        self.commit(snapshot, LoginState::LoggedOut)?;

        Ok(Status::Applied(format!(
            "Successfully logged out at {}",
            format_time(at)
        )))
    }

    /// Attach `project` to the running session. A second call overwrites the
    /// first.
    pub fn set_project(&mut self, project: &Project) -> AppResult<Status> {
        if !self.is_logged_in() {
            return Ok(Status::Unchanged("not logged in!".into()));
        }

        let snapshot = self.today().clone();
        if let Some(session) = self.today_mut().last_session_mut() {
            session.project = Some(project.name.clone());
        }
        self.commit(snapshot, LoginState::LoggedIn)?;

        Ok(Status::Applied(format!(
            "project {} successfully chosen",
            project.name
        )))
    }

    pub fn welcome_message(&self) -> Status {
        if self.is_logged_in() {
            Status::Unchanged(format!(
                "Last logged in at {}",
                self.current_start().unwrap_or_default()
            ))
        } else {
            Status::Unchanged("Log in to start a session".into())
        }
    }

    /// Save the log and switch state; on failure today's entry is restored.
    fn commit(&mut self, snapshot: DailyEntry, next: LoginState) -> AppResult<()> {
        if let Err(e) = self.store.save(&self.entries) {
            self.entries[0] = snapshot;
            return Err(e);
        }
        tracing::debug!(from = ?self.state, to = ?next, "state transition");
        self.state = next;
        Ok(())
    }
}
