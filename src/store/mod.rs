//! JSON-file backing store for the session log.

pub mod log;

use crate::errors::AppResult;
use crate::models::DailyEntry;
use std::fs;
use std::path::{Path, PathBuf};

/// The session log file: an array of daily entries, most recent first.
#[derive(Debug, Clone)]
pub struct TimesStore {
    path: PathBuf,
}

impl TimesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole log. A missing file is an empty log.
    pub fn load(&self) -> AppResult<Vec<DailyEntry>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no session log yet");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries: Vec<DailyEntry> = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), entries = entries.len(), "loaded session log");
        Ok(entries)
    }

    /// Rewrite the whole log. The data goes to a sibling temp file first and
    /// is renamed over the target.
    pub fn save(&self, entries: &[DailyEntry]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), entries = entries.len(), "saved session log");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "work_times.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
