//! Append-only audit trail of applied operations (JSON lines).

use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLine {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append one line to the audit log.
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let line = LogLine {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", serde_json::to_string(&line)?)?;
    Ok(())
}

/// Same as [`ttlog`], but a failure only produces a warning.
pub fn ttlog_quiet(path: &Path, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(path, operation, target, message) {
        crate::ui::messages::warning(format!("Failed to write internal log: {}", e));
    }
}

/// Read every line of the audit log; a missing file yields no lines.
pub fn read_all(path: &Path) -> AppResult<Vec<LogLine>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = fs::File::open(path)?;
    let mut lines = Vec::new();
    for raw in BufReader::new(file).lines() {
        let raw = raw?;
        if raw.trim().is_empty() {
            continue;
        }
        lines.push(serde_json::from_str(&raw)?);
    }
    Ok(lines)
}
