//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / persistence
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Session log error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration format error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid duration format: {0}")]
    InvalidDuration(String),

    #[error("Invalid session record: {0}")]
    InvalidSession(String),

    #[error("Unknown project: {0}")]
    InvalidProject(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Backup errors
    // ---------------------------
    #[error("Backup error: {0}")]
    Backup(String),
}

pub type AppResult<T> = Result<T, AppError>;
