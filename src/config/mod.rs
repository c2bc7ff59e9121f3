use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Expected work time per day, persisted as `[hours, minutes]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTime(pub u32, pub u32);

impl DailyTime {
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self(hours, minutes)
    }

    pub fn hours(&self) -> u32 {
        self.0
    }

    pub fn minutes(&self) -> u32 {
        self.1
    }

    pub fn as_minutes(&self) -> i64 {
        self.0 as i64 * 60 + self.1 as i64
    }
}

impl Default for DailyTime {
    fn default() -> Self {
        Self(7, 30)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_projects")]
    pub projects: Vec<String>,
    #[serde(default)]
    pub daily_time: DailyTime,
    #[serde(default = "default_times_file")]
    pub times_file: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_projects() -> Vec<String> {
    (1..=6).map(|i| format!("Project{}", i)).collect()
}

fn default_times_file() -> String {
    Config::config_dir()
        .join("work_times.json")
        .to_string_lossy()
        .to_string()
}

fn default_log_file() -> String {
    Config::config_dir()
        .join("work_log.jsonl")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            projects: default_projects(),
            daily_time: DailyTime::default(),
            times_file: default_times_file(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworkhours")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworkhours")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkhours.conf")
    }

    pub fn times_path(&self) -> PathBuf {
        expand_tilde(&self.times_file)
    }

    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }

    /// Resolve a `--file` override: `~` is expanded and relative paths are
    /// taken from the configuration directory, not the working directory.
    pub fn resolve_times_file(name: &str) -> String {
        let p = expand_tilde(name);
        let resolved = if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        };
        resolved.to_string_lossy().to_string()
    }

    /// Load the configuration file, writing the built-in defaults first if it
    /// does not exist yet.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            Self::load_from(&path)
        } else {
            let cfg = Config::default();
            cfg.save_to(&path)?;
            tracing::info!(path = %path.display(), "wrote default configuration");
            Ok(cfg)
        }
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), projects = cfg.projects.len(), "loaded configuration");
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize configuration and the session log.
    ///
    /// `times_file` overrides the session log location; relative paths are
    /// resolved against the configuration directory.
    pub fn init_all(times_file: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = if Self::config_file().exists() {
            Self::load_from(&Self::config_file())?
        } else {
            Config::default()
        };

        if let Some(name) = times_file {
            config.times_file = Self::resolve_times_file(&name);
        }

        if !is_test {
            config.save_to(&Self::config_file())?;
        }

        let times = config.times_path();
        if let Some(parent) = times.parent() {
            fs::create_dir_all(parent)?;
        }
        if !times.exists() {
            fs::write(&times, "[]")?;
        }

        Ok(config)
    }
}
