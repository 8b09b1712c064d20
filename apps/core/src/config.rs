//! Runtime configuration, read once at startup from the environment (and `.env` if present).

use crate::error::AppError;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

const DEFAULT_DATABASE_URL: &str = "sqlite://data/wellness_bot.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_RISK_WINDOW_DAYS: i64 = 7;
pub const DEFAULT_ANALYTICS_WINDOW_DAYS: i64 = 30;
pub const DEFAULT_RECENT_LIMIT: i64 = 50;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "WELLNESS_LOG_FORMAT must be 'pretty' or 'json', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite connection URL for the interaction store.
    pub database_url: String,
    pub max_connections: u32,
    /// Trailing window used by the burnout risk evaluator when the caller gives none.
    pub risk_window_days: i64,
    /// Trailing window of the daily average score in the analytics summary.
    pub analytics_window_days: i64,
    pub recent_limit: i64,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            risk_window_days: DEFAULT_RISK_WINDOW_DAYS,
            analytics_window_days: DEFAULT_ANALYTICS_WINDOW_DAYS,
            recent_limit: DEFAULT_RECENT_LIMIT,
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if any) and then reads the `WELLNESS_*` variables.
    pub fn load() -> Result<Self, AppError> {
        // A missing .env file is the normal case in deployments.
        let _ = dotenv::dotenv();
        Self::from_env()
    }

    /// Reads the `WELLNESS_*` variables, falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let config = Self {
            database_url: env::var("WELLNESS_DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse_var("WELLNESS_DB_MAX_CONNECTIONS", defaults.max_connections)?,
            risk_window_days: parse_var("WELLNESS_RISK_WINDOW_DAYS", defaults.risk_window_days)?,
            analytics_window_days: parse_var(
                "WELLNESS_ANALYTICS_WINDOW_DAYS",
                defaults.analytics_window_days,
            )?,
            recent_limit: parse_var("WELLNESS_RECENT_LIMIT", defaults.recent_limit)?,
            log_format: match env::var("WELLNESS_LOG_FORMAT") {
                Ok(raw) => raw.parse()?,
                Err(_) => defaults.log_format,
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.max_connections == 0 {
            return Err(AppError::Config(
                "WELLNESS_DB_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("WELLNESS_RISK_WINDOW_DAYS", self.risk_window_days),
            ("WELLNESS_ANALYTICS_WINDOW_DAYS", self.analytics_window_days),
            ("WELLNESS_RECENT_LIMIT", self.recent_limit),
        ] {
            if value < 0 {
                return Err(AppError::Config(format!("{} must be >= 0, got {}", name, value)));
            }
        }
        Ok(())
    }

    /// Path of the database file for file-backed SQLite URLs, `None` for in-memory ones.
    pub fn database_file(&self) -> Option<PathBuf> {
        let path = self
            .database_url
            .strip_prefix("sqlite://")
            .or_else(|| self.database_url.strip_prefix("sqlite:"))?;
        let path = path.split('?').next().unwrap_or(path);
        if path.is_empty() || path == ":memory:" {
            None
        } else {
            Some(PathBuf::from(path))
        }
    }

    /// Creates the directory holding the database file if it does not exist yet.
    pub fn ensure_data_dir(&self) -> Result<(), AppError> {
        if let Some(parent) = self.database_file().as_ref().and_then(|p| p.parent()) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                info!("Creating data directory: {:?}", parent);
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} has an invalid value: '{}'", name, raw))),
        Err(_) => Ok(default),
    }
}
