//! Application configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::str::FromStr;
use std::time::Duration;

use crate::error::LeagueError;

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(LeagueError::InvalidConfig(format!(
                "LOG_FORMAT must be \"pretty\" or \"json\", got {other:?}"
            ))),
        }
    }
}

/// Top-level configuration.
///
/// Loaded once at startup via [`LeagueConfig::from_env`].
#[derive(Debug, Clone)]
pub struct LeagueConfig {
    /// SQLite connection string, e.g. `sqlite://league.db`.
    pub database_url: String,

    /// Pause between ticks in watch mode.
    pub watch_interval: Duration,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            watch_interval: Duration::from_secs(DEFAULT_WATCH_INTERVAL_SECS),
            log_format: LogFormat::Pretty,
        }
    }
}

const DEFAULT_DATABASE_URL: &str = "sqlite://league.db";
const DEFAULT_WATCH_INTERVAL_SECS: u64 = 5;

impl LeagueConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set. Calls
    /// `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::InvalidConfig`] if `LOG_FORMAT` is set to an
    /// unknown value or `WATCH_INTERVAL_SECS` is zero.
    pub fn from_env() -> Result<Self, LeagueError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`LeagueConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LeagueError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let watch_interval_secs = parse_or(
            lookup("WATCH_INTERVAL_SECS"),
            DEFAULT_WATCH_INTERVAL_SECS,
        );
        if watch_interval_secs == 0 {
            return Err(LeagueError::InvalidConfig(
                "WATCH_INTERVAL_SECS must be at least 1".to_string(),
            ));
        }

        let log_format = match lookup("LOG_FORMAT") {
            Some(v) => v.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            database_url,
            watch_interval: Duration::from_secs(watch_interval_secs),
            log_format,
        })
    }
}

/// Parses `value` as `T`, returning `default` on missing or invalid input.
fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}
