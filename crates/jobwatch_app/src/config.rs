//! Runtime configuration read from `JOBWATCH_*` environment variables.

use std::path::PathBuf;
use std::time::Duration;

use jobwatch_core::{CacheSettings, PollIntervals, Route, StateSettings, DEFAULT_LOG_LINES};
use jobwatch_engine::{ClientSettings, DEFAULT_API_URL};
use jobwatch_logging::LogDestination;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must be true or false, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },
    #[error("JOBWATCH_LOG must be file, terminal or both, got {0:?}")]
    InvalidLogDestination(String),
    #[error("JOBWATCH_START_PAGE must be /, /jobs or /logs, got {0:?}")]
    InvalidStartPage(String),
    #[error("no config directory on this platform; set JOBWATCH_STATE_DIR")]
    NoStateDir,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub client: ClientSettings,
    pub state: StateSettings,
    /// Where the local key-value store lives.
    pub state_dir: PathBuf,
    /// Directory holding the `/logos/*.svg` assets; logos are skipped when unset.
    pub logo_dir: Option<PathBuf>,
    pub log_destination: LogDestination,
    /// Page shown at startup.
    pub start_route: Route,
    /// How often the UI sends `Msg::Tick`.
    pub tick_interval: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secs = |name: &'static str, default: Duration| -> Result<Duration, ConfigError> {
            Ok(match lookup(name) {
                Some(raw) => Duration::from_secs(parse_positive(name, &raw)?),
                None => default,
            })
        };

        let base_url = lookup("JOBWATCH_API_URL")
            .or_else(|| option_env!("JOBWATCH_DEFAULT_API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let scrape_before_stats = match lookup("JOBWATCH_SCRAPE_ON_STATS") {
            Some(raw) => parse_flag("JOBWATCH_SCRAPE_ON_STATS", &raw)?,
            None => true,
        };

        let defaults = PollIntervals::default();
        let intervals = PollIntervals {
            jobs: secs("JOBWATCH_POLL_JOBS_SECS", defaults.jobs)?,
            logs: secs("JOBWATCH_POLL_LOGS_SECS", defaults.logs)?,
            stats: secs("JOBWATCH_POLL_STATS_SECS", defaults.stats)?,
            top_jobs: secs("JOBWATCH_POLL_TOP_JOBS_SECS", defaults.top_jobs)?,
        };

        let log_lines = match lookup("JOBWATCH_LOG_LINES") {
            Some(raw) => {
                let lines = parse_positive("JOBWATCH_LOG_LINES", &raw)?;
                u32::try_from(lines).map_err(|_| ConfigError::InvalidNumber {
                    name: "JOBWATCH_LOG_LINES",
                    value: raw,
                })?
            }
            None => DEFAULT_LOG_LINES,
        };

        let state_dir = match lookup("JOBWATCH_STATE_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .map(|dir| dir.join("jobwatch"))
                .ok_or(ConfigError::NoStateDir)?,
        };

        let log_destination = match lookup("JOBWATCH_LOG") {
            Some(raw) => {
                LogDestination::parse(&raw).ok_or(ConfigError::InvalidLogDestination(raw))?
            }
            None => LogDestination::Both,
        };

        let start_route = match lookup("JOBWATCH_START_PAGE") {
            Some(raw) => Route::from_path(&raw).ok_or(ConfigError::InvalidStartPage(raw))?,
            None => Route::Home,
        };

        Ok(Self {
            client: ClientSettings {
                base_url,
                scrape_before_stats,
                ..ClientSettings::default()
            },
            state: StateSettings {
                cache: CacheSettings {
                    intervals,
                    ..CacheSettings::default()
                },
                log_lines,
            },
            state_dir,
            logo_dir: lookup("JOBWATCH_LOGO_DIR").map(PathBuf::from),
            log_destination,
            start_route,
            tick_interval: Duration::from_millis(250),
        })
    }
}

fn parse_positive(name: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidNumber {
            name,
            value: raw.to_string(),
        }),
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}
