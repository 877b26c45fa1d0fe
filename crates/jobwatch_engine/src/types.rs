use std::time::Duration;

use jobwatch_core::{QueryData, QueryKey};

/// Used when neither the runtime nor the build environment names a backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Call `/jobs` (which makes the backend scrape) before reading `/stats`.
    pub scrape_before_stats: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            scrape_before_stats: true,
        }
    }
}

/// The only error the data-access layer reports. Status codes, transport
/// failures and malformed payloads all end up here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct NetworkError {
    /// HTTP status when the server answered with a non-success code.
    pub status: Option<u16>,
    pub message: String,
}

impl NetworkError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub(crate) fn http_status(status: reqwest::StatusCode) -> Self {
        Self {
            status: Some(status.as_u16()),
            message: format!("network response was not ok ({status})"),
        }
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::new(format!("request timed out: {err}"));
        }
        Self::new(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    QueryCompleted {
        key: QueryKey,
        seq: u64,
        result: Result<QueryData, NetworkError>,
    },
}
