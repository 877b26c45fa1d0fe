use jobwatch_core::{
    JobsByCompany, QueryData, QueryKey, Stats, TopJobsResult, DEFAULT_LOG_LINES,
};
use jobwatch_logging::{jw_debug, jw_warn};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{ClientSettings, NetworkError};

/// Produces the payload behind a query identity.
#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self, key: QueryKey) -> Result<QueryData, NetworkError>;
}

/// One-shot wrappers around the backend's read endpoints. No retries and
/// no caching happen here.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    client: reqwest::Client,
    scrape_before_stats: bool,
}

impl ApiClient {
    pub fn new(settings: ClientSettings) -> Result<Self, NetworkError> {
        let base = Url::parse(&settings.base_url)
            .map_err(|err| NetworkError::new(format!("invalid api url {}: {err}", settings.base_url)))?;
        if base.cannot_be_a_base() {
            return Err(NetworkError::new(format!(
                "invalid api url {}: cannot hold a path",
                settings.base_url
            )));
        }

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()?;

        Ok(Self {
            base,
            client,
            scrape_before_stats: settings.scrape_before_stats,
        })
    }

    /// `GET /jobs`: every company's listings.
    pub async fn fetch_jobs(&self) -> Result<JobsByCompany, NetworkError> {
        self.get_json("jobs").await
    }

    /// `GET /logs?lines=N`, newline-delimited, oldest first. `None` asks
    /// for 500 lines.
    pub async fn fetch_logs(&self, max_lines: Option<u32>) -> Result<String, NetworkError> {
        let lines = max_lines.unwrap_or(DEFAULT_LOG_LINES);
        let mut url = self.endpoint("logs");
        url.query_pairs_mut()
            .append_pair("lines", &lines.to_string());
        self.get_text(url).await
    }

    /// `GET /stats`.
    pub async fn fetch_stats(&self) -> Result<Stats, NetworkError> {
        self.get_json("stats").await
    }

    /// `GET /top_jobs`.
    pub async fn fetch_top_jobs(&self) -> Result<TopJobsResult, NetworkError> {
        self.get_json("top_jobs").await
    }

    fn endpoint(&self, name: &str) -> Url {
        let mut url = self.base.clone();
        // `new` rejects cannot-be-a-base urls, so this always succeeds.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(name);
        }
        url
    }

    async fn get_text(&self, url: Url) -> Result<String, NetworkError> {
        jw_debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::http_status(status));
        }
        Ok(response.text().await?)
    }

    /// Fetches `name` and validates the body against `T`.
    async fn get_json<T: DeserializeOwned>(&self, name: &str) -> Result<T, NetworkError> {
        let body = self.get_text(self.endpoint(name)).await?;
        serde_json::from_str(&body)
            .map_err(|err| NetworkError::new(format!("invalid /{name} payload: {err}")))
    }
}

#[async_trait::async_trait]
impl DataSource for ApiClient {
    async fn fetch(&self, key: QueryKey) -> Result<QueryData, NetworkError> {
        match key {
            QueryKey::Jobs => self.fetch_jobs().await.map(QueryData::Jobs),
            QueryKey::Logs { lines } => self.fetch_logs(Some(lines)).await.map(QueryData::Logs),
            QueryKey::Stats => {
                if self.scrape_before_stats {
                    // The backend scrapes on /jobs; stats are still worth
                    // showing when that fails.
                    if let Err(err) = self.fetch_jobs().await {
                        jw_warn!("Scrape trigger before stats failed: {}", err);
                    }
                }
                self.fetch_stats().await.map(QueryData::Stats)
            }
            QueryKey::TopJobs => self.fetch_top_jobs().await.map(QueryData::TopJobs),
        }
    }
}
