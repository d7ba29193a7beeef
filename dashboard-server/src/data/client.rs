//! Metrics data API HTTP client.
//!
//! Fetches single-day metric series for a station pair. Requests name the
//! upstream stop ids of both ends; the API answers with a time-ordered
//! JSON array.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::{HeadwayRecord, format_date};

use super::error::DataError;

/// Default base URL for the data API.
const DEFAULT_BASE_URL: &str = "https://dashboard-api.labs.transitmatters.org";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Parameters of a single-day query for a station pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SingleDayParams {
    /// Stop ids at the origin.
    pub from_stops: Vec<String>,
    /// Stop ids at the destination.
    pub to_stops: Vec<String>,
    /// Service date.
    pub date: NaiveDate,
}

impl SingleDayParams {
    /// Query pairs for the request: `from_stop`, `to_stop` and `stop`
    /// (the origin again), one pair per stop id.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let from = self.from_stops.iter().map(|s| ("from_stop", s.as_str()));
        let to = self.to_stops.iter().map(|s| ("to_stop", s.as_str()));
        let stop = self.from_stops.iter().map(|s| ("stop", s.as_str()));
        from.chain(to).chain(stop).collect()
    }
}

/// Configuration for the data client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DataConfig {
    /// Create a config pointing at the default API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Data API client.
///
/// A semaphore bounds concurrent requests so a page full of widgets can't
/// flood the API.
#[derive(Debug, Clone)]
pub struct DataClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl DataClient {
    /// Create a new data client with the given configuration.
    pub fn new(config: DataConfig) -> Result<Self, DataError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// URL of the headways endpoint for a date.
    fn headways_url(&self, date: NaiveDate) -> String {
        format!("{}/api/headways/{}", self.base_url, format_date(date))
    }

    /// Get headways between two stations on one service date.
    pub async fn get_headways(
        &self,
        params: &SingleDayParams,
    ) -> Result<Vec<HeadwayRecord>, DataError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| DataError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = self.headways_url(params.date);
        debug!(%url, from = ?params.from_stops, to = ?params.to_stops, "fetching headways");

        let response = self
            .http
            .get(&url)
            .query(&params.query_pairs())
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DataError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DataError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| DataError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}
