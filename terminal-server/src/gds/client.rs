//! GDS HTTP client.
//!
//! Provides the async `ui_schedules` call used by the aggregator. The
//! API key travels as a query parameter, not a header, matching how the
//! GDS authenticates UI clients.

use chrono::NaiveDate;

use crate::schedule::ScheduleSource;

use super::error::GdsError;
use super::types::{ScheduleTable, parse_ui_schedules};

/// Default base URL for the Kupos GDS API.
const DEFAULT_BASE_URL: &str = "https://gds.kupos.com/gds/api";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the GDS client.
#[derive(Debug, Clone)]
pub struct GdsConfig {
    /// API key, appended to every request as `api_key`
    pub api_key: String,
    /// Base URL for the API (defaults to production GDS)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GdsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Kupos GDS API client.
#[derive(Debug, Clone)]
pub struct GdsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GdsClient {
    /// Create a new GDS client with the given configuration.
    ///
    /// Fails with `NotConfigured` when the API key is empty, so a
    /// missing credential surfaces before any request is made.
    pub fn new(config: GdsConfig) -> Result<Self, GdsError> {
        if config.api_key.is_empty() {
            return Err(GdsError::NotConfigured(
                "KUPOS_API_KEY is not set".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Fetch the schedule table for one origin/destination pair on `date`.
    pub async fn ui_schedules(
        &self,
        origin_id: u32,
        destination_id: u32,
        date: NaiveDate,
    ) -> Result<ScheduleTable, GdsError> {
        let url = format!(
            "{}/ui_schedules/{}/{}/{}.json",
            self.base_url,
            origin_id,
            destination_id,
            date.format("%Y-%m-%d")
        );

        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            return Err(GdsError::Api {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        parse_ui_schedules(&body)
    }
}

impl ScheduleSource for GdsClient {
    async fn ui_schedules(
        &self,
        origin_id: u32,
        destination_id: u32,
        date: NaiveDate,
    ) -> Result<ScheduleTable, GdsError> {
        GdsClient::ui_schedules(self, origin_id, destination_id, date).await
    }
}
