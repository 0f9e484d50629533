//! HTTP implementation of [`VersionFetcher`]

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::FETCH_TIMEOUT_MS;
use crate::version::error::FetchError;
use crate::version::extract::extract_version;
use crate::version::fetcher::VersionFetcher;

/// Fetches versions from JSON endpoints over HTTP(S)
#[derive(Clone)]
pub struct HttpVersionFetcher {
    client: reqwest::Client,
}

impl HttpVersionFetcher {
    /// Creates a fetcher whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("version-board")
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl Default for HttpVersionFetcher {
    fn default() -> Self {
        Self::new(Duration::from_millis(FETCH_TIMEOUT_MS))
    }
}

#[async_trait::async_trait]
impl VersionFetcher for HttpVersionFetcher {
    async fn fetch_version(&self, endpoint: &str, key: &str) -> Result<String, FetchError> {
        debug!("Fetching {} from {}", key, endpoint);

        let response = self
            .client
            .get(endpoint)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            warn!("Endpoint returned status {}: {}", status, endpoint);
            return Err(FetchError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body = response.text().await?;
        let document: Value = serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse response from {}: {}", endpoint, e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        extract_version(&document, key)
    }
}
