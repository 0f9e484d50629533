//! Fetcher test utilities

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use version_board::config::ToolConfig;
use version_board::version::error::FetchError;
use version_board::version::fetcher::VersionFetcher;

/// In-memory fetcher keyed by endpoint; unknown endpoints fail
pub struct StubFetcher {
    versions: HashMap<String, String>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self {
            versions: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_version(mut self, endpoint: &str, version: &str) -> Self {
        self.versions
            .insert(endpoint.to_string(), version.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VersionFetcher for StubFetcher {
    async fn fetch_version(&self, endpoint: &str, _key: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // Give other resolutions a chance to interleave
        tokio::task::yield_now().await;
        match self.versions.get(endpoint) {
            Some(version) => Ok(version.clone()),
            None => Err(FetchError::InvalidResponse(format!(
                "no stub for {}",
                endpoint
            ))),
        }
    }
}

/// Tool whose latest version is served from `latest_endpoint`
/// and whose deployed version, if not fixed, from `{latest_endpoint}/deployed`
pub fn make_tool(name: &str, latest_endpoint: &str, current_version: Option<&str>) -> ToolConfig {
    ToolConfig {
        name: name.to_string(),
        latest_version_endpoint: latest_endpoint.to_string(),
        latest_version_key: "version".to_string(),
        current_version: current_version.map(|v| v.to_string()),
        my_version_endpoint: format!("{}/deployed", latest_endpoint),
        my_version_key: "version".to_string(),
        comment: String::new(),
    }
}
