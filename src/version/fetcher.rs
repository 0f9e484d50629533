//! Fetcher trait for retrieving a version string from an endpoint

#[cfg(test)]
use mockall::automock;

use crate::version::error::FetchError;

/// Trait for fetching a version from a JSON endpoint
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionFetcher: Send + Sync {
    /// Fetches the version found under `key` in the JSON returned by `endpoint`
    ///
    /// # Arguments
    /// * `endpoint` - URL returning a JSON document
    /// * `key` - Dot-separated path to the version (e.g., "tag_name" or "data.version")
    ///
    /// # Returns
    /// * `Ok(String)` - The version exactly as reported by the endpoint
    /// * `Err(FetchError)` - If the request, parse or lookup fails
    async fn fetch_version(&self, endpoint: &str, key: &str) -> Result<String, FetchError>;
}
