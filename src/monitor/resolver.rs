//! Resolution of a single tool's latest and deployed versions

use tracing::{error, info};

use crate::config::ToolConfig;
use crate::monitor::types::{SENTINEL_VERSION, ToolResult, VersionStatus};
use crate::version::fetcher::VersionFetcher;

/// Resolve one tool into a [`ToolResult`]
///
/// Never fails: a fetch error is logged and replaced by [`SENTINEL_VERSION`].
/// When the tool has a fixed `current_version` the deployed version is not fetched.
pub async fn resolve_tool(fetcher: &dyn VersionFetcher, tool: &ToolConfig) -> ToolResult {
    let latest = fetcher
        .fetch_version(&tool.latest_version_endpoint, &tool.latest_version_key)
        .await
        .inspect_err(|e| error!(tool = %tool.name, error = %e, "Error fetching latest version"))
        .ok();

    let remote = match &tool.current_version {
        Some(version) => Some(version.clone()),
        None => fetcher
            .fetch_version(&tool.my_version_endpoint, &tool.my_version_key)
            .await
            .inspect_err(|e| error!(tool = %tool.name, error = %e, "Error fetching remote version"))
            .ok(),
    };

    let status = match (&latest, &remote) {
        (Some(l), Some(r)) if l == r => VersionStatus::UpToDate,
        (Some(_), Some(_)) => VersionStatus::Outdated,
        _ => VersionStatus::Unknown,
    };

    let latest_version = latest.unwrap_or_else(|| SENTINEL_VERSION.to_string());
    let remote_version = remote.unwrap_or_else(|| SENTINEL_VERSION.to_string());
    let up_to_date = latest_version == remote_version;

    info!(tool = %tool.name, "Processed data for tool");

    ToolResult {
        name: tool.name.clone(),
        latest_version,
        remote_version,
        up_to_date,
        status,
        comment: tool.comment.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::error::FetchError;
    use crate::version::fetcher::MockVersionFetcher;
    use rstest::rstest;

    const LATEST_URL: &str = "https://example.com/latest";
    const MINE_URL: &str = "https://tool.internal/status";

    fn make_tool(current_version: Option<&str>) -> ToolConfig {
        ToolConfig {
            name: "X".to_string(),
            latest_version_endpoint: LATEST_URL.to_string(),
            latest_version_key: "v".to_string(),
            current_version: current_version.map(|s| s.to_string()),
            my_version_endpoint: MINE_URL.to_string(),
            my_version_key: "version".to_string(),
            comment: "managed by ops".to_string(),
        }
    }

    fn failure() -> FetchError {
        FetchError::InvalidResponse("Unexpected status: 503".to_string())
    }

    #[tokio::test]
    async fn resolve_tool_with_fixed_current_version_matching_latest_is_up_to_date() {
        let mut fetcher = MockVersionFetcher::new();
        fetcher
            .expect_fetch_version()
            .withf(|endpoint, key| endpoint == LATEST_URL && key == "v")
            .times(1)
            .returning(|_, _| Ok("1.2".to_string()));

        let result = resolve_tool(&fetcher, &make_tool(Some("1.2"))).await;

        assert_eq!(
            result,
            ToolResult {
                name: "X".to_string(),
                latest_version: "1.2".to_string(),
                remote_version: "1.2".to_string(),
                up_to_date: true,
                status: VersionStatus::UpToDate,
                comment: "managed by ops".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn resolve_tool_uses_sentinel_when_latest_endpoint_unreachable() {
        let mut fetcher = MockVersionFetcher::new();
        fetcher
            .expect_fetch_version()
            .times(1)
            .returning(|_, _| Err(failure()));

        let result = resolve_tool(&fetcher, &make_tool(Some("1.2"))).await;

        assert_eq!(result.latest_version, SENTINEL_VERSION);
        assert_eq!(result.remote_version, "1.2");
        assert!(!result.up_to_date);
        assert_eq!(result.status, VersionStatus::Unknown);
    }

    #[tokio::test]
    async fn resolve_tool_fetches_remote_version_when_current_version_absent() {
        let mut fetcher = MockVersionFetcher::new();
        fetcher
            .expect_fetch_version()
            .withf(|endpoint, _| endpoint == LATEST_URL)
            .times(1)
            .returning(|_, _| Ok("2.0.0".to_string()));
        fetcher
            .expect_fetch_version()
            .withf(|endpoint, key| endpoint == MINE_URL && key == "version")
            .times(1)
            .returning(|_, _| Ok("1.9.3".to_string()));

        let result = resolve_tool(&fetcher, &make_tool(None)).await;

        assert_eq!(result.latest_version, "2.0.0");
        assert_eq!(result.remote_version, "1.9.3");
        assert!(!result.up_to_date);
        assert_eq!(result.status, VersionStatus::Outdated);
    }

    #[tokio::test]
    async fn resolve_tool_uses_sentinel_when_remote_fetch_fails() {
        let mut fetcher = MockVersionFetcher::new();
        fetcher
            .expect_fetch_version()
            .withf(|endpoint, _| endpoint == LATEST_URL)
            .returning(|_, _| Ok("2.0.0".to_string()));
        fetcher
            .expect_fetch_version()
            .withf(|endpoint, _| endpoint == MINE_URL)
            .returning(|_, _| Err(failure()));

        let result = resolve_tool(&fetcher, &make_tool(None)).await;

        assert_eq!(result.latest_version, "2.0.0");
        assert_eq!(result.remote_version, SENTINEL_VERSION);
        assert!(!result.up_to_date);
        assert_eq!(result.status, VersionStatus::Unknown);
    }

    // Two failed fetches compare equal as strings, so `up_to_date` reports a
    // false positive. `status` is the field that exposes the failure.
    #[tokio::test]
    async fn resolve_tool_reports_double_failure_as_up_to_date_but_unknown_status() {
        let mut fetcher = MockVersionFetcher::new();
        fetcher
            .expect_fetch_version()
            .times(2)
            .returning(|_, _| Err(failure()));

        let result = resolve_tool(&fetcher, &make_tool(None)).await;

        assert_eq!(result.latest_version, SENTINEL_VERSION);
        assert_eq!(result.remote_version, SENTINEL_VERSION);
        assert!(result.up_to_date);
        assert_eq!(result.status, VersionStatus::Unknown);
    }

    #[rstest]
    #[case("1.2.0", "1.2.0", true, VersionStatus::UpToDate)]
    #[case("v1.2.0", "1.2.0", false, VersionStatus::Outdated)]
    #[case("1.2", "1.2.0", false, VersionStatus::Outdated)]
    #[case("1.3.0", "1.2.0", false, VersionStatus::Outdated)]
    #[tokio::test]
    async fn resolve_tool_compares_versions_by_exact_string_equality(
        #[case] latest: &'static str,
        #[case] current: &'static str,
        #[case] up_to_date: bool,
        #[case] status: VersionStatus,
    ) {
        let mut fetcher = MockVersionFetcher::new();
        fetcher
            .expect_fetch_version()
            .returning(move |_, _| Ok(latest.to_string()));

        let result = resolve_tool(&fetcher, &make_tool(Some(current))).await;

        assert_eq!(result.up_to_date, up_to_date);
        assert_eq!(result.status, status);
    }
}
