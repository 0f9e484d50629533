use chrono::{DateTime, Utc};
use serde::Serialize;

/// Placeholder stored instead of a version when a fetch fails
pub const SENTINEL_VERSION: &str = "Error fetching version";

/// Outcome of comparing the latest and the deployed version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VersionStatus {
    /// Both versions were fetched and are identical
    UpToDate,
    /// Both versions were fetched and differ
    Outdated,
    /// At least one version could not be fetched
    Unknown,
}

impl VersionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionStatus::UpToDate => "up-to-date",
            VersionStatus::Outdated => "outdated",
            VersionStatus::Unknown => "unknown",
        }
    }
}

/// Resolved state of one tool for one cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub name: String,
    pub latest_version: String,
    pub remote_version: String,
    /// Exact string equality of `latest_version` and `remote_version`.
    /// Two failed fetches compare equal here; check `status` to tell them apart.
    pub up_to_date: bool,
    pub status: VersionStatus,
    pub comment: String,
}

/// All tool results produced by one cycle
///
/// Entry order follows completion order of the per-tool tasks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub tools: Vec<ToolResult>,
    /// When the cycle finished, `None` before the first cycle completes
    pub fetched_at: Option<DateTime<Utc>>,
}

impl Batch {
    /// State readers observe before the first cycle has been published
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(tools: Vec<ToolResult>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            tools,
            fetched_at: Some(fetched_at),
        }
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
