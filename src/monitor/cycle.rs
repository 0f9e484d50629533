//! One fetch cycle over every configured tool

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::config::ToolConfig;
use crate::monitor::resolver::resolve_tool;
use crate::monitor::types::{Batch, SENTINEL_VERSION, ToolResult, VersionStatus};
use crate::version::fetcher::VersionFetcher;

/// Resolve all tools concurrently and return the completed batch
///
/// Spawns one task per tool with no concurrency limit and waits for every
/// task before returning. Results are appended under a single lock, so the
/// batch holds exactly one entry per tool in completion order.
pub async fn run_cycle(fetcher: Arc<dyn VersionFetcher>, tools: &[ToolConfig]) -> Batch {
    info!("Fetching tool data for {} tools...", tools.len());

    let results = Arc::new(Mutex::new(Vec::with_capacity(tools.len())));
    let mut tasks = JoinSet::new();
    let mut pending = HashMap::with_capacity(tools.len());

    for tool in tools {
        let fetcher = fetcher.clone();
        let results = results.clone();
        let owned = tool.clone();
        let handle = tasks.spawn(async move {
            let result = resolve_tool(&*fetcher, &owned).await;
            results.lock().await.push(result);
        });
        pending.insert(handle.id(), tool);
    }

    while let Some(joined) = tasks.join_next().await {
        // resolve_tool absorbs fetch errors, so only a panicking fetcher lands here
        let Err(e) = joined else {
            continue;
        };
        let Some(tool) = pending.get(&e.id()) else {
            error!("Tool resolution task failed: {}", e);
            continue;
        };
        error!(tool = %tool.name, error = %e, "Tool resolution task failed");
        results.lock().await.push(unresolved(tool));
    }

    let tools = std::mem::take(&mut *results.lock().await);
    info!("All tool data fetched ({} results).", tools.len());

    Batch::new(tools, Utc::now())
}

/// Result for a tool whose resolution task died before producing one
fn unresolved(tool: &ToolConfig) -> ToolResult {
    ToolResult {
        name: tool.name.clone(),
        latest_version: SENTINEL_VERSION.to_string(),
        remote_version: SENTINEL_VERSION.to_string(),
        up_to_date: true,
        status: VersionStatus::Unknown,
        comment: tool.comment.clone(),
    }
}
