//! Recurring fetch cycles publishing into the snapshot

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::{Config, ToolConfig};
use crate::monitor::cycle::run_cycle;
use crate::monitor::snapshot::Snapshot;
use crate::version::fetcher::VersionFetcher;

/// Drives fetch cycles on a fixed interval
///
/// The first cycle runs as soon as [`Scheduler::run`] starts. Each cycle is
/// awaited inside the loop, so a slow cycle delays the next tick instead of
/// overlapping with it, and missed ticks are not replayed.
pub struct Scheduler {
    tools: Vec<ToolConfig>,
    interval: Duration,
    fetcher: Arc<dyn VersionFetcher>,
    snapshot: Snapshot,
}

impl Scheduler {
    pub fn new(config: &Config, fetcher: Arc<dyn VersionFetcher>, snapshot: Snapshot) -> Self {
        Self {
            tools: config.tools.clone(),
            interval: config.fetch_interval(),
            fetcher,
            snapshot,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run in the background until `shutdown` is cancelled
    pub fn start(self, shutdown: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(self.run(shutdown))
    }

    /// Fetch loop. Returns only once `shutdown` is cancelled; a cycle in
    /// progress at that point is abandoned without publishing.
    pub async fn run(self, shutdown: CancellationToken) {
        info!(
            interval_secs = self.interval.as_secs(),
            tools = self.tools.len(),
            "Starting periodic data fetch..."
        );

        let mut timer = interval(self.interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = timer.tick() => {}
            }

            info!("Fetching tool data...");
            let batch = tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                batch = run_cycle(self.fetcher.clone(), &self.tools) => batch,
            };

            self.snapshot.publish(batch);
            info!("Tool data fetched successfully.");
            info!("Will check again in {:?}...", self.interval);
        }

        info!("Periodic data fetch stopped");
    }
}
