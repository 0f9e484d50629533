//! Process lifecycle: scheduler and status board sharing one snapshot

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::config::Config;
use crate::monitor::scheduler::Scheduler;
use crate::monitor::snapshot::Snapshot;
use crate::version::http::HttpVersionFetcher;
use crate::web;

pub struct ServerOptions {
    pub config_path: PathBuf,
    pub listen: String,
}

/// Load the config, start the scheduler and serve the board until Ctrl-C
pub async fn run_server(options: ServerOptions) -> anyhow::Result<()> {
    let config = Config::load(&options.config_path)?;
    info!(
        "Loaded {} tools from {:?}",
        config.tools.len(),
        options.config_path
    );

    let snapshot = Snapshot::new();
    let shutdown = CancellationToken::new();

    let scheduler = Scheduler::new(
        &config,
        Arc::new(HttpVersionFetcher::default()),
        snapshot.clone(),
    )
    .start(shutdown.clone());

    let listener = TcpListener::bind(&options.listen)
        .await
        .with_context(|| format!("Failed to bind {}", options.listen))?;

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(e) => error!("Failed to listen for shutdown signal: {}", e),
        }
        signal_token.cancel();
    });

    let served = web::serve(listener, snapshot, shutdown.clone()).await;

    shutdown.cancel();
    if let Err(e) = scheduler.await {
        error!("Scheduler task failed: {}", e);
    }

    served.context("Status board server failed")
}
