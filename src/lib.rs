//! Tool version status board
//!
//! Periodically checks, for every configured tool, whether the deployed
//! version matches the latest published one, and serves the results.
//!
//! # Modules
//!
//! - [`config`]: Config file schema, defaults and data paths
//! - [`version`]: Fetching a version string from a JSON endpoint
//! - [`monitor`]: Scheduler, fetch cycle and the published snapshot
//! - [`web`]: HTML and JSON views of the snapshot
//! - [`server`]: Process wiring of the scheduler and the web server
//! - [`logging`]: Tracing subscriber setup

pub mod config;
pub mod logging;
pub mod monitor;
pub mod server;
pub mod version;
pub mod web;
