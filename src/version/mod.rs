//! Version fetching layer
//!
//! Retrieves a single version string from a JSON endpoint.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Fetcher   │────▶│    HTTP     │────▶│   Extract   │
//! │   (trait)   │     │  (reqwest)  │     │ (JSON path) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`fetcher`]: `VersionFetcher` trait consumed by the monitor
//! - [`http`]: reqwest-backed implementation
//! - [`extract`]: dot-path lookup of a version inside a JSON document
//! - [`error`]: Error types for fetch operations

pub mod error;
pub mod extract;
pub mod fetcher;
pub mod http;
