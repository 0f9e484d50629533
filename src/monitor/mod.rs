//! Periodic fetch-and-aggregate engine
//!
//! ```text
//! Scheduler ──tick──▶ run_cycle ──spawn per tool──▶ resolve_tool ──▶ VersionFetcher
//!     │                   │
//!     │◀──── Batch ───────┘
//!     ▼
//! Snapshot ◀── read by the web layer
//! ```
//!
//! # Modules
//!
//! - [`types`]: `ToolResult`, `Batch` and the tri-state `VersionStatus`
//! - [`resolver`]: Resolves one tool, absorbing fetch errors into a sentinel
//! - [`cycle`]: Concurrent fan-out over all tools joined into one batch
//! - [`snapshot`]: Published batch shared with readers
//! - [`scheduler`]: Immediate first cycle, then one cycle per interval

pub mod cycle;
pub mod resolver;
pub mod scheduler;
pub mod snapshot;
pub mod types;

pub use cycle::run_cycle;
pub use resolver::resolve_tool;
pub use scheduler::Scheduler;
pub use snapshot::Snapshot;
pub use types::{Batch, SENTINEL_VERSION, ToolResult, VersionStatus};
