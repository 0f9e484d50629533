//! Tracing subscriber setup

use std::path::Path;

use anyhow::{Context, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Filter applied when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global subscriber
///
/// Logs go to `log_file` through a non-blocking appender when given, otherwise
/// to stderr. The returned guard must be kept alive until exit so buffered
/// lines are flushed.
pub fn init(log_file: Option<&Path>, json: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let (writer, guard) = match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("Log path {:?} has no file name", path))?;
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {:?}", dir))?;

            let (non_blocking, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(log_file.is_none());

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(guard)
}
