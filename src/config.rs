use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

// =============================================================================
// Time-related constants
// =============================================================================

/// Default fetch interval in minutes, used when the config does not override it
pub const DEFAULT_FETCH_INTERVAL_MINUTES: u64 = 10;

/// Timeout for a single version fetch in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

// =============================================================================
// Process defaults
// =============================================================================

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Address the status board listens on when `--listen` is not given
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Minutes between fetch cycles. Zero or negative falls back to the default.
    #[serde(alias = "fetchIntervalMinutes")]
    pub fetch_interval: Option<i64>,
    pub tools: Vec<ToolConfig>,
}

/// A single tracked tool
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    pub name: String,
    pub latest_version_endpoint: String,
    #[serde(alias = "latestVersionJsonKey")]
    pub latest_version_key: String,
    /// Fixed deployed version. When set, the remote version is never fetched.
    #[serde(default)]
    pub current_version: Option<String>,
    #[serde(default)]
    pub my_version_endpoint: String,
    #[serde(default, alias = "myVersionJsonKey")]
    pub my_version_key: String,
    #[serde(default)]
    pub comment: String,
}

impl Config {
    /// Read and parse a config file, then validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// Checks invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self.tools.iter().position(|t| t.name.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "tool at index {} has an empty name",
                index
            )));
        }
        Ok(())
    }

    /// Interval between fetch cycles
    pub fn fetch_interval(&self) -> Duration {
        let minutes = match self.fetch_interval {
            Some(minutes) if minutes > 0 => minutes as u64,
            _ => DEFAULT_FETCH_INTERVAL_MINUTES,
        };
        Duration::from_secs(minutes.saturating_mul(60))
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Config = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

/// Returns the path to the data directory for version-board.
/// Uses $XDG_DATA_HOME/version-board if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/version-board,
/// or ./version-board if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the default path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("version-board.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("version-board")
}
