use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Value at key {0} is not a version string")]
    NotAString(String),
}
