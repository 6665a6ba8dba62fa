//! Error types for seed fetching

use std::time::Duration;

use thiserror::Error;

/// Result type for seed operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching a seed
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Seed request returned status {0}")]
    Status(u16),

    /// Body was not valid review JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Body was valid JSON but not an array
    #[error("Seed is not a JSON array")]
    NotArray,

    /// Fetch did not finish in time
    #[error("Seed fetch timed out after {0:?}")]
    Timeout(Duration),

    /// Reading a local seed file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed location could not be understood
    #[error("Invalid seed source: {0}")]
    InvalidSource(String),
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidSource(err.to_string())
    }
}
