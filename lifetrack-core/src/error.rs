//! Error types for lifetrack.

use thiserror::Error;

/// Errors that can occur in lifetrack operations.
#[derive(Error, Debug)]
pub enum LifeTrackError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for lifetrack operations.
pub type LifeTrackResult<T> = Result<T, LifeTrackError>;
