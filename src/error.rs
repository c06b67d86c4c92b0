//! Error Types

use thiserror::Error;

/// Filter validation failures; shown as a hint, never blocking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("End date must be at or after start date.")]
    EndBeforeStart,
}

/// Failures while loading records
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("cannot resolve page origin")]
    Location,
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid records payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client-side storage failures; logged, never surfaced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage rejected write of {0}")]
    Write(String),
}
