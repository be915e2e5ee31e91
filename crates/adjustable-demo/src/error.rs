//! Demo errors.

use adjustable_core::AdjustError;
use thiserror::Error;

/// Errors raised while loading or replaying a scene.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scene parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Adjuster error: {0}")]
    Adjust(#[from] AdjustError),
    #[error("Widget not found: {0}")]
    UnknownWidget(String),
    #[error("Duplicate widget name: {0}")]
    DuplicateWidget(String),
}

/// Result type for demo operations.
pub type DemoResult<T> = Result<T, DemoError>;
