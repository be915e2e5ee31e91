//! Configuration errors.
//!
//! Everything here is a programmer error surfaced to the integrating
//! application. Interaction no-ops (a press on a disallowed zone, an empty
//! permission set) and out-of-range geometry are not errors.

use crate::geometry::Size;
use thiserror::Error;

/// Errors raised while configuring or first using an adjuster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdjustError {
    #[error("Invalid button '{0}'")]
    InvalidButton(String),
    #[error("Unknown adjustment mode '{0}'")]
    UnknownMode(String),
    #[error("Unknown adjustment mode set '{0}'")]
    UnknownModeSet(String),
    #[error("At least one adjustment button must be configured")]
    NoButtons,
    #[error("Edge buffer must not be negative, got {0}")]
    InvalidBuffer(i32),
    #[error("Size limits must not be negative, got {0:?}")]
    NegativeSize(Size),
    #[error("Minimum size {min:?} exceeds maximum size {max:?}")]
    InvertedSizeLimits { min: Size, max: Size },
    #[error("Cannot resolve a container rectangle for '{widget}'")]
    ContainerUnresolved { widget: String },
}

/// Result type for adjuster operations.
pub type AdjustResult<T> = Result<T, AdjustError>;
