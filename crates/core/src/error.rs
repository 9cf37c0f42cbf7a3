//! Error types.

use thiserror::Error;

/// Errors produced while validating input or running an optimization.
#[derive(Debug, Error)]
pub enum Error {
    /// A part has non-positive or non-finite dimensions, a bad count, or a duplicate id.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The stock sheet template is unusable.
    #[error("invalid boundary: {0}")]
    InvalidBoundary(String),

    /// The request contained no parts.
    #[error("part list must not be empty")]
    EmptyDemand,

    /// Caller-supplied input outside the geometry model (labels, ids, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Stored or supplied data could not be parsed.
    #[error("parse error: {0}")]
    ParseError(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Internal invariant violated.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
