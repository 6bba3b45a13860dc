//! Error types for the calendar renderer

use thiserror::Error;

/// Result type alias for render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering a calendar
///
/// Only conditions that leave no sensible image to return are errors.
/// Malformed colors, unknown employee references and missing fonts are
/// recovered inside the engine and never surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested window is empty, inverted, or its dates could not be parsed
    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    /// Failed to build or rasterize the drawing surface
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Failed to encode the finished bitmap
    #[error("Image encoding failed: {0}")]
    EncodeError(String),

    /// An async render did not finish before its deadline
    #[error("Operation timed out after {0}ms")]
    Timeout(u64),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Other(format!("Render task failed: {}", err))
    }
}
