//! Error types for isosurface extraction.

use thiserror::Error;

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Errors that can occur while configuring extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// An extraction mode string did not match any supported algorithm.
    ///
    /// Fatal to the structure being converted, never to the whole run.
    #[error("unknown extraction mode: {0:?} (expected \"standard\" or \"gradient-refined\")")]
    UnknownMode(String),
}
