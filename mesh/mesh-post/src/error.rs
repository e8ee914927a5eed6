//! Error types for mesh postprocessing.

use thiserror::Error;

/// Result type for postprocessing operations.
pub type PostprocessResult<T> = Result<T, PostprocessError>;

/// Errors that can occur during postprocessing.
#[derive(Debug, Error)]
pub enum PostprocessError {
    /// The decimation ratio was outside the usable range.
    ///
    /// A configuration error, reported before any geometry is touched.
    #[error("decimation ratio must be within (0, 1], got {0}")]
    InvalidRatio(f64),

    /// Edge collapse destroyed the mesh instead of simplifying it.
    ///
    /// The caller is expected to keep the undecimated mesh when this happens.
    #[error("decimation left a degenerate mesh ({remaining} triangles)")]
    Degenerate {
        /// Triangles still alive when decimation gave up.
        remaining: usize,
    },
}
