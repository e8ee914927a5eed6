//! Error types for OBJ I/O.

use thiserror::Error;

/// Result type for OBJ operations.
pub type ObjResult<T> = Result<T, ObjError>;

/// Errors that can occur while reading or writing OBJ files.
#[derive(Debug, Error)]
pub enum ObjError {
    /// The underlying reader or writer failed.
    #[error("OBJ I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A `v` line did not carry three finite coordinates.
    #[error("malformed vertex on line {line}")]
    InvalidVertex {
        /// 1-based line number in the input.
        line: usize,
    },

    /// An `f` line carried a malformed or zero index (OBJ is 1-indexed).
    #[error("malformed face index on line {line}")]
    InvalidIndex {
        /// 1-based line number in the input.
        line: usize,
    },
}
