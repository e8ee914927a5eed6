//! Error types for surface parcellation.

use thiserror::Error;

/// Result type for parcellation operations.
pub type ParcelResult<T> = Result<T, ParcelError>;

/// Errors that can occur while splitting a surface into regions.
#[derive(Debug, Error)]
pub enum ParcelError {
    /// The annotation does not describe the mesh it was paired with.
    #[error("annotation labels {labels} vertices but the mesh has {vertices}")]
    LabelCountMismatch {
        /// Vertices in the mesh being split.
        vertices: usize,
        /// Entries in the per-vertex label array.
        labels: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_both_counts() {
        let err = ParcelError::LabelCountMismatch {
            vertices: 10,
            labels: 7,
        };
        let msg = format!("{err}");
        assert!(msg.contains("10"));
        assert!(msg.contains('7'));
    }
}
