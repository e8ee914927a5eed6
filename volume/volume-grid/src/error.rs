//! Error types for volume operations.

use thiserror::Error;

/// Result type for volume operations.
pub type VolumeResult<T> = Result<T, VolumeError>;

/// Errors that can occur while building volumes and masks.
#[derive(Debug, Error)]
pub enum VolumeError {
    /// Voxel data length does not match the stated dimensions.
    #[error("data length {got} does not match dimensions {dims:?} ({expected} voxels)")]
    DataSizeMismatch {
        /// Stated grid dimensions.
        dims: [usize; 3],
        /// Expected voxel count (`dims` product).
        expected: usize,
        /// Actual data length.
        got: usize,
    },

    /// A required validity volume was not provided.
    #[error("validity volume required for outlier filtering but not provided")]
    MissingValidity,

    /// Two grids that must align have different dimensions.
    #[error("grid dimensions {got:?} do not match expected {expected:?}")]
    DimensionMismatch {
        /// Dimensions of the reference grid.
        expected: [usize; 3],
        /// Dimensions of the offending grid.
        got: [usize; 3],
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = VolumeError::MissingValidity;
        assert!(format!("{err}").contains("validity volume"));

        let err = VolumeError::DataSizeMismatch {
            dims: [2, 2, 2],
            expected: 8,
            got: 7,
        };
        assert!(format!("{err}").contains('7'));
        assert!(format!("{err}").contains('8'));
    }
}
