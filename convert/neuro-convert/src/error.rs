//! Error types for the conversion pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors raised while converting volumes and surfaces.
///
/// Per-structure failures are captured in item outcomes and never abort a
/// batch; only errors that make the whole input or output unusable (a bad
/// annotation, an uncreatable output directory) propagate out of batch
/// entry points.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Mask construction failed, e.g. a missing validity volume.
    #[error(transparent)]
    Volume(#[from] volume_grid::VolumeError),

    /// Extraction was misconfigured.
    #[error(transparent)]
    Extract(#[from] mesh_extract::ExtractError),

    /// Postprocessing was misconfigured.
    #[error(transparent)]
    Postprocess(#[from] mesh_post::PostprocessError),

    /// The annotation did not match the surface being parcellated.
    #[error(transparent)]
    Parcel(#[from] mesh_parcel::ParcelError),

    /// An output mesh could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Destination that rejected the write.
        path: PathBuf,
        /// Underlying serialization failure.
        source: mesh_obj::ObjError,
    },

    /// Output directory bookkeeping failed.
    #[error("output directory error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_error_names_the_path() {
        let err = ConvertError::Write {
            path: PathBuf::from("/out/Left-Thalamus.obj"),
            source: mesh_obj::ObjError::InvalidVertex { line: 1 },
        };
        assert!(format!("{err}").contains("Left-Thalamus.obj"));
    }
}
