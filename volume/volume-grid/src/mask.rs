//! Boolean occupancy masks and validity filtering.

use tracing::debug;

use crate::error::{VolumeError, VolumeResult};
use crate::volume::LabelVolume;

/// A boolean occupancy grid derived from a [`LabelVolume`] for one structure.
///
/// Ephemeral: built fresh per structure, handed to the isosurface extractor,
/// and dropped. Same dimensions and layout as the source volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyMask {
    dims: [usize; 3],
    data: Vec<bool>,
}

impl OccupancyMask {
    /// Build a mask from raw bits.
    ///
    /// Callers are expected to pass data of length `dims` product; this is an
    /// internal constructor used by [`LabelVolume`] mask builders.
    #[must_use]
    pub(crate) fn from_bits(dims: [usize; 3], data: Vec<bool>) -> Self {
        debug_assert_eq!(data.len(), dims[0] * dims[1] * dims[2]);
        Self { dims, data }
    }

    /// Grid dimensions `[nx, ny, nz]`.
    #[must_use]
    pub const fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Number of occupied voxels.
    #[must_use]
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }

    /// Returns `true` if no voxel is occupied.
    ///
    /// An empty mask is not an error; it tells the caller to skip the
    /// structure.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.data.iter().any(|&b| b)
    }

    /// Occupancy at voxel `(x, y, z)`. Out-of-bounds reads as unoccupied.
    #[must_use]
    pub fn get(&self, x: usize, y: usize, z: usize) -> bool {
        if x < self.dims[0] && y < self.dims[1] && z < self.dims[2] {
            self.data[(x * self.dims[1] + y) * self.dims[2] + z]
        } else {
            false
        }
    }

    /// The mask as a 0.0/1.0 scalar field for isosurface extraction.
    #[must_use]
    pub fn to_scalar_field(&self) -> Vec<f32> {
        self.data
            .iter()
            .map(|&b| if b { 1.0 } else { 0.0 })
            .collect()
    }
}

/// Intersect a structure mask with a validity volume's positivity.
///
/// Certain structures (white-matter hypointensities in particular) produce
/// spurious voxels far outside brain tissue. For those the conversion keeps
/// only target voxels that are also positive in a companion volume such as
/// the brain mask.
///
/// # Errors
///
/// - [`VolumeError::MissingValidity`] if `validity` is `None` - the caller
///   must not fall back to the unfiltered mask.
/// - [`VolumeError::DimensionMismatch`] if the validity grid has different
///   dimensions from `mask`.
pub fn apply_validity(
    mask: &OccupancyMask,
    validity: Option<&LabelVolume>,
) -> VolumeResult<OccupancyMask> {
    let validity = validity.ok_or(VolumeError::MissingValidity)?;
    if validity.dims() != mask.dims() {
        return Err(VolumeError::DimensionMismatch {
            expected: mask.dims(),
            got: validity.dims(),
        });
    }
    let positivity = validity.positivity_mask();
    let data = mask
        .data
        .iter()
        .zip(&positivity.data)
        .map(|(&m, &v)| m && v)
        .collect();
    let filtered = OccupancyMask::from_bits(mask.dims, data);
    debug!(
        before = mask.count(),
        after = filtered.count(),
        "applied validity volume"
    );
    Ok(filtered)
}
