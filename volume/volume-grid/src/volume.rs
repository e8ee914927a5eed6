//! Dense labeled volume.

use nalgebra::{Matrix4, Point3};

use crate::error::{VolumeError, VolumeResult};
use crate::mask::OccupancyMask;

/// A dense 3D grid of integer labels with a voxel-to-physical affine.
///
/// This is the read-only input of a conversion run: typically a subcortical
/// segmentation where each voxel carries the label of the anatomical
/// structure it belongs to. Data is C-contiguous, indexed
/// `(x * ny + y) * nz + z`.
#[derive(Debug, Clone)]
pub struct LabelVolume {
    dims: [usize; 3],
    affine: Matrix4<f64>,
    data: Vec<i32>,
}

impl LabelVolume {
    /// Create a volume from dimensions, affine, and voxel data.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::DataSizeMismatch`] if `data.len()` is not the
    /// product of `dims`.
    pub fn new(dims: [usize; 3], affine: Matrix4<f64>, data: Vec<i32>) -> VolumeResult<Self> {
        let expected = dims[0] * dims[1] * dims[2];
        if data.len() != expected {
            return Err(VolumeError::DataSizeMismatch {
                dims,
                expected,
                got: data.len(),
            });
        }
        Ok(Self { dims, affine, data })
    }

    /// Create a volume whose voxel coordinates are already physical
    /// coordinates (identity affine).
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::DataSizeMismatch`] if `data.len()` is not the
    /// product of `dims`.
    pub fn with_identity_affine(dims: [usize; 3], data: Vec<i32>) -> VolumeResult<Self> {
        Self::new(dims, Matrix4::identity(), data)
    }

    /// Grid dimensions `[nx, ny, nz]`.
    #[must_use]
    pub const fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// The voxel-to-physical affine transform.
    #[must_use]
    pub const fn affine(&self) -> &Matrix4<f64> {
        &self.affine
    }

    /// Total number of voxels.
    #[must_use]
    pub fn voxel_count(&self) -> usize {
        self.data.len()
    }

    /// Label at voxel `(x, y, z)`, or `None` if out of bounds.
    #[must_use]
    pub fn label_at(&self, x: usize, y: usize, z: usize) -> Option<i32> {
        if x < self.dims[0] && y < self.dims[1] && z < self.dims[2] {
            Some(self.data[self.index(x, y, z)])
        } else {
            None
        }
    }

    /// Map a voxel-space point to physical coordinates through the affine.
    #[must_use]
    pub fn voxel_to_physical(&self, p: &Point3<f64>) -> Point3<f64> {
        self.affine.transform_point(p)
    }

    /// Occupancy mask of voxels whose label equals `label`.
    ///
    /// An all-false mask is a normal result meaning the structure is absent
    /// from this volume.
    #[must_use]
    pub fn mask_for_label(&self, label: i32) -> OccupancyMask {
        OccupancyMask::from_bits(self.dims, self.data.iter().map(|&v| v == label).collect())
    }

    /// Occupancy mask of voxels whose label is any of `labels`.
    ///
    /// Used for aggregate structures that span several label values.
    #[must_use]
    pub fn mask_for_labels(&self, labels: &[i32]) -> OccupancyMask {
        OccupancyMask::from_bits(
            self.dims,
            self.data.iter().map(|&v| labels.contains(&v)).collect(),
        )
    }

    /// Occupancy mask of voxels with any positive value.
    ///
    /// This is the "validity" reading of a volume such as a brain mask:
    /// everything inside the valid region is positive, everything outside is
    /// zero.
    #[must_use]
    pub fn positivity_mask(&self) -> OccupancyMask {
        OccupancyMask::from_bits(self.dims, self.data.iter().map(|&v| v > 0).collect())
    }

    #[inline]
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (x * self.dims[1] + y) * self.dims[2] + z
    }
}
