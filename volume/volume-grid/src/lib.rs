//! Labeled voxel volumes and occupancy mask building.
//!
//! This crate holds the volumetric half of the NeuroMesh data model:
//!
//! - [`LabelVolume`] - Dense 3D integer label grid with a voxel-to-physical affine
//! - [`OccupancyMask`] - Boolean grid derived per structure
//! - [`apply_validity`] - Outlier suppression for noise-prone structures
//!
//! # Layout
//!
//! Volumes are C-contiguous with index `(x * ny + y) * nz + z`; the same
//! layout is used by the scalar fields handed to the isosurface extractor.
//!
//! # Example
//!
//! ```
//! use volume_grid::LabelVolume;
//!
//! // A 2x2x2 volume where one voxel carries label 17 (hippocampus)
//! let mut data = vec![0; 8];
//! data[0] = 17;
//! let volume = LabelVolume::with_identity_affine([2, 2, 2], data).unwrap();
//!
//! let mask = volume.mask_for_label(17);
//! assert_eq!(mask.count(), 1);
//! assert!(volume.mask_for_label(99).is_empty());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod mask;
mod volume;

pub use error::{VolumeError, VolumeResult};
pub use mask::{apply_validity, OccupancyMask};
pub use volume::LabelVolume;
