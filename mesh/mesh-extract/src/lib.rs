//! Isosurface extraction from occupancy masks.
//!
//! Converts a boolean occupancy grid into a triangle mesh at the 0.5
//! iso-level, in one of two modes:
//!
//! - [`ExtractionMode::Standard`] - marching cubes with sub-voxel edge
//!   interpolation
//! - [`ExtractionMode::GradientRefined`] - marching cubes followed by a
//!   gradient-driven vertex displacement pass, trading per-vertex cost for a
//!   smoother boundary
//!
//! The scalar field is padded with a one-voxel zero border before extraction
//! so masks touching the grid boundary still yield closed surfaces; output
//! vertices are in the mask's own voxel space.
//!
//! Extracted triangles are consistently wound but face inward for occupancy
//! fields; the postprocessor flips winding once per mesh.
//!
//! # Example
//!
//! ```
//! use mesh_extract::{extract_surface, ExtractionMode};
//! use volume_grid::LabelVolume;
//!
//! let mut data = vec![0; 27];
//! data[13] = 17; // center voxel of a 3x3x3 grid
//! let volume = LabelVolume::with_identity_affine([3, 3, 3], data).unwrap();
//!
//! let mesh = extract_surface(&volume.mask_for_label(17), ExtractionMode::Standard);
//! assert!(!mesh.is_empty());
//! assert!(mesh.indices_in_range());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod marching;
mod mode;
mod refine;

pub use error::{ExtractError, ExtractResult};
pub use mode::ExtractionMode;

use mesh_types::TriMesh;
use nalgebra::Vector3;
use tracing::{debug, info};
use volume_grid::OccupancyMask;

use crate::marching::{marching_cubes, ScalarGrid};
use crate::refine::refine_along_gradient;

/// Iso-level separating "inside" from "outside" in a binary mask.
const ISO_LEVEL: f32 = 0.5;

/// Extract the boundary surface of an occupancy mask.
///
/// Returns an empty mesh for an all-false mask; that is a normal condition
/// meaning "nothing to emit for this structure", not a failure.
#[must_use]
pub fn extract_surface(mask: &OccupancyMask, mode: ExtractionMode) -> TriMesh {
    if mask.is_empty() {
        debug!("mask is empty, no surface to extract");
        return TriMesh::new();
    }

    let grid = ScalarGrid::padded_from_mask(mask);
    let mut mesh = marching_cubes(&grid, ISO_LEVEL);

    if mode == ExtractionMode::GradientRefined {
        refine_along_gradient(&mut mesh, &grid);
    }

    // Undo the zero-border padding so vertices land in mask voxel space.
    let unpad = Vector3::new(1.0, 1.0, 1.0);
    for p in &mut mesh.positions {
        p.coords -= unpad;
    }

    info!(
        mode = %mode,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "extracted isosurface"
    );
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use volume_grid::LabelVolume;

    fn block_mask(dims: [usize; 3], lo: usize, hi: usize) -> OccupancyMask {
        let mut data = vec![0; dims[0] * dims[1] * dims[2]];
        for x in lo..hi {
            for y in lo..hi {
                for z in lo..hi {
                    data[(x * dims[1] + y) * dims[2] + z] = 1;
                }
            }
        }
        LabelVolume::with_identity_affine(dims, data)
            .unwrap()
            .mask_for_label(1)
    }

    #[test]
    fn empty_mask_yields_empty_mesh() {
        let mask = block_mask([4, 4, 4], 0, 0);
        let mesh = extract_surface(&mask, ExtractionMode::Standard);
        assert!(mesh.is_empty());
    }

    #[test]
    fn block_at_origin_yields_closed_mesh() {
        // 2x2x2 occupied block in the corner of the grid: padding must keep
        // the surface closed even though the mask touches the boundary.
        let mask = block_mask([4, 4, 4], 0, 2);
        let mesh = extract_surface(&mask, ExtractionMode::Standard);
        assert!(!mesh.is_empty());
        assert!(mesh.indices_in_range());
        assert!(mesh.is_closed());
    }

    #[test]
    fn standard_extraction_is_deterministic() {
        let mask = block_mask([6, 6, 6], 1, 4);
        let a = extract_surface(&mask, ExtractionMode::Standard);
        let b = extract_surface(&mask, ExtractionMode::Standard);
        assert_eq!(a, b);
    }

    #[test]
    fn gradient_refined_keeps_topology() {
        let mask = block_mask([6, 6, 6], 1, 4);
        let standard = extract_surface(&mask, ExtractionMode::Standard);
        let refined = extract_surface(&mask, ExtractionMode::GradientRefined);

        // Refinement moves vertices, never changes connectivity.
        assert_eq!(standard.triangles, refined.triangles);
        assert_eq!(standard.vertex_count(), refined.vertex_count());
        assert!(refined.is_closed());
    }

    #[test]
    fn gradient_refined_moves_some_vertices() {
        let mask = block_mask([6, 6, 6], 1, 4);
        let standard = extract_surface(&mask, ExtractionMode::Standard);
        let refined = extract_surface(&mask, ExtractionMode::GradientRefined);

        let moved = standard
            .positions
            .iter()
            .zip(&refined.positions)
            .any(|(a, b)| (a - b).norm() > 1e-9);
        assert!(moved, "expected gradient refinement to displace vertices");
    }

    #[test]
    fn vertices_stay_near_mask_bounds() {
        let mask = block_mask([6, 6, 6], 1, 4);
        let mesh = extract_surface(&mask, ExtractionMode::Standard);
        for p in &mesh.positions {
            for axis in 0..3 {
                assert!(p.coords[axis] >= -1.0 && p.coords[axis] <= 6.0);
            }
        }
    }
}
