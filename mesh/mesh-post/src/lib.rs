//! Postprocessing for extracted isosurfaces.
//!
//! Marching cubes output needs three touches before it is presentable:
//!
//! 1. Winding correction - occupancy fields produce inward-facing
//!    triangles, so the winding is flipped once per mesh
//! 2. Smoothing - volume-preserving Taubin passes for raw extraction,
//!    light Laplacian averaging for gradient-refined extraction
//! 3. Decimation - optional quadric edge collapse down to a target ratio
//!
//! A decimation failure is recoverable: the smoothed mesh is kept and the
//! failure is logged, because an oversized mesh is more useful than no mesh.
//! A bad decimation ratio is a configuration error and fails up front.
//!
//! # Example
//!
//! ```
//! use mesh_post::{postprocess, PostprocessParams};
//! use mesh_types::{Point3, TriMesh};
//!
//! let positions = vec![
//!     Point3::origin(),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//! ];
//! let triangles = vec![[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]];
//! let mut mesh = TriMesh::from_parts(positions, triangles);
//!
//! postprocess(&mut mesh, &PostprocessParams::gradient_refined()).unwrap();
//! assert_eq!(mesh.triangle_count(), 4);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod decimate;
mod error;
mod params;
mod quadric;
mod result;
mod smooth;

pub use decimate::decimate;
pub use error::{PostprocessError, PostprocessResult};
pub use params::{DecimateParams, PostprocessParams, SmoothFilter};
pub use result::DecimationResult;

use mesh_types::TriMesh;
use tracing::{info, warn};

/// Run the full postprocessing pipeline on `mesh` in place.
///
/// Returns the decimation result when decimation ran and succeeded.
///
/// # Errors
///
/// [`PostprocessError::InvalidRatio`] when the configured decimation ratio
/// is unusable; the mesh is untouched in that case. Runtime decimation
/// failures are logged and swallowed, keeping the smoothed mesh.
pub fn postprocess(
    mesh: &mut TriMesh,
    params: &PostprocessParams,
) -> PostprocessResult<Option<DecimationResult>> {
    if let Some(decimate_params) = &params.decimate {
        decimate_params.validate()?;
    }

    // Extraction winds triangles toward the occupied interior.
    mesh.flip_winding();

    if let Some(filter) = &params.smooth {
        smooth::smooth(mesh, filter);
    }

    let Some(decimate_params) = &params.decimate else {
        return Ok(None);
    };
    match decimate(mesh, decimate_params) {
        Ok(result) => {
            info!(%result, "decimated mesh");
            *mesh = result.mesh.clone();
            Ok(Some(result))
        }
        Err(err) => {
            warn!(error = %err, "decimation failed, keeping smoothed mesh");
            Ok(None)
        }
    }
}
