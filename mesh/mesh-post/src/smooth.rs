//! Neighborhood-averaging smoothing filters.

#![allow(clippy::cast_precision_loss)]

use mesh_types::{Point3, TriMesh, Vector3};
use tracing::debug;

use crate::params::SmoothFilter;

/// Smooth `mesh` in place with the given filter.
///
/// Connectivity is untouched; isolated vertices never move.
pub(crate) fn smooth(mesh: &mut TriMesh, filter: &SmoothFilter) {
    if mesh.is_empty() {
        return;
    }
    let neighbors = mesh.vertex_neighbors();
    match *filter {
        SmoothFilter::Taubin {
            lambda,
            mu,
            iterations,
        } => {
            for _ in 0..iterations {
                average_pass(&mut mesh.positions, &neighbors, lambda);
                average_pass(&mut mesh.positions, &neighbors, mu);
            }
            debug!(iterations, lambda, mu, "applied taubin smoothing");
        }
        SmoothFilter::Laplacian { lambda, iterations } => {
            for _ in 0..iterations {
                average_pass(&mut mesh.positions, &neighbors, lambda);
            }
            debug!(iterations, lambda, "applied laplacian smoothing");
        }
    }
}

/// Move every vertex toward (or away from, for negative factors) the
/// centroid of its neighbors. Reads the pre-pass positions throughout so
/// the result does not depend on vertex order.
fn average_pass(positions: &mut [Point3<f64>], neighbors: &[Vec<u32>], factor: f64) {
    let current = positions.to_vec();
    for (i, nbrs) in neighbors.iter().enumerate() {
        if nbrs.is_empty() {
            continue;
        }
        let mut centroid = Vector3::zeros();
        for &n in nbrs {
            centroid += current[n as usize].coords;
        }
        centroid /= nbrs.len() as f64;
        positions[i].coords += (centroid - current[i].coords) * factor;
    }
}
