//! Topology queries over triangle connectivity.

use std::collections::hash_map::DefaultHasher;
use std::hash::BuildHasherDefault;

use hashbrown::{HashMap, HashSet};

use crate::TriMesh;

/// Deterministic hasher so neighbor iteration order is identical across
/// runs; downstream floating-point accumulation depends on it.
type DetHasher = BuildHasherDefault<DefaultHasher>;

/// Normalize edge direction so the smaller index comes first.
#[inline]
const fn ordered_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 < v1 {
        (v0, v1)
    } else {
        (v1, v0)
    }
}

impl TriMesh {
    /// Count how many triangles share each undirected edge.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::TriMesh;
    /// use nalgebra::Point3;
    ///
    /// let mesh = TriMesh::from_parts(
    ///     vec![
    ///         Point3::origin(),
    ///         Point3::new(1.0, 0.0, 0.0),
    ///         Point3::new(0.0, 1.0, 0.0),
    ///         Point3::new(1.0, 1.0, 0.0),
    ///     ],
    ///     vec![[0, 1, 2], [1, 3, 2]],
    /// );
    ///
    /// let counts = mesh.edge_face_counts();
    /// assert_eq!(counts[&(1, 2)], 2); // shared edge
    /// assert_eq!(counts[&(0, 1)], 1); // boundary edge
    /// ```
    #[must_use]
    pub fn edge_face_counts(&self) -> HashMap<(u32, u32), usize> {
        let mut counts: HashMap<(u32, u32), usize> = HashMap::new();
        for tri in &self.triangles {
            for i in 0..3 {
                let edge = ordered_edge(tri[i], tri[(i + 1) % 3]);
                *counts.entry(edge).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Returns `true` if every edge is shared by exactly two triangles.
    ///
    /// A closed (watertight, manifold) surface satisfies this; extraction of
    /// any finite occupancy mask is expected to.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        !self.triangles.is_empty() && self.edge_face_counts().values().all(|&c| c == 2)
    }

    /// Per-vertex lists of neighboring vertex indices.
    ///
    /// Neighbors are the vertices connected by a triangle edge, deduplicated,
    /// in unspecified order. Vertices not referenced by any triangle have an
    /// empty list.
    #[must_use]
    pub fn vertex_neighbors(&self) -> Vec<Vec<u32>> {
        let mut sets: Vec<HashSet<u32, DetHasher>> = vec![HashSet::default(); self.positions.len()];
        for tri in &self.triangles {
            for i in 0..3 {
                let v = tri[i] as usize;
                sets[v].insert(tri[(i + 1) % 3]);
                sets[v].insert(tri[(i + 2) % 3]);
            }
        }
        sets.into_iter().map(|s| s.into_iter().collect()).collect()
    }
}
