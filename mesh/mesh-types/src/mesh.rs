//! Indexed triangle mesh.

use nalgebra::{Matrix4, Point3};

/// An indexed triangle mesh.
///
/// Vertex positions and triangles are stored separately; each triangle is a
/// triple of indices into the position list.
///
/// # Winding
///
/// Triangles use counter-clockwise winding when viewed from outside once the
/// postprocessor has run its orientation step. A consistently wound closed
/// mesh with outward normals has positive [`signed volume`](Self::signed_volume).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriMesh {
    /// Vertex positions.
    pub positions: Vec<Point3<f64>>,

    /// Triangles as index triples into `positions`.
    pub triangles: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Create a mesh from positions and triangles.
    #[inline]
    #[must_use]
    pub const fn from_parts(positions: Vec<Point3<f64>>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            positions,
            triangles,
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` if the mesh has no vertices and no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.triangles.is_empty()
    }

    /// Returns `true` if every triangle index is in `[0, vertex_count)`.
    #[must_use]
    pub fn indices_in_range(&self) -> bool {
        let n = self.positions.len();
        self.triangles
            .iter()
            .all(|t| t.iter().all(|&i| (i as usize) < n))
    }

    /// Invert the winding of every triangle.
    ///
    /// Swapping the last two indices of each triangle flips the facing of
    /// every normal. Applied once per extracted mesh to turn the extractor's
    /// inward-facing output into the outward convention consumed by viewers.
    pub fn flip_winding(&mut self) {
        for tri in &mut self.triangles {
            tri.swap(1, 2);
        }
    }

    /// Apply a 4x4 homogeneous transform to every vertex in place.
    ///
    /// Used to map voxel-space meshes into physical (scanner) coordinates via
    /// the volume's affine.
    pub fn transform(&mut self, affine: &Matrix4<f64>) {
        for p in &mut self.positions {
            *p = affine.transform_point(p);
        }
    }

    /// Signed volume of the mesh by the divergence theorem.
    ///
    /// Sums the signed volumes of tetrahedra formed by each triangle and the
    /// origin. Positive for a closed mesh with outward-facing normals.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let mut volume = 0.0;
        for &[i0, i1, i2] in &self.triangles {
            let v0 = self.positions[i0 as usize].coords;
            let v1 = self.positions[i1 as usize].coords;
            let v2 = self.positions[i2 as usize].coords;
            volume += v0.dot(&v1.cross(&v2));
        }
        volume / 6.0
    }
}
