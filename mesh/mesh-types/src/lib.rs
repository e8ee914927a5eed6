//! Core triangle mesh type for the NeuroMesh pipeline.
//!
//! This crate provides the mesh representation shared by every stage of the
//! volume-to-mesh conversion:
//!
//! - [`TriMesh`] - Vertex positions plus indexed triangles
//! - Topology queries (edge sharing, closedness) via [`TriMesh::edge_face_counts`]
//!
//! # Conventions
//!
//! All coordinates are `f64`. Triangle indices are `u32` and must stay in
//! range `[0, vertex_count)`. Counter-clockwise winding viewed from outside
//! means the normal points outward; the isosurface extractor emits the
//! opposite and the postprocessor corrects it once per mesh.
//!
//! # Example
//!
//! ```
//! use mesh_types::TriMesh;
//! use nalgebra::Point3;
//!
//! let mut mesh = TriMesh::new();
//! mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.positions.push(Point3::new(0.5, 1.0, 0.0));
//! mesh.triangles.push([0, 1, 2]);
//!
//! assert_eq!(mesh.triangle_count(), 1);
//! assert!(mesh.indices_in_range());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod adjacency;
mod mesh;

pub use mesh::TriMesh;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point3, Vector3};
