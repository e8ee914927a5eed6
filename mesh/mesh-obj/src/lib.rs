//! Wavefront OBJ I/O for triangle meshes.
//!
//! The text format is deliberately minimal: `v x y z` lines with six
//! decimal places, `f a b c` lines with 1-based indices, and optional `# `
//! comment headers naming the source structure or region. That subset is
//! what downstream visualization tooling consumes.
//!
//! # Example
//!
//! ```
//! use mesh_obj::{read_obj, write_obj};
//! use mesh_types::{Point3, TriMesh};
//!
//! let positions = vec![
//!     Point3::origin(),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let mesh = TriMesh::from_parts(positions, vec![[0, 1, 2]]);
//!
//! let mut text = Vec::new();
//! write_obj(&mesh, &mut text, &["demo"]).unwrap();
//! assert_eq!(read_obj(std::io::Cursor::new(text)).unwrap(), mesh);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod obj;

pub use error::{ObjError, ObjResult};
pub use obj::{load_obj, read_obj, save_obj, write_obj};
