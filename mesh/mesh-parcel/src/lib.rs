//! Cortical surface parcellation.
//!
//! Takes a dense surface mesh and a per-vertex annotation (label array plus
//! region name table) and cuts the surface into one independent, locally
//! indexed mesh per anatomical region. Filler regions ("unknown",
//! "corpuscallosum") are excluded by policy, and triangles whose vertices
//! span two regions are dropped from both.
//!
//! # Example
//!
//! ```
//! use mesh_parcel::{split_regions, Annotation};
//! use mesh_types::{Point3, TriMesh};
//!
//! let positions = vec![
//!     Point3::origin(),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let mesh = TriMesh::from_parts(positions, vec![[0, 1, 2]]);
//! let annotation = Annotation::new(vec![0, 0, 0], vec!["precentral".to_string()]);
//!
//! let regions = split_regions(&mesh, &annotation).unwrap();
//! assert_eq!(regions.len(), 1);
//! assert_eq!(regions[0].name, "precentral");
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod annotation;
mod error;
mod split;

pub use annotation::Annotation;
pub use error::{ParcelError, ParcelResult};
pub use split::{split_regions, RegionMesh};
