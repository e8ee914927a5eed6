//! Batch conversion of brain imaging data to OBJ meshes.
//!
//! Two independent pipelines, both feeding the same OBJ writer:
//!
//! - **Subcortical**: labeled segmentation volume → per-structure occupancy
//!   mask → isosurface extraction → postprocessing (winding, smoothing,
//!   optional decimation) → physical coordinates via the volume affine →
//!   `subcortical/<Structure>.obj`
//! - **Parcellation**: dense cortical surface + per-vertex annotation →
//!   region splitting → `parcellations/<hemi>/<region>.obj`
//!
//! Per-item failures never abort a batch: each structure or region reports
//! an [`ItemOutcome`] and the run ends with a [`RunSummary`]. Binary input
//! parsing (volumes, surfaces, annotations) is out of scope; callers hand
//! over raw arrays.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod options;
mod outcome;
mod parcellate;
mod pipeline;
mod structures;
mod surface;

pub use error::{ConvertError, ConvertResult};
pub use options::ConvertOptions;
pub use outcome::{ItemOutcome, RunSummary};
pub use parcellate::{split_parcellation, Hemisphere};
pub use pipeline::{convert_structure, convert_subcortical};
pub use structures::{Structure, SUBCORTICAL_STRUCTURES};
pub use surface::write_surface;
