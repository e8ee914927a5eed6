//! Direct export of dense cortical surfaces.

use std::path::Path;

use mesh_obj::save_obj;
use mesh_types::TriMesh;

use crate::error::{ConvertError, ConvertResult};

/// Write a dense surface mesh (pial, white, inflated, ...) straight to OBJ.
///
/// Surface sources already deliver outward-facing geometry, so no
/// postprocessing runs; `flip_winding` is available for sources with the
/// opposite convention.
///
/// # Errors
///
/// [`ConvertError::Write`] when the file cannot be written.
pub fn write_surface(
    surface: &TriMesh,
    name: &str,
    path: &Path,
    flip_winding: bool,
) -> ConvertResult<()> {
    let comments = [format!("Surface: {name}")];
    let comment_refs: Vec<&str> = comments.iter().map(String::as_str).collect();

    let result = if flip_winding {
        let mut flipped = surface.clone();
        flipped.flip_winding();
        save_obj(&flipped, path, &comment_refs)
    } else {
        save_obj(surface, path, &comment_refs)
    };
    result.map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}
