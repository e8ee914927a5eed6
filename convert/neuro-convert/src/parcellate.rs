//! Writing cortical parcellations, one OBJ per region per hemisphere.

use std::fmt;
use std::fs;
use std::path::Path;

use mesh_obj::save_obj;
use mesh_parcel::{split_regions, Annotation};
use mesh_types::TriMesh;
use tracing::{info, warn};

use crate::error::{ConvertError, ConvertResult};
use crate::outcome::{ItemOutcome, RunSummary};

/// Cortical hemisphere, used to namespace parcellation output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    /// Left hemisphere, `lh` in FreeSurfer naming.
    Left,
    /// Right hemisphere, `rh` in FreeSurfer naming.
    Right,
}

impl Hemisphere {
    /// The conventional two-letter prefix.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Left => "lh",
            Self::Right => "rh",
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Split a dense cortical surface by annotation and write one OBJ per
/// region under `output_dir/parcellations/<hemisphere>/`.
///
/// Write failures are isolated per region; only an unusable annotation or
/// an uncreatable output directory aborts the whole hemisphere.
///
/// # Errors
///
/// [`ConvertError::Parcel`] when the annotation does not match the surface,
/// [`ConvertError::Io`] when the output directory cannot be created.
pub fn split_parcellation(
    surface: &TriMesh,
    annotation: &Annotation,
    hemisphere: Hemisphere,
    output_dir: &Path,
) -> ConvertResult<RunSummary> {
    let dir = output_dir.join("parcellations").join(hemisphere.prefix());
    fs::create_dir_all(&dir)?;

    let regions = split_regions(surface, annotation)?;
    let mut summary = RunSummary::new();
    for region in regions {
        let path = dir.join(format!("{}.obj", region.name));
        let comments = [
            format!("Region: {}", region.name),
            format!("Hemisphere: {hemisphere}"),
        ];
        let comment_refs: Vec<&str> = comments.iter().map(String::as_str).collect();

        let outcome = match save_obj(&region.mesh, &path, &comment_refs) {
            Ok(()) => ItemOutcome::Written {
                name: region.name,
                path,
                vertices: region.mesh.vertex_count(),
                triangles: region.mesh.triangle_count(),
            },
            Err(source) => ItemOutcome::Failed {
                name: region.name,
                error: ConvertError::Write { path, source },
            },
        };
        match &outcome {
            ItemOutcome::Failed { .. } => warn!(%outcome, "region write failed"),
            _ => info!(%outcome, "region written"),
        }
        summary.push(outcome);
    }
    info!(hemisphere = %hemisphere, %summary, "parcellation finished");
    Ok(summary)
}
