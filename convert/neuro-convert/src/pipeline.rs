//! The per-structure volume-to-mesh pipeline.

use std::fs;
use std::path::Path;

use mesh_extract::extract_surface;
use mesh_obj::save_obj;
use mesh_post::postprocess;
use mesh_types::TriMesh;
use tracing::{info, warn};
use volume_grid::{apply_validity, LabelVolume};

use crate::error::ConvertResult;
use crate::options::ConvertOptions;
use crate::outcome::{ItemOutcome, RunSummary};
use crate::structures::{Structure, SUBCORTICAL_STRUCTURES};
use crate::ConvertError;

/// Convert one structure from a labeled volume to an OBJ file in
/// `output_dir`.
///
/// Every failure mode is folded into the returned outcome; this never
/// aborts a batch.
pub fn convert_structure(
    volume: &LabelVolume,
    validity: Option<&LabelVolume>,
    structure: &Structure,
    options: &ConvertOptions,
    output_dir: &Path,
) -> ItemOutcome {
    let name = structure.name.to_string();
    match build_structure_mesh(volume, validity, structure, options) {
        Ok(None) => ItemOutcome::Skipped {
            name,
            reason: format!("no voxels matched label {}", structure.label),
        },
        Ok(Some(mesh)) => {
            let path = output_dir.join(format!("{}.obj", structure.name));
            match save_obj(&mesh, &path, &[structure.name]) {
                Ok(()) => ItemOutcome::Written {
                    name,
                    path,
                    vertices: mesh.vertex_count(),
                    triangles: mesh.triangle_count(),
                },
                Err(source) => ItemOutcome::Failed {
                    name,
                    error: ConvertError::Write { path, source },
                },
            }
        }
        Err(error) => ItemOutcome::Failed { name, error },
    }
}

/// Mask, extract, postprocess, and map to physical coordinates.
///
/// `Ok(None)` means the structure has no voxels (or no surface) and should
/// be skipped.
fn build_structure_mesh(
    volume: &LabelVolume,
    validity: Option<&LabelVolume>,
    structure: &Structure,
    options: &ConvertOptions,
) -> ConvertResult<Option<TriMesh>> {
    let mut mask = volume.mask_for_label(structure.label);
    if structure.requires_validity {
        mask = apply_validity(&mask, validity)?;
    }
    if mask.is_empty() {
        return Ok(None);
    }

    let mut mesh = extract_surface(&mask, options.mode);
    if mesh.is_empty() {
        return Ok(None);
    }
    postprocess(&mut mesh, &options.postprocess_params())?;

    // Vertices are in voxel space until here.
    mesh.transform(volume.affine());
    Ok(Some(mesh))
}

/// Convert the whole subcortical worklist into `output_dir/subcortical/`.
///
/// # Errors
///
/// Only when the output directory cannot be created; individual structure
/// failures are captured in the summary.
pub fn convert_subcortical(
    volume: &LabelVolume,
    validity: Option<&LabelVolume>,
    options: &ConvertOptions,
    output_dir: &Path,
) -> ConvertResult<RunSummary> {
    let dir = output_dir.join("subcortical");
    fs::create_dir_all(&dir)?;

    let mut summary = RunSummary::new();
    for structure in SUBCORTICAL_STRUCTURES {
        let outcome = convert_structure(volume, validity, structure, options, &dir);
        match &outcome {
            ItemOutcome::Failed { .. } => warn!(%outcome, "structure conversion failed"),
            _ => info!(%outcome, "structure processed"),
        }
        summary.push(outcome);
    }
    info!(%summary, "subcortical conversion finished");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_extract::ExtractionMode;

    /// A volume with a 3x3x3 block of the given label in a 8^3 grid.
    fn volume_with_block(label: i32) -> LabelVolume {
        let dims = [8, 8, 8];
        let mut data = vec![0; 512];
        for x in 2..5 {
            for y in 2..5 {
                for z in 2..5 {
                    data[(x * 8 + y) * 8 + z] = label;
                }
            }
        }
        LabelVolume::with_identity_affine(dims, data).unwrap()
    }

    #[test]
    fn block_structure_builds_a_closed_mesh() {
        let volume = volume_with_block(17);
        let structure = Structure {
            label: 17,
            name: "Left-Hippocampus",
            requires_validity: false,
        };
        let mesh = build_structure_mesh(&volume, None, &structure, &ConvertOptions::default())
            .unwrap()
            .unwrap();
        assert!(mesh.is_closed());
        // Winding was corrected to face outward.
        assert!(mesh.signed_volume() > 0.0);
    }

    #[test]
    fn absent_label_skips() {
        let volume = volume_with_block(17);
        let structure = Structure {
            label: 54,
            name: "Right-Amygdala",
            requires_validity: false,
        };
        let mesh =
            build_structure_mesh(&volume, None, &structure, &ConvertOptions::default()).unwrap();
        assert!(mesh.is_none());
    }

    #[test]
    fn validity_gated_structure_without_validity_fails() {
        let volume = volume_with_block(77);
        let structure = Structure {
            label: 77,
            name: "WM-hypointensities",
            requires_validity: true,
        };
        let err = build_structure_mesh(&volume, None, &structure, &ConvertOptions::default());
        assert!(matches!(err, Err(ConvertError::Volume(_))));
    }

    #[test]
    fn validity_intersection_can_empty_the_mask() {
        let volume = volume_with_block(77);
        let validity = LabelVolume::with_identity_affine([8, 8, 8], vec![0; 512]).unwrap();
        let structure = Structure {
            label: 77,
            name: "WM-hypointensities",
            requires_validity: true,
        };
        let mesh = build_structure_mesh(
            &volume,
            Some(&validity),
            &structure,
            &ConvertOptions::default(),
        )
        .unwrap();
        assert!(mesh.is_none());
    }

    #[test]
    fn gradient_refined_mode_builds_a_mesh() {
        let volume = volume_with_block(10);
        let structure = Structure {
            label: 10,
            name: "Left-Thalamus",
            requires_validity: false,
        };
        let options = ConvertOptions {
            mode: ExtractionMode::GradientRefined,
            ..ConvertOptions::default()
        };
        let mesh = build_structure_mesh(&volume, None, &structure, &options)
            .unwrap()
            .unwrap();
        assert!(!mesh.is_empty());
        assert!(mesh.indices_in_range());
    }

    #[test]
    fn affine_maps_vertices_to_physical_space() {
        let dims = [8, 8, 8];
        let mut data = vec![0; 512];
        for x in 2..5 {
            for y in 2..5 {
                for z in 2..5 {
                    data[(x * 8 + y) * 8 + z] = 16;
                }
            }
        }
        // Scale by 2 and translate by 10 along x.
        let mut affine = mesh_types::Matrix4::identity();
        affine[(0, 0)] = 2.0;
        affine[(0, 3)] = 10.0;
        let volume = LabelVolume::new(dims, affine, data).unwrap();

        let structure = Structure {
            label: 16,
            name: "Brain-Stem",
            requires_validity: false,
        };
        let options = ConvertOptions {
            smooth: false,
            decimate_ratio: None,
            ..ConvertOptions::default()
        };
        let mesh = build_structure_mesh(&volume, None, &structure, &options)
            .unwrap()
            .unwrap();
        // The block spans voxels 2..4, so x lands in roughly [13, 19].
        for p in &mesh.positions {
            assert!(p.x > 12.0 && p.x < 20.0, "unexpected x: {}", p.x);
        }
    }
}
