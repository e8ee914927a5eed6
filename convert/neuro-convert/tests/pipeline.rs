//! End-to-end tests: volume in, OBJ files out.

use mesh_obj::load_obj;
use mesh_parcel::Annotation;
use mesh_types::{Point3, TriMesh};
use neuro_convert::{
    convert_structure, convert_subcortical, split_parcellation, ConvertOptions, Hemisphere,
    ItemOutcome, Structure, SUBCORTICAL_STRUCTURES,
};
use volume_grid::LabelVolume;

/// A segmentation volume with a labeled block per requested structure.
fn segmentation(labels: &[i32]) -> LabelVolume {
    let dims = [16, 16, 16];
    let mut data = vec![0; 16 * 16 * 16];
    for (i, &label) in labels.iter().enumerate() {
        // Disjoint 3x3x3 blocks along x.
        let x0 = 1 + i * 4;
        for x in x0..x0 + 3 {
            for y in 2..5 {
                for z in 2..5 {
                    data[(x * 16 + y) * 16 + z] = label;
                }
            }
        }
    }
    LabelVolume::with_identity_affine(dims, data).unwrap()
}

#[test]
fn converts_present_structures_and_skips_absent_ones() {
    let volume = segmentation(&[10, 11]);
    let dir = tempfile::tempdir().unwrap();

    let summary =
        convert_subcortical(&volume, None, &ConvertOptions::default(), dir.path()).unwrap();
    assert_eq!(summary.outcomes.len(), SUBCORTICAL_STRUCTURES.len());
    assert_eq!(summary.written(), 2);
    // Label 77 requires a validity volume that was not supplied.
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.skipped(), SUBCORTICAL_STRUCTURES.len() - 3);

    let thalamus = dir.path().join("subcortical").join("Left-Thalamus.obj");
    assert!(thalamus.exists());
    let mesh = load_obj(&thalamus).unwrap();
    assert!(!mesh.is_empty());
    assert!(mesh.indices_in_range());

    // Skipped structures leave no file behind.
    assert!(!dir.path().join("subcortical").join("Brain-Stem.obj").exists());
}

#[test]
fn written_file_carries_the_structure_header() {
    let volume = segmentation(&[16]);
    let dir = tempfile::tempdir().unwrap();
    let structure = SUBCORTICAL_STRUCTURES
        .iter()
        .find(|s| s.label == 16)
        .unwrap();

    let outcome = convert_structure(
        &volume,
        None,
        structure,
        &ConvertOptions::default(),
        dir.path(),
    );
    let ItemOutcome::Written { path, .. } = outcome else {
        panic!("expected a written outcome, got {outcome}");
    };
    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.starts_with("# Brain-Stem\n"));
}

#[test]
fn hypointensities_convert_with_a_validity_volume() {
    let volume = segmentation(&[77]);
    // Validity covers the whole grid.
    let validity = LabelVolume::with_identity_affine([16, 16, 16], vec![1; 4096]).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let structure = SUBCORTICAL_STRUCTURES
        .iter()
        .find(|s| s.label == 77)
        .unwrap();

    let outcome = convert_structure(
        &volume,
        Some(&validity),
        structure,
        &ConvertOptions::default(),
        dir.path(),
    );
    assert!(outcome.is_written());
}

#[test]
fn conversion_is_deterministic() {
    let volume = segmentation(&[52]);
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    let structure = SUBCORTICAL_STRUCTURES
        .iter()
        .find(|s| s.label == 52)
        .unwrap();

    let options = ConvertOptions::default();
    convert_structure(&volume, None, structure, &options, dir_a.path());
    convert_structure(&volume, None, structure, &options, dir_b.path());

    let a = std::fs::read_to_string(dir_a.path().join("Right-Pallidum.obj")).unwrap();
    let b = std::fs::read_to_string(dir_b.path().join("Right-Pallidum.obj")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn decimation_reduces_triangles() {
    let volume = segmentation(&[53]);
    let structure = Structure {
        label: 53,
        name: "Right-Hippocampus",
        requires_validity: false,
    };
    let full = ConvertOptions {
        smooth: false,
        decimate_ratio: None,
        ..ConvertOptions::default()
    };
    let halved = ConvertOptions {
        smooth: false,
        decimate_ratio: Some(0.5),
        ..ConvertOptions::default()
    };

    let dir = tempfile::tempdir().unwrap();
    let full_outcome = convert_structure(&volume, None, &structure, &full, dir.path());
    let ItemOutcome::Written {
        triangles: full_triangles,
        ..
    } = full_outcome
    else {
        panic!("full-resolution conversion failed");
    };

    let dir = tempfile::tempdir().unwrap();
    let halved_outcome = convert_structure(&volume, None, &structure, &halved, dir.path());
    let ItemOutcome::Written {
        triangles: halved_triangles,
        ..
    } = halved_outcome
    else {
        panic!("decimated conversion failed");
    };

    assert!(halved_triangles < full_triangles);
}

#[test]
fn parcellation_writes_one_file_per_region() {
    // Two-region strip surface.
    let positions: Vec<_> = (0..10)
        .map(|i| Point3::new(f64::from(i / 2), f64::from(i % 2), 0.0))
        .collect();
    let triangles = vec![
        [0, 1, 2],
        [1, 3, 2],
        [2, 3, 4],
        [3, 5, 4],
        [4, 5, 6],
        [5, 7, 6],
        [6, 7, 8],
        [7, 9, 8],
    ];
    let surface = TriMesh::from_parts(positions, triangles);
    let annotation = Annotation::new(
        vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1],
        vec!["precentral".to_string(), "postcentral".to_string()],
    );

    let dir = tempfile::tempdir().unwrap();
    let summary = split_parcellation(&surface, &annotation, Hemisphere::Left, dir.path()).unwrap();
    assert_eq!(summary.written(), 2);

    let region_path = dir
        .path()
        .join("parcellations")
        .join("lh")
        .join("precentral.obj");
    let text = std::fs::read_to_string(&region_path).unwrap();
    assert!(text.starts_with("# Region: precentral\n# Hemisphere: lh\n"));

    let mesh = load_obj(&region_path).unwrap();
    assert_eq!(mesh.vertex_count(), 5);
    assert_eq!(mesh.triangle_count(), 3);
}

#[test]
fn bad_annotation_aborts_the_hemisphere() {
    let surface = TriMesh::from_parts(
        vec![
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ],
        vec![[0, 1, 2]],
    );
    let annotation = Annotation::new(vec![0], vec!["precentral".to_string()]);

    let dir = tempfile::tempdir().unwrap();
    let err = split_parcellation(&surface, &annotation, Hemisphere::Right, dir.path());
    assert!(err.is_err());
}
