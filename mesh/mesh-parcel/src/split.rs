//! Splitting a dense surface into labeled region meshes.

#![allow(clippy::cast_possible_truncation)]

use hashbrown::HashMap;
use mesh_types::TriMesh;
use tracing::debug;

use crate::annotation::Annotation;
use crate::error::{ParcelError, ParcelResult};

/// One named sub-mesh cut out of a dense cortical surface.
#[derive(Debug, Clone)]
pub struct RegionMesh {
    /// Anatomical region name from the annotation's name table.
    pub name: String,
    /// Locally indexed geometry, sharing no buffers with the source mesh.
    pub mesh: TriMesh,
}

/// Partition `mesh` into one sub-mesh per labeled region.
///
/// Regions are visited in name-table order. Excluded filler regions, regions
/// with no vertices, and regions whose triangles all straddle a boundary
/// produce no output. A triangle belongs to a region only when all three of
/// its vertices carry that region's label; straddling triangles are dropped
/// from every region rather than assigned to one, trading thin seam gaps for
/// the absence of seam artifacts.
///
/// # Errors
///
/// [`ParcelError::LabelCountMismatch`] when the annotation's label array
/// length differs from the mesh's vertex count.
pub fn split_regions(mesh: &TriMesh, annotation: &Annotation) -> ParcelResult<Vec<RegionMesh>> {
    if annotation.labels().len() != mesh.vertex_count() {
        return Err(ParcelError::LabelCountMismatch {
            vertices: mesh.vertex_count(),
            labels: annotation.labels().len(),
        });
    }

    let mut regions = Vec::new();
    for (index, name) in annotation.names().iter().enumerate() {
        if Annotation::is_excluded(name) {
            debug!(region = %name, "excluded filler region");
            continue;
        }
        let Some(region) = extract_region(mesh, annotation.labels(), index as i32, name) else {
            debug!(region = %name, "region is empty, skipping");
            continue;
        };
        regions.push(region);
    }
    Ok(regions)
}

/// Cut out a single region, or `None` when it has no vertices or no fully
/// contained triangles.
fn extract_region(
    mesh: &TriMesh,
    labels: &[i32],
    label: i32,
    name: &str,
) -> Option<RegionMesh> {
    // Selected vertices in ascending index order; this order defines the
    // local indices of the region mesh.
    let selected: Vec<u32> = labels
        .iter()
        .enumerate()
        .filter(|&(_, &l)| l == label)
        .map(|(v, _)| v as u32)
        .collect();
    if selected.is_empty() {
        return None;
    }

    let remap: HashMap<u32, u32> = selected
        .iter()
        .enumerate()
        .map(|(local, &global)| (global, local as u32))
        .collect();

    let triangles: Vec<[u32; 3]> = mesh
        .triangles
        .iter()
        .filter_map(|tri| {
            // Strict containment: one foreign vertex drops the triangle.
            let a = *remap.get(&tri[0])?;
            let b = *remap.get(&tri[1])?;
            let c = *remap.get(&tri[2])?;
            Some([a, b, c])
        })
        .collect();
    if triangles.is_empty() {
        return None;
    }

    let positions = selected
        .iter()
        .map(|&v| mesh.positions[v as usize])
        .collect();
    Some(RegionMesh {
        name: name.to_string(),
        mesh: TriMesh::from_parts(positions, triangles),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::Point3;

    /// Ten vertices in a strip, eight triangles, labels 0 for the first five
    /// vertices and 1 for the rest. Two triangles straddle the boundary.
    fn strip() -> (TriMesh, Annotation) {
        let positions = (0..10)
            .map(|i| Point3::new(f64::from(i / 2), f64::from(i % 2), 0.0))
            .collect();
        let triangles = vec![
            [0, 1, 2],
            [1, 3, 2],
            [2, 3, 4],
            [3, 5, 4], // straddles: vertices 3 and 4 are region A, 5 is B
            [4, 5, 6], // straddles: vertex 4 is region A, 5 and 6 are B
            [5, 7, 6],
            [6, 7, 8],
            [7, 9, 8],
        ];
        let mesh = TriMesh::from_parts(positions, triangles);
        let labels = vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1];
        let names = vec!["regionA".to_string(), "regionB".to_string()];
        (mesh, Annotation::new(labels, names))
    }

    #[test]
    fn straddling_triangles_belong_to_no_region() {
        let (mesh, annotation) = strip();
        let regions = split_regions(&mesh, &annotation).unwrap();
        assert_eq!(regions.len(), 2);

        let a = &regions[0];
        let b = &regions[1];
        assert_eq!(a.name, "regionA");
        assert_eq!(b.name, "regionB");
        assert_eq!(a.mesh.triangle_count(), 3);
        assert_eq!(b.mesh.triangle_count(), 3);
        // The two straddling triangles are in neither output.
        assert_eq!(a.mesh.triangle_count() + b.mesh.triangle_count() + 2, 8);
    }

    #[test]
    fn regions_are_locally_indexed() {
        let (mesh, annotation) = strip();
        let regions = split_regions(&mesh, &annotation).unwrap();
        for region in &regions {
            assert!(region.mesh.indices_in_range());
            assert_eq!(region.mesh.vertex_count(), 5);
        }
        // Region B's vertices keep their source geometry.
        let b = &regions[1];
        assert_eq!(b.mesh.positions[0], mesh.positions[5]);
        assert_eq!(b.mesh.positions[4], mesh.positions[9]);
    }

    #[test]
    fn excluded_names_produce_no_region() {
        let (mesh, _) = strip();
        let labels = vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1];
        let names = vec!["unknown".to_string(), "regionB".to_string()];
        let regions = split_regions(&mesh, &Annotation::new(labels, names)).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].name, "regionB");
    }

    #[test]
    fn unpopulated_region_is_skipped() {
        let (mesh, _) = strip();
        let labels = vec![0; 10];
        let names = vec!["regionA".to_string(), "ghost".to_string()];
        let regions = split_regions(&mesh, &Annotation::new(labels, names)).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].name, "regionA");
    }

    #[test]
    fn all_straddling_region_is_skipped() {
        // Alternating labels: every triangle mixes both regions.
        let (mesh, _) = strip();
        let labels = vec![0, 1, 0, 1, 0, 1, 0, 1, 0, 1];
        let names = vec!["regionA".to_string(), "regionB".to_string()];
        let regions = split_regions(&mesh, &Annotation::new(labels, names)).unwrap();
        assert!(regions.is_empty());
    }

    #[test]
    fn label_count_mismatch_is_an_error() {
        let (mesh, _) = strip();
        let annotation = Annotation::new(vec![0, 0, 0], vec!["regionA".to_string()]);
        let err = split_regions(&mesh, &annotation);
        assert!(matches!(err, Err(ParcelError::LabelCountMismatch { .. })));
    }

    #[test]
    fn out_of_range_labels_match_nothing() {
        let (mesh, _) = strip();
        let labels = vec![0, 0, 0, 0, 0, 7, 7, 7, 7, 7];
        let names = vec!["regionA".to_string(), "regionB".to_string()];
        let regions = split_regions(&mesh, &Annotation::new(labels, names)).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].name, "regionA");
    }
}
