//! Per-vertex region annotations.

/// Region names that denote non-anatomical filler vertices, matched
/// case-insensitively and never emitted as regions.
const EXCLUDED_REGIONS: [&str; 2] = ["unknown", "corpuscallosum"];

/// A per-vertex labeling of a dense surface mesh.
///
/// Each entry of `labels` is an index into `names`; a label outside that
/// range simply matches no region. The label array must be exactly as long
/// as the mesh's vertex list, which is checked at split time.
#[derive(Debug, Clone)]
pub struct Annotation {
    labels: Vec<i32>,
    names: Vec<String>,
}

impl Annotation {
    /// Pair a per-vertex label array with its region name table.
    #[must_use]
    pub fn new(labels: Vec<i32>, names: Vec<String>) -> Self {
        Self { labels, names }
    }

    /// One label per vertex of the annotated mesh.
    #[must_use]
    pub fn labels(&self) -> &[i32] {
        &self.labels
    }

    /// Region names, indexed by label value.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether a region name is excluded from parcellation output.
    #[must_use]
    pub fn is_excluded(name: &str) -> bool {
        EXCLUDED_REGIONS
            .iter()
            .any(|excluded| name.eq_ignore_ascii_case(excluded))
    }
}
