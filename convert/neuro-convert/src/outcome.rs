//! Per-item outcomes and run summaries.

use std::fmt;
use std::path::PathBuf;

use crate::error::ConvertError;

/// Outcome of converting one structure or region.
///
/// Failures are values here, not propagated errors: one bad item never
/// aborts the batch it belongs to.
#[derive(Debug)]
pub enum ItemOutcome {
    /// The item produced an OBJ file.
    Written {
        /// Structure or region name.
        name: String,
        /// Path of the written file.
        path: PathBuf,
        /// Vertices in the written mesh.
        vertices: usize,
        /// Triangles in the written mesh.
        triangles: usize,
    },

    /// The item matched nothing and produced no file. Not a failure.
    Skipped {
        /// Structure or region name.
        name: String,
        /// Why the item was skipped.
        reason: String,
    },

    /// The item failed; the batch continues without it.
    Failed {
        /// Structure or region name.
        name: String,
        /// What went wrong.
        error: ConvertError,
    },
}

impl ItemOutcome {
    /// Name of the structure or region this outcome belongs to.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Written { name, .. } | Self::Skipped { name, .. } | Self::Failed { name, .. } => {
                name
            }
        }
    }

    /// Whether a file was produced.
    #[must_use]
    pub const fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}

impl fmt::Display for ItemOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written {
                name,
                vertices,
                triangles,
                ..
            } => write!(f, "{name}: written ({vertices} vertices, {triangles} triangles)"),
            Self::Skipped { name, reason } => write!(f, "{name}: skipped ({reason})"),
            Self::Failed { name, error } => write!(f, "{name}: failed ({error})"),
        }
    }
}

/// Collected outcomes of one batch run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// One outcome per worklist item, in processing order.
    pub outcomes: Vec<ItemOutcome>,
}

impl RunSummary {
    /// An empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one item's outcome.
    pub fn push(&mut self, outcome: ItemOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of items that produced a file.
    #[must_use]
    pub fn written(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_written()).count()
    }

    /// Number of items skipped as empty.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ItemOutcome::Skipped { .. }))
            .count()
    }

    /// Number of items that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ItemOutcome::Failed { .. }))
            .count()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} written, {} skipped, {} failed",
            self.written(),
            self.skipped(),
            self.failed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_by_kind() {
        let mut summary = RunSummary::new();
        summary.push(ItemOutcome::Written {
            name: "Left-Thalamus".to_string(),
            path: PathBuf::from("Left-Thalamus.obj"),
            vertices: 100,
            triangles: 200,
        });
        summary.push(ItemOutcome::Skipped {
            name: "Right-Amygdala".to_string(),
            reason: "no voxels matched label 54".to_string(),
        });
        summary.push(ItemOutcome::Failed {
            name: "WM-hypointensities".to_string(),
            error: volume_grid::VolumeError::MissingValidity.into(),
        });

        assert_eq!(summary.written(), 1);
        assert_eq!(summary.skipped(), 1);
        assert_eq!(summary.failed(), 1);
        assert_eq!(format!("{summary}"), "1 written, 1 skipped, 1 failed");
    }

    #[test]
    fn outcome_display_names_the_item() {
        let outcome = ItemOutcome::Skipped {
            name: "Brain-Stem".to_string(),
            reason: "empty".to_string(),
        };
        assert_eq!(outcome.name(), "Brain-Stem");
        assert!(format!("{outcome}").contains("Brain-Stem"));
    }
}
