//! The subcortical structure worklist.

/// One anatomical structure in a labeled segmentation volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Structure {
    /// Label value in the segmentation volume.
    pub label: i32,
    /// Structure name, used for the output file and its comment header.
    pub name: &'static str,
    /// Whether the structure's mask must be filtered through a validity
    /// volume before extraction. Set for noisy classes that produce
    /// spurious voxels outside brain tissue.
    pub requires_validity: bool,
}

impl Structure {
    const fn plain(label: i32, name: &'static str) -> Self {
        Self {
            label,
            name,
            requires_validity: false,
        }
    }
}

/// The standard FreeSurfer subcortical segmentation worklist, in the order
/// structures are processed and reported.
pub const SUBCORTICAL_STRUCTURES: &[Structure] = &[
    Structure::plain(10, "Left-Thalamus"),
    Structure::plain(11, "Left-Caudate"),
    Structure::plain(12, "Left-Putamen"),
    Structure::plain(13, "Left-Pallidum"),
    Structure::plain(17, "Left-Hippocampus"),
    Structure::plain(18, "Left-Amygdala"),
    Structure::plain(26, "Left-Accumbens"),
    Structure::plain(49, "Right-Thalamus"),
    Structure::plain(50, "Right-Caudate"),
    Structure::plain(51, "Right-Putamen"),
    Structure::plain(52, "Right-Pallidum"),
    Structure::plain(53, "Right-Hippocampus"),
    Structure::plain(54, "Right-Amygdala"),
    Structure::plain(58, "Right-Accumbens"),
    Structure::plain(16, "Brain-Stem"),
    Structure {
        label: 77,
        name: "WM-hypointensities",
        requires_validity: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique() {
        for (i, a) in SUBCORTICAL_STRUCTURES.iter().enumerate() {
            for b in &SUBCORTICAL_STRUCTURES[i + 1..] {
                assert_ne!(a.label, b.label);
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn only_hypointensities_need_validity() {
        let validity_gated: Vec<_> = SUBCORTICAL_STRUCTURES
            .iter()
            .filter(|s| s.requires_validity)
            .collect();
        assert_eq!(validity_gated.len(), 1);
        assert_eq!(validity_gated[0].label, 77);
    }
}
