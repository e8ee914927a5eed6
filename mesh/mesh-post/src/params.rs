//! Parameters for mesh postprocessing.

use crate::error::{PostprocessError, PostprocessResult};

/// Smoothing filter applied after winding correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SmoothFilter {
    /// Two-pass Taubin smoothing: a shrink pass at `lambda` followed by an
    /// inflate pass at `mu`, approximately volume preserving.
    Taubin {
        /// Shrink factor per iteration (positive).
        lambda: f64,
        /// Inflate factor per iteration (negative, slightly larger in
        /// magnitude than `lambda`).
        mu: f64,
        /// Number of shrink/inflate iteration pairs.
        iterations: usize,
    },

    /// Plain Laplacian averaging. Shrinks the mesh a little per iteration,
    /// acceptable when only a few passes run.
    Laplacian {
        /// Blend factor toward the neighborhood centroid.
        lambda: f64,
        /// Number of averaging passes.
        iterations: usize,
    },
}

impl SmoothFilter {
    /// The default filter for staircase-heavy marching cubes output.
    #[must_use]
    pub const fn volume_preserving() -> Self {
        Self::Taubin {
            lambda: 0.5,
            mu: -0.53,
            iterations: 30,
        }
    }

    /// A light averaging filter for meshes already refined at extraction
    /// time, where heavy smoothing would erase the refinement.
    #[must_use]
    pub const fn positional_averaging() -> Self {
        Self::Laplacian {
            lambda: 0.5,
            iterations: 3,
        }
    }

    /// Whether this filter compensates for Laplacian shrinkage.
    #[must_use]
    pub const fn is_volume_preserving(&self) -> bool {
        matches!(self, Self::Taubin { .. })
    }
}

/// Parameters for quadric edge-collapse decimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecimateParams {
    /// Fraction of triangles to keep, in `(0, 1]`. Default: 0.5
    pub target_ratio: f64,
}

impl Default for DecimateParams {
    fn default() -> Self {
        Self { target_ratio: 0.5 }
    }
}

impl DecimateParams {
    /// Create params targeting a ratio of original triangles.
    #[must_use]
    pub const fn with_target_ratio(ratio: f64) -> Self {
        Self {
            target_ratio: ratio,
        }
    }

    /// Reject ratios that cannot produce a meaningful mesh.
    pub fn validate(&self) -> PostprocessResult<()> {
        if self.target_ratio.is_finite() && self.target_ratio > 0.0 && self.target_ratio <= 1.0 {
            Ok(())
        } else {
            Err(PostprocessError::InvalidRatio(self.target_ratio))
        }
    }

    /// Triangle count to aim for, never below a tetrahedron.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn target_triangles(&self, current: usize) -> usize {
        let floor = current.min(4);
        let target = (current as f64 * self.target_ratio).round() as usize;
        target.clamp(floor, current)
    }
}

/// Full postprocessing configuration.
///
/// Winding correction always runs; smoothing and decimation are optional
/// stages selected per extraction mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostprocessParams {
    /// Smoothing filter, or `None` to keep raw extraction geometry.
    pub smooth: Option<SmoothFilter>,

    /// Decimation settings, or `None` to keep full resolution.
    pub decimate: Option<DecimateParams>,
}

impl Default for PostprocessParams {
    fn default() -> Self {
        Self::standard(Some(DecimateParams::default()))
    }
}

impl PostprocessParams {
    /// The pipeline for plain marching cubes output: volume-preserving
    /// smoothing plus optional decimation.
    #[must_use]
    pub const fn standard(decimate: Option<DecimateParams>) -> Self {
        Self {
            smooth: Some(SmoothFilter::volume_preserving()),
            decimate,
        }
    }

    /// The pipeline for gradient-refined output: light averaging only,
    /// no decimation.
    #[must_use]
    pub const fn gradient_refined() -> Self {
        Self {
            smooth: Some(SmoothFilter::positional_averaging()),
            decimate: None,
        }
    }
}
