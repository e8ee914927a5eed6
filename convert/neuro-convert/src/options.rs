//! Conversion options.

use mesh_extract::ExtractionMode;
use mesh_post::{DecimateParams, PostprocessParams, SmoothFilter};

use crate::error::ConvertResult;

/// Options governing one batch of structure conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertOptions {
    /// Isosurface extraction mode.
    pub mode: ExtractionMode,

    /// Whether to smooth extracted meshes. The filter is chosen per mode:
    /// volume-preserving for standard extraction, light averaging for
    /// gradient-refined extraction.
    pub smooth: bool,

    /// Decimation target ratio, or `None` to keep full resolution. Only
    /// honored on the standard path; gradient-refined meshes are never
    /// decimated.
    pub decimate_ratio: Option<f64>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            mode: ExtractionMode::Standard,
            smooth: true,
            decimate_ratio: Some(0.5),
        }
    }
}

impl ConvertOptions {
    /// Build options from an extraction mode string.
    ///
    /// # Errors
    ///
    /// [`mesh_extract::ExtractError::UnknownMode`] for unrecognized modes.
    pub fn with_mode_str(mode: &str) -> ConvertResult<Self> {
        Ok(Self {
            mode: mode.parse()?,
            ..Self::default()
        })
    }

    /// The postprocessing pipeline these options select.
    #[must_use]
    pub fn postprocess_params(&self) -> PostprocessParams {
        match self.mode {
            ExtractionMode::Standard => PostprocessParams {
                smooth: self.smooth.then(SmoothFilter::volume_preserving),
                decimate: self.decimate_ratio.map(DecimateParams::with_target_ratio),
            },
            ExtractionMode::GradientRefined => PostprocessParams {
                smooth: self.smooth.then(SmoothFilter::positional_averaging),
                decimate: None,
            },
        }
    }
}
