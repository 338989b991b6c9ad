//! Height/displacement from luminance

use crate::filters::gaussian_blur;
use crate::io::configuration::{
    DEFAULT_HEIGHT_BOOST, HEIGHT_BLUR_KERNEL, HEIGHT_BODY_MIX, HEIGHT_DETAIL_MIX,
};
use crate::io::error::Result;
use crate::raster::ScalarField;

/// Height generator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightParameters {
    /// Bias the map toward broad shape so displaced meshes stay smooth
    pub low_frequency_boost: bool,
}

impl Default for HeightParameters {
    fn default() -> Self {
        Self {
            low_frequency_boost: DEFAULT_HEIGHT_BOOST,
        }
    }
}

/// Derive a height map from luminance
///
/// # Errors
///
/// Returns an error only if the fixed blur kernel is rejected
pub fn generate_height_map(luminance: &ScalarField, params: HeightParameters) -> Result<ScalarField> {
    if !params.low_frequency_boost {
        return Ok(luminance.clamped());
    }

    let body = gaussian_blur(luminance, HEIGHT_BLUR_KERNEL)?;
    let mixed = luminance.zip_map(&body, |detail, broad| {
        detail.mul_add(HEIGHT_DETAIL_MIX, broad * HEIGHT_BODY_MIX)
    });
    Ok(mixed.clamped())
}
