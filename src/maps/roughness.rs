//! Roughness from luminance plus a share of curvature

use crate::filters::laplacian;
use crate::io::configuration::{
    CURVATURE_WEIGHT, DEFAULT_ROUGHNESS_BRIGHTNESS, DEFAULT_ROUGHNESS_CONTRAST,
    DEFAULT_ROUGHNESS_INVERT,
};
use crate::io::error::Result;
use crate::maps::{ensure_non_negative, ensure_range};
use crate::raster::ScalarField;

/// Roughness curve configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoughnessParameters {
    /// Contrast around mid-gray
    pub contrast: f32,
    /// Offset added after the contrast stretch
    pub brightness: f32,
    /// Read bright source pixels as smooth
    pub invert: bool,
}

impl Default for RoughnessParameters {
    fn default() -> Self {
        Self {
            contrast: DEFAULT_ROUGHNESS_CONTRAST,
            brightness: DEFAULT_ROUGHNESS_BRIGHTNESS,
            invert: DEFAULT_ROUGHNESS_INVERT,
        }
    }
}

impl RoughnessParameters {
    /// Check every field against its accepted range
    ///
    /// # Errors
    ///
    /// Returns an error if `contrast` is negative or `brightness` lies outside [-1, 1]
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("roughness_contrast", self.contrast)?;
        ensure_range("roughness_brightness", self.brightness, -1.0, 1.0)
    }
}

/// Contrast/brightness curve with optional inversion, unclamped
pub fn roughness_curve(value: f32, params: RoughnessParameters) -> f32 {
    let curved = (value - 0.5).mul_add(params.contrast, 0.5) + params.brightness;
    if params.invert { 1.0 - curved } else { curved }
}

/// Derive a roughness map from luminance
///
/// Crevices and edges, where the Laplacian is large, are nudged rougher.
///
/// # Errors
///
/// Returns an error if the parameters are out of range
pub fn generate_roughness_map(
    luminance: &ScalarField,
    params: RoughnessParameters,
) -> Result<ScalarField> {
    params.validate()?;

    let curvature = laplacian(luminance).map(f32::abs);
    let base = luminance.zip_map(&curvature, |l, c| CURVATURE_WEIGHT.mul_add(c, l));

    Ok(base.map(|v| roughness_curve(v, params)).clamped())
}
