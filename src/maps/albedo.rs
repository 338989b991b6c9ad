//! Albedo delighting
//!
//! Baked lighting shows up as a low-frequency trend in lightness. Dividing
//! lightness by a heavily blurred copy of itself flattens that trend while
//! leaving chrominance untouched.

use crate::color::{lab_to_rgb, rgb_to_lab};
use crate::filters::{gaussian_blur, odd_kernel_size};
use crate::io::configuration::{
    DEFAULT_SHADOW_STRENGTH, LIGHTING_EPSILON, LIGHTING_KERNEL_FRACTION,
};
use crate::io::error::Result;
use crate::maps::ensure_range;
use crate::raster::RgbRaster;

/// Delighting configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelightParameters {
    /// Blend toward the flattened lightness: 0 leaves the image unchanged, 1 fully flattens
    pub shadow_strength: f32,
}

impl Default for DelightParameters {
    fn default() -> Self {
        Self {
            shadow_strength: DEFAULT_SHADOW_STRENGTH,
        }
    }
}

impl DelightParameters {
    /// Check every field against its accepted range
    ///
    /// # Errors
    ///
    /// Returns an error if `shadow_strength` is not a finite value in [0, 1]
    pub fn validate(&self) -> Result<()> {
        ensure_range("shadow_strength", self.shadow_strength, 0.0, 1.0)
    }
}

/// Kernel extent for the lighting field: 5% of the shorter side, forced odd
pub fn lighting_kernel_size(width: usize, height: usize) -> usize {
    odd_kernel_size(width.min(height) as f32 * LIGHTING_KERNEL_FRACTION)
}

/// Remove baked directional lighting from an RGB raster
///
/// # Errors
///
/// Returns an error if the parameters are out of range or the lighting
/// kernel would exceed the supported extent
pub fn delight_albedo(rgb: &RgbRaster, params: DelightParameters) -> Result<RgbRaster> {
    params.validate()?;

    let lab = rgb_to_lab(rgb);
    let kernel = lighting_kernel_size(rgb.width(), rgb.height());
    let lighting = gaussian_blur(&lab.lightness, kernel)?;
    let mean = lab.lightness.mean();

    let flattened = lab
        .lightness
        .zip_map(&lighting, |l, light| l / (light + LIGHTING_EPSILON) * mean);

    let s = params.shadow_strength;
    let blended = lab
        .lightness
        .zip_map(&flattened, |original, flat| original.mul_add(1.0 - s, flat * s));

    let delighted = lab_to_rgb(&lab.with_lightness(blended)?)?;
    Ok(delighted.clamped())
}
