//! Ambient occlusion by multi-scale valley detection
//!
//! Luminance stands in for height. A pixel darker than its blurred
//! neighbourhood sits in a valley; the depth of that valley is summed over
//! three blur scales so both fine crevices and broad depressions darken.

use crate::filters::{gaussian_blur, odd_kernel_size};
use crate::io::configuration::{
    AO_SCALE_RATIOS, DEFAULT_AO_RADIUS, DEFAULT_AO_STRENGTH, MAX_AO_RADIUS,
};
use crate::io::error::{Result, TextureError};
use crate::maps::{ensure_non_negative, ensure_range};
use crate::raster::ScalarField;

/// Occlusion configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OcclusionParameters {
    /// Base sampling radius in pixels
    pub radius: f32,
    /// Darkening per unit of accumulated valley depth
    pub strength: f32,
}

impl Default for OcclusionParameters {
    fn default() -> Self {
        Self {
            radius: DEFAULT_AO_RADIUS,
            strength: DEFAULT_AO_STRENGTH,
        }
    }
}

impl OcclusionParameters {
    /// Check every field against its accepted range
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` lies outside [0, `MAX_AO_RADIUS`] or
    /// `strength` is negative
    pub fn validate(&self) -> Result<()> {
        ensure_range("ao_radius", self.radius, 0.0, MAX_AO_RADIUS)?;
        ensure_non_negative("ao_strength", self.strength)
    }
}

/// Blur extents sampled for a given base radius
pub fn occlusion_kernel_sizes(radius: f32) -> [usize; 3] {
    AO_SCALE_RATIOS.map(|ratio| odd_kernel_size(radius * ratio))
}

/// Derive an ambient occlusion map from luminance
///
/// # Errors
///
/// Returns an error if the parameters are out of range
pub fn generate_ao_map(luminance: &ScalarField, params: OcclusionParameters) -> Result<ScalarField> {
    params.validate()?;

    let empty = ScalarField::filled(luminance.width(), luminance.height(), 0.0);
    let accumulated = occlusion_kernel_sizes(params.radius)
        .into_iter()
        .try_fold(empty, |acc, size| {
            let blurred = gaussian_blur(luminance, size)?;
            let valleys = blurred.zip_map(luminance, |local, value| (local - value).max(0.0));
            Ok::<_, TextureError>(acc.zip_map(&valleys, |a, v| a + v))
        })?;

    let strength = params.strength;
    Ok(accumulated.map(|depth| 1.0 - depth * strength).clamped())
}
