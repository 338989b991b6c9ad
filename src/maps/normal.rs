//! Tangent-space normal map generation
//!
//! Fine gradients come straight from luminance and capture pores and grain;
//! shape gradients come from a blurred copy and capture broad slopes. The two
//! are blended per axis before the vector is built.

use crate::filters::{gaussian_blur, sobel};
use crate::io::configuration::{
    DEFAULT_DETAIL_WEIGHT, DEFAULT_NORMAL_STRENGTH, DEFAULT_SHAPE_WEIGHT, FINE_GRADIENT_KERNEL,
    NORMAL_EPSILON, NORMAL_VISIBILITY_BOOST, SHAPE_BLUR_KERNEL, SHAPE_GRADIENT_KERNEL,
};
use crate::io::error::Result;
use crate::maps::ensure_non_negative;
use crate::raster::{ScalarField, Vector3Field};

/// Normal generator configuration
///
/// The two weights need not sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalParameters {
    /// Weight of the fine gradient
    pub detail_weight: f32,
    /// Weight of the broad-shape gradient
    pub shape_weight: f32,
    /// Global relief strength
    pub strength: f32,
}

impl Default for NormalParameters {
    fn default() -> Self {
        Self {
            detail_weight: DEFAULT_DETAIL_WEIGHT,
            shape_weight: DEFAULT_SHAPE_WEIGHT,
            strength: DEFAULT_NORMAL_STRENGTH,
        }
    }
}

impl NormalParameters {
    /// Check every field against its accepted range
    ///
    /// # Errors
    ///
    /// Returns an error if any field is negative or not finite
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("detail_weight", self.detail_weight)?;
        ensure_non_negative("shape_weight", self.shape_weight)?;
        ensure_non_negative("normal_strength", self.strength)
    }
}

/// Derive an encoded normal field from luminance
///
/// Brighter regions read as raised toward the viewer. A field with no
/// gradient anywhere encodes to exactly `(0.5, 0.5, 1.0)`.
///
/// # Errors
///
/// Returns an error if the parameters are out of range
pub fn generate_normal_map(luminance: &ScalarField, params: NormalParameters) -> Result<Vector3Field> {
    params.validate()?;

    let fine = sobel(luminance, FINE_GRADIENT_KERNEL)?;
    let blurred = gaussian_blur(luminance, SHAPE_BLUR_KERNEL)?;
    let shape = sobel(&blurred, SHAPE_GRADIENT_KERNEL)?;

    let NormalParameters {
        detail_weight,
        shape_weight,
        strength,
    } = params;
    let scale = -strength * NORMAL_VISIBILITY_BOOST;
    let blend = |fine_axis: &ScalarField, shape_axis: &ScalarField| {
        fine_axis.zip_map(shape_axis, |f, s| f.mul_add(detail_weight, s * shape_weight) * scale)
    };

    let x = blend(&fine.gx, &shape.gx);
    let y = blend(&fine.gy, &shape.gy);
    let z = ScalarField::filled(luminance.width(), luminance.height(), 1.0);

    Ok(Vector3Field::from_components(&x, &y, &z, NORMAL_EPSILON))
}
