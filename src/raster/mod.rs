//! Normalized raster types and the quantization boundary
//!
//! All computation happens on `f32` samples in the normalized range. Rasters
//! become 8-bit images only through [`Quantize`], at the save step.

/// Single-channel scalar fields
pub mod field;
/// Three-channel color rasters
pub mod rgb;
/// Encoded unit-vector fields
pub mod vector;

pub use field::ScalarField;
pub use rgb::RgbRaster;
pub use vector::Vector3Field;

use image::DynamicImage;
use ndarray::ArrayView1;

/// Conversion from a normalized raster to its 8-bit representation
pub trait Quantize {
    /// Number of channels in the quantized image
    fn channel_count(&self) -> usize;

    /// Clamp every sample to [0, 1] and scale to 8 bits
    fn quantize(&self) -> DynamicImage;
}

/// Clamp a normalized sample and scale it to the 8-bit range
pub fn quantize_sample(value: f32) -> u8 {
    (num_traits::clamp(value, 0.0, 1.0) * 255.0).round() as u8
}

/// Copy a channel lane into a pixel, reading absent channels as zero
pub(crate) fn lane_pixel(lane: &ArrayView1<'_, f32>) -> [f32; 3] {
    [0, 1, 2].map(|c| lane.get(c).copied().unwrap_or(0.0))
}

/// Map an 8-bit sample into the normalized range
pub fn dequantize_sample(value: u8) -> f32 {
    f32::from(value) / 255.0
}
