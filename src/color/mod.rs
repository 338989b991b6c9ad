//! Color space conversions used by grayscale derivation and delighting

/// CIE L*a*b* conversion for lightness/chrominance separation
pub mod lab;
/// Perceptual luminance
pub mod luminance;

pub use lab::{LabRaster, lab_to_rgb, rgb_to_lab};
pub use luminance::luminance;
