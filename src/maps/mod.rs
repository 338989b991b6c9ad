//! Map generators: each takes read-only input and returns a new raster

/// Lighting removal for the base color map
pub mod albedo;
/// Height/displacement from luminance
pub mod height;
/// Tangent-space normals by frequency-separated gradients
pub mod normal;
/// Multi-scale valley detection for ambient occlusion
pub mod occlusion;
/// Curvature-augmented roughness curve
pub mod roughness;

pub use albedo::{DelightParameters, delight_albedo};
pub use height::{HeightParameters, generate_height_map};
pub use normal::{NormalParameters, generate_normal_map};
pub use occlusion::{OcclusionParameters, generate_ao_map};
pub use roughness::{RoughnessParameters, generate_roughness_map};

use crate::io::error::{Result, invalid_parameter};

pub(crate) fn ensure_range(parameter: &'static str, value: f32, min: f32, max: f32) -> Result<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be a finite value in [{min}, {max}]"),
        ))
    }
}

pub(crate) fn ensure_non_negative(parameter: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"must be finite and non-negative",
        ))
    }
}
