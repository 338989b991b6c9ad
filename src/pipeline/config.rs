//! Per-run configuration covering all five generators

use crate::io::error::Result;
use crate::maps::{
    DelightParameters, HeightParameters, NormalParameters, OcclusionParameters,
    RoughnessParameters,
};

/// Every generator's parameters for one run, passed by value
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PipelineConfig {
    /// Albedo delighting
    pub delight: DelightParameters,
    /// Normal map generation
    pub normal: NormalParameters,
    /// Roughness map generation
    pub roughness: RoughnessParameters,
    /// Ambient occlusion generation
    pub occlusion: OcclusionParameters,
    /// Height map generation
    pub height: HeightParameters,
}

impl PipelineConfig {
    /// Validate every generator's parameters
    ///
    /// Runs before any filter so a bad value never leaves partial work behind.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range parameter found
    pub fn validate(&self) -> Result<()> {
        self.delight.validate()?;
        self.normal.validate()?;
        self.roughness.validate()?;
        self.occlusion.validate()
    }
}
