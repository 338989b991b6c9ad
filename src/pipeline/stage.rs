//! Pipeline stages and the observer seam used for progress reporting

/// Fixed sequence of work performed by one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Read and normalize the source image
    Decode,
    /// Remove baked lighting for the albedo
    Delight,
    /// Collapse the source to luminance
    Luminance,
    /// Build the normal map
    Normal,
    /// Build the roughness map
    Roughness,
    /// Build the ambient occlusion map
    Occlusion,
    /// Build the height map
    Height,
    /// Write all maps
    Save,
}

impl Stage {
    /// Every stage in execution order
    pub const ALL: [Self; 8] = [
        Self::Decode,
        Self::Delight,
        Self::Luminance,
        Self::Normal,
        Self::Roughness,
        Self::Occlusion,
        Self::Height,
        Self::Save,
    ];

    /// Short human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Decode => "Decoding",
            Self::Delight => "Delighting albedo",
            Self::Luminance => "Deriving luminance",
            Self::Normal => "Generating normals",
            Self::Roughness => "Generating roughness",
            Self::Occlusion => "Generating AO",
            Self::Height => "Generating height",
            Self::Save => "Saving",
        }
    }
}

/// Receives stage boundaries as a run progresses
///
/// Both hooks default to doing nothing.
pub trait StageObserver {
    /// Called immediately before `stage` begins
    fn stage_started(&mut self, _stage: Stage) {}

    /// Called after `stage` completes successfully
    fn stage_finished(&mut self, _stage: Stage) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl StageObserver for SilentObserver {}
