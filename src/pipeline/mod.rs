//! One synchronous run from source image to five written maps

/// Aggregated generator configuration
pub mod config;
/// The immutable set of generated maps
pub mod map_set;
/// Output naming and suffix parsing
pub mod naming;
/// Stage sequencing, decoding and saving
pub mod orchestrator;
/// Stage identifiers and observation hooks
pub mod stage;

pub use config::PipelineConfig;
pub use map_set::GeneratedMapSet;
pub use naming::{MapKind, MaterialRole};
pub use orchestrator::{OutputManifest, generate_maps, process_image};
pub use stage::{SilentObserver, Stage, StageObserver};
