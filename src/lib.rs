//! Deterministic derivation of a PBR texture set from a single source image
//!
//! One RGB raster becomes five maps: a delighted albedo, a tangent-space
//! normal map, roughness, ambient occlusion and height. Every step is a pure
//! image filter over normalized `f32` rasters; quantization to 8 bits happens
//! only when maps are written.

#![forbid(unsafe_code)]

/// sRGB, luminance and L*a*b* conversions
pub mod color;
/// Gaussian, gradient and Laplacian primitives with a shared border policy
pub mod filters;
/// Input/output operations, configuration and error handling
pub mod io;
/// Albedo, normal, roughness, occlusion and height generators
pub mod maps;
/// Stage sequencing, output naming and the generated map set
pub mod pipeline;
/// Normalized raster types and quantization
pub mod raster;

pub use io::error::{ErrorKind, Result, TextureError};
pub use pipeline::{GeneratedMapSet, MapKind, PipelineConfig, generate_maps, process_image};
