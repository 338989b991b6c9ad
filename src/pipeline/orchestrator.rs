//! Sequencing of one pipeline run
//!
//! The order is fixed: decode, delight the original RGB, derive luminance
//! from the original RGB, derive the four data maps from that luminance, then
//! save. All maps are computed in memory before the first file is written, so
//! a decode or configuration failure leaves no output behind.

use crate::color::luminance;
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{OutputFormat, ensure_directory, load_rgb, save_raster};
use crate::maps::{
    albedo::lighting_kernel_size, delight_albedo, generate_ao_map, generate_height_map,
    generate_normal_map, generate_roughness_map, occlusion::occlusion_kernel_sizes,
};
use crate::pipeline::config::PipelineConfig;
use crate::pipeline::map_set::GeneratedMapSet;
use crate::pipeline::naming::MapKind;
use crate::pipeline::stage::{Stage, StageObserver};
use crate::raster::RgbRaster;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Paths written by one run, in save order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputManifest {
    files: Vec<(MapKind, PathBuf)>,
}

impl OutputManifest {
    /// Path written for `kind`
    pub fn path(&self, kind: MapKind) -> Option<&Path> {
        self.files
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, p)| p.as_path())
    }

    /// Every written file paired with its kind
    pub fn files(&self) -> &[(MapKind, PathBuf)] {
        &self.files
    }
}

fn run_stage<T>(
    observer: &mut dyn StageObserver,
    stage: Stage,
    work: impl FnOnce() -> Result<T>,
) -> Result<T> {
    observer.stage_started(stage);
    let output = work()?;
    observer.stage_finished(stage);
    Ok(output)
}

/// Derive the full map set from an already decoded raster
///
/// # Errors
///
/// Returns an error if any parameter in `config` is out of range; nothing is
/// computed in that case
pub fn generate_maps(
    source: &RgbRaster,
    config: &PipelineConfig,
    observer: &mut dyn StageObserver,
) -> Result<GeneratedMapSet> {
    config.validate()?;

    debug!(
        lighting_kernel = lighting_kernel_size(source.width(), source.height()),
        ao_kernels = ?occlusion_kernel_sizes(config.occlusion.radius),
        "kernel extents"
    );

    let albedo = run_stage(observer, Stage::Delight, || {
        delight_albedo(source, config.delight)
    })?;
    let gray = run_stage(observer, Stage::Luminance, || Ok(luminance(source)))?;
    let normal = run_stage(observer, Stage::Normal, || {
        generate_normal_map(&gray, config.normal)
    })?;
    let roughness = run_stage(observer, Stage::Roughness, || {
        generate_roughness_map(&gray, config.roughness)
    })?;
    let ambient_occlusion = run_stage(observer, Stage::Occlusion, || {
        generate_ao_map(&gray, config.occlusion)
    })?;
    let height = run_stage(observer, Stage::Height, || {
        generate_height_map(&gray, config.height)
    })?;

    let maps = GeneratedMapSet::new(albedo, normal, roughness, ambient_occlusion, height);
    let (map_width, map_height) = maps.dimensions();
    debug!(width = map_width, height = map_height, "map set generated");
    Ok(maps)
}

/// Basename used for every output of `input`
///
/// # Errors
///
/// Returns an error if the path has no usable file stem
pub fn output_basename(input: &Path) -> Result<String> {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            invalid_parameter(
                "input",
                &input.display(),
                &"path has no file name to derive output names from",
            )
        })
}

/// The five paths a run on `input` would write
///
/// # Errors
///
/// Returns an error if the input path has no usable file stem
pub fn output_paths(
    input: &Path,
    output_dir: &Path,
    format: OutputFormat,
) -> Result<Vec<(MapKind, PathBuf)>> {
    let basename = output_basename(input)?;
    Ok(MapKind::ALL
        .into_iter()
        .map(|kind| (kind, kind.output_path(output_dir, &basename, format)))
        .collect())
}

/// Write a generated set into `output_dir`
///
/// Files already written stay on disk if a later write fails.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or any map cannot be
/// encoded or written
pub fn save_map_set(
    maps: &GeneratedMapSet,
    basename: &str,
    output_dir: &Path,
    format: OutputFormat,
) -> Result<OutputManifest> {
    ensure_directory(output_dir)?;

    let mut files = Vec::with_capacity(MapKind::ALL.len());
    for (kind, raster) in maps.iter() {
        let path = kind.output_path(output_dir, basename, format);
        save_raster(raster, &path, format)?;
        info!(map = kind.name(), path = %path.display(), "wrote map");
        files.push((kind, path));
    }
    Ok(OutputManifest { files })
}

/// Run the full pipeline on one image file
///
/// # Errors
///
/// Returns an error if:
/// - Any parameter in `config` is out of range (checked first)
/// - The input is missing or cannot be decoded; no file is written
/// - The output directory or any map cannot be written
pub fn process_image(
    input: &Path,
    output_dir: &Path,
    config: &PipelineConfig,
    format: OutputFormat,
    observer: &mut dyn StageObserver,
) -> Result<OutputManifest> {
    config.validate()?;
    let basename = output_basename(input)?;

    let source = run_stage(observer, Stage::Decode, || load_rgb(input))?;
    info!(
        input = %input.display(),
        width = source.width(),
        height = source.height(),
        "decoded source image"
    );

    let maps = generate_maps(&source, config, observer)?;
    drop(source);

    run_stage(observer, Stage::Save, || {
        save_map_set(&maps, &basename, output_dir, format)
    })
}
