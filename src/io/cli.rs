//! Command-line interface for deriving a PBR map set from one image

use crate::io::configuration::{
    DEFAULT_AO_RADIUS, DEFAULT_AO_STRENGTH, DEFAULT_DETAIL_WEIGHT, DEFAULT_NORMAL_STRENGTH,
    DEFAULT_ROUGHNESS_BRIGHTNESS, DEFAULT_ROUGHNESS_CONTRAST, DEFAULT_SHADOW_STRENGTH,
    DEFAULT_SHAPE_WEIGHT,
};
use crate::io::error::Result;
use crate::io::image::OutputFormat;
use crate::io::progress::ProgressManager;
use crate::maps::{
    DelightParameters, HeightParameters, NormalParameters, OcclusionParameters,
    RoughnessParameters,
};
use crate::pipeline::orchestrator::{OutputManifest, output_paths, process_image};
use crate::pipeline::{PipelineConfig, SilentObserver};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "pbrmaps")]
#[command(
    author,
    version,
    about = "Derive albedo, normal, roughness, AO and height maps from one image"
)]
/// Command-line arguments for the map generator
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Source image (PNG, JPEG, TGA, ...)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory for the generated maps (defaults to the input's directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Encoding for every written map
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Blend toward fully flattened lighting in the albedo (0 to 1)
    #[arg(long, default_value_t = DEFAULT_SHADOW_STRENGTH)]
    pub shadow_strength: f32,

    /// Global normal relief strength
    #[arg(short = 's', long, default_value_t = DEFAULT_NORMAL_STRENGTH)]
    pub normal_strength: f32,

    /// Weight of fine surface detail in the normal map
    #[arg(long, default_value_t = DEFAULT_DETAIL_WEIGHT)]
    pub detail_weight: f32,

    /// Weight of broad shape in the normal map
    #[arg(long, default_value_t = DEFAULT_SHAPE_WEIGHT)]
    pub shape_weight: f32,

    /// Roughness contrast around mid-gray
    #[arg(long, default_value_t = DEFAULT_ROUGHNESS_CONTRAST)]
    pub roughness_contrast: f32,

    /// Roughness brightness offset (-1 to 1)
    #[arg(long, default_value_t = DEFAULT_ROUGHNESS_BRIGHTNESS, allow_negative_numbers = true)]
    pub roughness_brightness: f32,

    /// Keep bright source pixels rough instead of smooth
    #[arg(long)]
    pub no_roughness_invert: bool,

    /// Ambient occlusion base radius in pixels
    #[arg(long, default_value_t = DEFAULT_AO_RADIUS)]
    pub ao_radius: f32,

    /// Ambient occlusion strength
    #[arg(long, default_value_t = DEFAULT_AO_STRENGTH)]
    pub ao_strength: f32,

    /// Pass luminance straight through as height
    #[arg(long)]
    pub no_height_boost: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Leave the input alone if all five maps already exist
    ///
    /// Existing files are not checked against the current parameters.
    #[arg(short = 'k', long)]
    pub skip_existing: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Directory the maps are written to
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| {
            self.input
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        })
    }

    /// Generator parameters assembled from the flags
    pub const fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            delight: DelightParameters {
                shadow_strength: self.shadow_strength,
            },
            normal: NormalParameters {
                detail_weight: self.detail_weight,
                shape_weight: self.shape_weight,
                strength: self.normal_strength,
            },
            roughness: RoughnessParameters {
                contrast: self.roughness_contrast,
                brightness: self.roughness_brightness,
                invert: !self.no_roughness_invert,
            },
            occlusion: OcclusionParameters {
                radius: self.ao_radius,
                strength: self.ao_strength,
            },
            height: HeightParameters {
                low_frequency_boost: !self.no_height_boost,
            },
        }
    }
}

/// Runs one invocation described by the CLI arguments
pub struct TextureProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl TextureProcessor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Whether every output for the input is already on disk
    ///
    /// # Errors
    ///
    /// Returns an error if the input path has no usable file stem
    pub fn outputs_exist(&self) -> Result<bool> {
        let paths = output_paths(
            &self.cli.input,
            &self.cli.resolved_output_dir(),
            self.cli.format,
        )?;
        Ok(paths.iter().all(|(_, path)| path.exists()))
    }

    /// Generate and write the map set, overwriting earlier output
    ///
    /// With `--skip-existing` a complete set already on disk is left as is.
    ///
    /// Returns the written files, or `None` when the run was skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation, decoding or saving fails
    pub fn process(&mut self) -> Result<Option<OutputManifest>> {
        if self.cli.skip_existing && self.outputs_exist()? {
            info!(input = %self.cli.input.display(), "skipping, all maps exist");
            return Ok(None);
        }

        let start_time = Instant::now();
        let config = self.cli.pipeline_config();
        let output_dir = self.cli.resolved_output_dir();

        let manifest = if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(&self.cli.input);
            let result = process_image(&self.cli.input, &output_dir, &config, self.cli.format, pm);
            pm.finish();
            result?
        } else {
            process_image(
                &self.cli.input,
                &output_dir,
                &config,
                self.cli.format,
                &mut SilentObserver,
            )?
        };

        info!(
            input = %self.cli.input.display(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "generated {} maps",
            manifest.files().len()
        );
        Ok(Some(manifest))
    }
}
