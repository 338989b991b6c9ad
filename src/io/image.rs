//! Image decoding and encoding at the pipeline boundary

use crate::io::error::{Result, TextureError, WithPath};
use crate::raster::{Quantize, RgbRaster};
use image::ImageFormat;
use std::path::Path;

/// Encoding used for every map written by one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Lossless PNG
    #[default]
    Png,
    /// Baseline JPEG
    Jpeg,
    /// Truevision TGA
    Tga,
    /// Windows bitmap
    Bmp,
}

impl OutputFormat {
    /// File extension without the leading dot
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Tga => "tga",
            Self::Bmp => "bmp",
        }
    }

    /// Encoder selector for the `image` crate
    pub const fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Tga => ImageFormat::Tga,
            Self::Bmp => ImageFormat::Bmp,
        }
    }
}

/// Decode an image file into a normalized RGB raster
///
/// Alpha, if present, is discarded.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist or is not a regular file
/// - The file cannot be read or decoded as an image
pub fn load_rgb(path: &Path) -> Result<RgbRaster> {
    if !path.is_file() {
        return Err(TextureError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let decoded = image::open(path).with_path(path)?;

    Ok(RgbRaster::from_dynamic(&decoded))
}

/// Quantize a raster and write it to `path`
///
/// # Errors
///
/// Returns an error if the image cannot be encoded or written
pub fn save_raster(raster: &dyn Quantize, path: &Path, format: OutputFormat) -> Result<()> {
    raster
        .quantize()
        .save_with_format(path, format.image_format())
        .map_err(|e| TextureError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Create `dir` and any missing parents
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn ensure_directory(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| TextureError::FileSystem {
        path: dir.to_path_buf(),
        operation: "create directory",
        source: e,
    })
}
