//! Three-channel color raster backed by an `Array3<f32>` of shape (height, width, 3)

use crate::io::error::{Result, TextureError};
use crate::raster::{Quantize, ScalarField, dequantize_sample, lane_pixel, quantize_sample};
use image::{DynamicImage, Rgb, RgbImage};
use ndarray::{Array3, Axis, Zip};

/// Normalized RGB raster
#[derive(Debug, Clone, PartialEq)]
pub struct RgbRaster {
    data: Array3<f32>,
}

impl RgbRaster {
    /// Wrap an existing array of shape (height, width, 3)
    ///
    /// # Errors
    ///
    /// Returns an error if the last axis does not hold exactly three channels
    pub fn new(data: Array3<f32>) -> Result<Self> {
        let channels = data.len_of(Axis(2));
        if channels != 3 {
            return Err(TextureError::DimensionMismatch {
                operation: "rgb raster construction",
                expected: "3 channels".to_string(),
                actual: format!("{channels} channels"),
            });
        }
        Ok(Self { data })
    }

    // Callers guarantee the trailing axis has length 3
    pub(crate) const fn from_trusted(data: Array3<f32>) -> Self {
        Self { data }
    }

    /// Create a raster where every pixel holds `color`
    pub fn filled(width: usize, height: usize, color: [f32; 3]) -> Self {
        Self {
            data: Array3::from_shape_fn((height, width, 3), |(_, _, c)| {
                color.get(c).copied().unwrap_or(0.0)
            }),
        }
    }

    /// Build a raster from interleaved row-major RGB samples
    ///
    /// # Errors
    ///
    /// Returns an error if `samples.len()` differs from `width * height * 3`
    pub fn from_vec(width: usize, height: usize, samples: Vec<f32>) -> Result<Self> {
        let actual = samples.len();
        Array3::from_shape_vec((height, width, 3), samples)
            .map(|data| Self { data })
            .map_err(|_shape_error| TextureError::DimensionMismatch {
                operation: "rgb raster construction",
                expected: format!("{} samples ({width}x{height}x3)", width * height * 3),
                actual: format!("{actual} samples"),
            })
    }

    /// Normalize an 8-bit RGB image
    pub fn from_rgb8(image: &RgbImage) -> Self {
        let (width, height) = image.dimensions();
        let data = Array3::from_shape_fn((height as usize, width as usize, 3), |(row, col, c)| {
            let Rgb(channels) = *image.get_pixel(col as u32, row as u32);
            dequantize_sample(channels.get(c).copied().unwrap_or(0))
        });
        Self { data }
    }

    /// Normalize any decoded image, discarding alpha
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        Self::from_rgb8(&image.to_rgb8())
    }

    /// Assemble a raster from three equally shaped channel fields
    ///
    /// # Errors
    ///
    /// Returns an error if the channel fields differ in shape
    pub fn from_channels(red: &ScalarField, green: &ScalarField, blue: &ScalarField) -> Result<Self> {
        if !red.same_shape(green) || !red.same_shape(blue) {
            return Err(TextureError::DimensionMismatch {
                operation: "rgb channel merge",
                expected: format!("{}x{}", red.width(), red.height()),
                actual: format!(
                    "{}x{} and {}x{}",
                    green.width(),
                    green.height(),
                    blue.width(),
                    blue.height()
                ),
            });
        }

        let mut data = Array3::zeros((red.height(), red.width(), 3));
        for (c, source) in [red, green, blue].into_iter().enumerate() {
            data.index_axis_mut(Axis(2), c).assign(source.data());
        }
        Ok(Self { data })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.data.len_of(Axis(1))
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    /// Shared view of the underlying array
    pub const fn data(&self) -> &Array3<f32> {
        &self.data
    }

    /// Split into red, green and blue fields
    pub fn channels(&self) -> [ScalarField; 3] {
        [0, 1, 2].map(|c| ScalarField::new(self.data.index_axis(Axis(2), c).to_owned()))
    }

    /// Pixel at column `x`, row `y`
    pub fn pixel(&self, x: usize, y: usize) -> Option<[f32; 3]> {
        Some([
            *self.data.get([y, x, 0])?,
            *self.data.get([y, x, 1])?,
            *self.data.get([y, x, 2])?,
        ])
    }

    /// Apply `f` to every pixel, producing a new raster
    pub fn map_pixels(&self, f: impl Fn([f32; 3]) -> [f32; 3]) -> Self {
        let mut data = Array3::zeros(self.data.raw_dim());
        Zip::from(data.lanes_mut(Axis(2)))
            .and(self.data.lanes(Axis(2)))
            .for_each(|mut out, input| {
                let mapped = f(lane_pixel(&input));
                out.iter_mut().zip(mapped).for_each(|(o, v)| *o = v);
            });
        Self { data }
    }

    /// Copy with every sample clamped to [0, 1]
    pub fn clamped(&self) -> Self {
        Self {
            data: self.data.mapv(|v| num_traits::clamp(v, 0.0, 1.0)),
        }
    }
}

impl Quantize for RgbRaster {
    fn channel_count(&self) -> usize {
        3
    }

    fn quantize(&self) -> DynamicImage {
        let mut image = RgbImage::new(self.width() as u32, self.height() as u32);
        for (row, line) in self.data.outer_iter().enumerate() {
            for (col, px) in line.outer_iter().enumerate() {
                image.put_pixel(
                    col as u32,
                    row as u32,
                    Rgb(lane_pixel(&px).map(quantize_sample)),
                );
            }
        }
        DynamicImage::ImageRgb8(image)
    }
}
