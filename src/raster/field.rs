//! Single-channel scalar field backed by a row-major `Array2<f32>`

use crate::io::error::{Result, TextureError};
use crate::raster::{Quantize, quantize_sample};
use image::{DynamicImage, GrayImage, Luma};
use ndarray::{Array2, Zip};

/// A width × height grid of `f32` samples, indexed `[row, col]`
///
/// Luminance, curvature, gradients and the scalar output maps all use this
/// type. Samples are not required to lie in [0, 1]; generators clamp their
/// final output.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    data: Array2<f32>,
}

impl ScalarField {
    /// Wrap an existing array of shape (height, width)
    pub const fn new(data: Array2<f32>) -> Self {
        Self { data }
    }

    /// Create a field where every sample holds `value`
    pub fn filled(width: usize, height: usize, value: f32) -> Self {
        Self {
            data: Array2::from_elem((height, width), value),
        }
    }

    /// Build a field from row-major samples
    ///
    /// # Errors
    ///
    /// Returns an error if `samples.len()` differs from `width * height`
    pub fn from_vec(width: usize, height: usize, samples: Vec<f32>) -> Result<Self> {
        let actual = samples.len();
        Array2::from_shape_vec((height, width), samples)
            .map(Self::new)
            .map_err(|_shape_error| TextureError::DimensionMismatch {
                operation: "scalar field construction",
                expected: format!("{} samples ({width}x{height})", width * height),
                actual: format!("{actual} samples"),
            })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Shared view of the underlying array
    pub const fn data(&self) -> &Array2<f32> {
        &self.data
    }

    /// Sample at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        self.data.get([y, x]).copied()
    }

    /// Arithmetic mean of all samples, zero for an empty field
    ///
    /// Accumulates in `f64` so a constant field averages to exactly its value.
    pub fn mean(&self) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        let total: f64 = self.data.iter().map(|&v| f64::from(v)).sum();
        (total / self.data.len() as f64) as f32
    }

    /// Apply `f` to every sample, producing a new field
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            data: self.data.mapv(f),
        }
    }

    /// Combine two fields of identical shape sample by sample
    ///
    /// Both fields must come from the same source raster; shapes are equal by
    /// construction everywhere inside the pipeline.
    pub fn zip_map(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self {
            data: Zip::from(&self.data)
                .and(&other.data)
                .map_collect(|&a, &b| f(a, b)),
        }
    }

    /// Copy with every sample clamped to [0, 1]
    pub fn clamped(&self) -> Self {
        self.map(|v| num_traits::clamp(v, 0.0, 1.0))
    }

    /// Whether both fields describe the same grid
    pub fn same_shape(&self, other: &Self) -> bool {
        self.data.dim() == other.data.dim()
    }
}

impl Quantize for ScalarField {
    fn channel_count(&self) -> usize {
        1
    }

    fn quantize(&self) -> DynamicImage {
        let mut image = GrayImage::new(self.width() as u32, self.height() as u32);
        for ((row, col), &value) in self.data.indexed_iter() {
            image.put_pixel(col as u32, row as u32, Luma([quantize_sample(value)]));
        }
        DynamicImage::ImageLuma8(image)
    }
}
