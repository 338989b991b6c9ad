//! Gaussian low-pass filtering
//!
//! The standard deviation is derived from the kernel extent as
//! `σ = 0.3 · ((k − 1) · 0.5 − 1) + 0.8`. Extents up to seven taps use the
//! fixed binomial-like tables conventional for small Gaussian kernels.

use crate::filters::kernel::{Kernel1D, correlate_axis};
use crate::io::configuration::MAX_KERNEL_SIZE;
use crate::io::error::{Result, invalid_kernel};
use crate::raster::ScalarField;
use ndarray::Axis;
use num_traits::Float;

const SMALL_KERNELS: [&[f64]; 4] = [
    &[1.0],
    &[0.25, 0.5, 0.25],
    &[0.0625, 0.25, 0.375, 0.25, 0.0625],
    &[
        0.031_25, 0.109_375, 0.218_75, 0.281_25, 0.218_75, 0.109_375, 0.031_25,
    ],
];

/// Truncate a non-negative extent and force it odd (`⌊extent⌋ | 1`)
///
/// Negative and non-finite extents collapse to the identity kernel.
pub fn odd_kernel_size<T: Float>(extent: T) -> usize {
    extent.floor().to_usize().unwrap_or(0) | 1
}

/// Standard deviation implied by a kernel extent
pub fn gaussian_sigma(size: usize) -> f64 {
    0.3f64.mul_add((size as f64 - 1.0).mul_add(0.5, -1.0), 0.8)
}

fn validate(size: usize) -> Result<()> {
    if size % 2 == 0 {
        return Err(invalid_kernel("gaussian blur", size, "extent must be odd"));
    }
    if size > MAX_KERNEL_SIZE {
        return Err(invalid_kernel(
            "gaussian blur",
            size,
            "extent exceeds the supported maximum",
        ));
    }
    Ok(())
}

/// Normalized 1-D Gaussian weights of odd extent `size`
///
/// # Errors
///
/// Returns an error if `size` is even or larger than [`MAX_KERNEL_SIZE`]
pub fn gaussian_weights(size: usize) -> Result<Vec<f64>> {
    validate(size)?;

    if let Some(table) = SMALL_KERNELS.get(size / 2) {
        return Ok(table.to_vec());
    }

    let sigma = gaussian_sigma(size);
    let scale = -0.5 / (sigma * sigma);
    let centre = (size / 2) as f64;
    let raw: Vec<f64> = (0..size)
        .map(|i| {
            let d = i as f64 - centre;
            (scale * d * d).exp()
        })
        .collect();
    let total: f64 = raw.iter().sum();
    Ok(raw.into_iter().map(|w| w / total).collect())
}

fn gaussian_kernel(size: usize) -> Result<Kernel1D> {
    let weights = gaussian_weights(size)?;
    let radius = size / 2;
    let center = weights.get(radius).copied().unwrap_or(1.0);
    let side = weights.get(radius + 1..).map(<[f64]>::to_vec).unwrap_or_default();
    Ok(Kernel1D::symmetric(center, side))
}

/// Blur with a `size` × `size` Gaussian, applied separably
///
/// A 1-tap kernel returns an exact copy.
///
/// # Errors
///
/// Returns an error if `size` is even or larger than [`MAX_KERNEL_SIZE`]
pub fn gaussian_blur(field: &ScalarField, size: usize) -> Result<ScalarField> {
    let kernel = gaussian_kernel(size)?;
    if kernel.radius() == 0 {
        return Ok(field.clone());
    }
    let rows = correlate_axis(field.data(), &kernel, Axis(1));
    Ok(ScalarField::new(correlate_axis(&rows, &kernel, Axis(0))))
}
