//! Sobel gradient operator
//!
//! Each derivative is a separable product of a smoothing kernel across the
//! derivative axis and a central-difference kernel along it. Responses are
//! unnormalized: a unit ramp gives 8 with the 3-tap kernel and 128 with the
//! 5-tap kernel.

use crate::filters::kernel::{Kernel1D, correlate_axis};
use crate::io::error::{Result, invalid_kernel};
use crate::raster::ScalarField;
use ndarray::Axis;

/// Horizontal and vertical first derivatives of a field
#[derive(Debug, Clone, PartialEq)]
pub struct GradientPair {
    /// Positive where values increase to the right
    pub gx: ScalarField,
    /// Positive where values increase downward
    pub gy: ScalarField,
}

fn kernels(size: usize) -> Result<(Kernel1D, Kernel1D)> {
    match size {
        3 => Ok((
            Kernel1D::symmetric(2.0, vec![1.0]),
            Kernel1D::antisymmetric(vec![1.0]),
        )),
        5 => Ok((
            Kernel1D::symmetric(6.0, vec![4.0, 1.0]),
            Kernel1D::antisymmetric(vec![2.0, 1.0]),
        )),
        _ => Err(invalid_kernel("sobel gradient", size, "extent must be 3 or 5")),
    }
}

/// Approximate both partial derivatives with a `size` × `size` Sobel operator
///
/// # Errors
///
/// Returns an error if `size` is not 3 or 5
pub fn sobel(field: &ScalarField, size: usize) -> Result<GradientPair> {
    let (smooth, derive) = kernels(size)?;
    let data = field.data();

    let smoothed_vertically = correlate_axis(data, &smooth, Axis(0));
    let gx = correlate_axis(&smoothed_vertically, &derive, Axis(1));

    let smoothed_horizontally = correlate_axis(data, &smooth, Axis(1));
    let gy = correlate_axis(&smoothed_horizontally, &derive, Axis(0));

    Ok(GradientPair {
        gx: ScalarField::new(gx),
        gy: ScalarField::new(gy),
    })
}
