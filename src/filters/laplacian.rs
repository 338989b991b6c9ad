//! Discrete Laplacian with the 4-neighbour kernel `[[0,1,0],[1,-4,1],[0,1,0]]`

use crate::filters::kernel::{Kernel1D, correlate_axis};
use crate::raster::ScalarField;
use ndarray::Axis;

/// Second-derivative response, the sum of `[1, -2, 1]` along both axes
pub fn laplacian(field: &ScalarField) -> ScalarField {
    let second = Kernel1D::symmetric(-2.0, vec![1.0]);
    let dxx = correlate_axis(field.data(), &second, Axis(1));
    let dyy = correlate_axis(field.data(), &second, Axis(0));
    ScalarField::new(dxx + dyy)
}
