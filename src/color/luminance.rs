//! RGB to perceptual luminance

use crate::raster::{RgbRaster, ScalarField, lane_pixel};
use ndarray::{Array2, Axis, Zip};

/// Rec. 601 luma weights for red, green and blue
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Luminance of a single normalized RGB pixel
pub fn luminance_of([r, g, b]: [f32; 3]) -> f32 {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    wb.mul_add(b, wr.mul_add(r, wg * g))
}

/// Collapse an RGB raster into a single-channel luminance field
pub fn luminance(rgb: &RgbRaster) -> ScalarField {
    let mut out = Array2::zeros((rgb.height(), rgb.width()));
    Zip::from(&mut out)
        .and(rgb.data().lanes(Axis(2)))
        .for_each(|y, px| *y = luminance_of(lane_pixel(&px)));
    ScalarField::new(out)
}
