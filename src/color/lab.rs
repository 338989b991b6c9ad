//! sRGB ⇄ CIE L*a*b* (D65 white point)
//!
//! Lightness spans [0, 100]; `a` and `b` are unbounded chrominance axes.
//! Per-pixel arithmetic runs in `f64` so an unmodified round trip returns
//! the input to within 1e-4.

use crate::io::error::{Result, TextureError};
use crate::raster::{RgbRaster, ScalarField};

const XN: f64 = 0.950_456;
const ZN: f64 = 1.088_754;

const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.412_453, 0.357_580, 0.180_423],
    [0.212_671, 0.715_160, 0.072_169],
    [0.019_334, 0.119_193, 0.950_227],
];

const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.240_479, -1.537_150, -0.498_535],
    [-0.969_256, 1.875_991, 0.041_556],
    [0.055_648, -0.204_043, 1.057_311],
];

// CIE linear-segment threshold and its cube root
const EPSILON: f64 = 0.008_856;
const EPSILON_CBRT: f64 = 0.206_893;
const KAPPA: f64 = 903.3;
const SLOPE: f64 = 7.787;
const OFFSET: f64 = 16.0 / 116.0;

/// Lightness and chrominance planes of an image
#[derive(Debug, Clone, PartialEq)]
pub struct LabRaster {
    /// L* in [0, 100]
    pub lightness: ScalarField,
    /// Green–red axis
    pub a: ScalarField,
    /// Blue–yellow axis
    pub b: ScalarField,
}

impl LabRaster {
    /// Replace the lightness plane, keeping chrominance
    ///
    /// # Errors
    ///
    /// Returns an error if the new plane differs in shape
    pub fn with_lightness(self, lightness: ScalarField) -> Result<Self> {
        if !lightness.same_shape(&self.lightness) {
            return Err(TextureError::DimensionMismatch {
                operation: "lab lightness replacement",
                expected: format!("{}x{}", self.lightness.width(), self.lightness.height()),
                actual: format!("{}x{}", lightness.width(), lightness.height()),
            });
        }
        Ok(Self { lightness, ..self })
    }
}

fn srgb_decode(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn srgb_encode(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        SLOPE.mul_add(t, OFFSET)
    }
}

fn lab_f_inverse(f: f64) -> f64 {
    if f > EPSILON_CBRT {
        f * f * f
    } else {
        (f - OFFSET) / SLOPE
    }
}

fn mat_mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    let [x, y, z] = v;
    m.map(|[a, b, c]| a.mul_add(x, b.mul_add(y, c * z)))
}

/// Convert one normalized sRGB pixel to L*a*b*
pub fn srgb_to_lab(rgb: [f32; 3]) -> [f32; 3] {
    let linear = rgb.map(|c| srgb_decode(f64::from(c)));
    let [x, y, z] = mat_mul(&RGB_TO_XYZ, linear);
    let (fx, fy, fz) = (lab_f(x / XN), lab_f(y), lab_f(z / ZN));

    let lightness = if y > EPSILON {
        116.0f64.mul_add(fy, -16.0)
    } else {
        KAPPA * y
    };
    [
        lightness as f32,
        (500.0 * (fx - fy)) as f32,
        (200.0 * (fy - fz)) as f32,
    ]
}

/// Convert one L*a*b* pixel back to normalized sRGB, unclamped
pub fn lab_to_srgb([l, a, b]: [f32; 3]) -> [f32; 3] {
    let (l, a, b) = (f64::from(l), f64::from(a), f64::from(b));
    let y = if l > KAPPA * EPSILON {
        let fy = (l + 16.0) / 116.0;
        fy * fy * fy
    } else {
        l / KAPPA
    };
    let fy = lab_f(y);
    let x = lab_f_inverse(a / 500.0 + fy) * XN;
    let z = lab_f_inverse(fy - b / 200.0) * ZN;

    mat_mul(&XYZ_TO_RGB, [x, y, z]).map(|c| srgb_encode(c) as f32)
}

/// Split an RGB raster into lightness and chrominance planes
pub fn rgb_to_lab(rgb: &RgbRaster) -> LabRaster {
    let [lightness, a, b] = rgb.map_pixels(srgb_to_lab).channels();
    LabRaster { lightness, a, b }
}

/// Recombine lightness and chrominance into an unclamped RGB raster
///
/// # Errors
///
/// Returns an error if the three planes differ in shape
pub fn lab_to_rgb(lab: &LabRaster) -> Result<RgbRaster> {
    RgbRaster::from_channels(&lab.lightness, &lab.a, &lab.b).map(|packed| packed.map_pixels(lab_to_srgb))
}
