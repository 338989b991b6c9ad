//! Unit-vector field stored in tangent-space encoding

use crate::raster::{Quantize, RgbRaster, ScalarField, lane_pixel};
use image::DynamicImage;
use ndarray::{Array3, Axis, Zip};
use num_traits::Float;

/// Normalize a 3-vector, treating lengths below `epsilon` as `epsilon`
pub fn normalize_guarded<T: Float>(v: [T; 3], epsilon: T) -> [T; 3] {
    let [x, y, z] = v;
    let length = (x * x + y * y + z * z).sqrt().max(epsilon);
    [x / length, y / length, z / length]
}

/// Map a component from [-1, 1] to [0, 1]
pub fn encode_component<T: Float>(value: T) -> T {
    let half = T::one() / (T::one() + T::one());
    value * half + half
}

/// Map a component from [0, 1] back to [-1, 1]
pub fn decode_component<T: Float>(value: T) -> T {
    let two = T::one() + T::one();
    value * two - T::one()
}

/// Per-pixel unit 3-vectors, each component encoded as `v * 0.5 + 0.5`
#[derive(Debug, Clone, PartialEq)]
pub struct Vector3Field {
    encoded: Array3<f32>,
}

impl Vector3Field {
    /// Normalize the raw vectors `(x, y, z)` and encode them
    ///
    /// Zero-length vectors are guarded by `epsilon` and stay finite.
    pub fn from_components(x: &ScalarField, y: &ScalarField, z: &ScalarField, epsilon: f32) -> Self {
        let mut encoded = Array3::zeros((x.height(), x.width(), 3));
        Zip::from(encoded.lanes_mut(Axis(2)))
            .and(x.data())
            .and(y.data())
            .and(z.data())
            .for_each(|mut out, &vx, &vy, &vz| {
                let unit = normalize_guarded([vx, vy, vz], epsilon);
                out.iter_mut()
                    .zip(unit)
                    .for_each(|(o, v)| *o = num_traits::clamp(encode_component(v), 0.0, 1.0));
            });
        Self { encoded }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.encoded.len_of(Axis(1))
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.encoded.len_of(Axis(0))
    }

    /// Encoded components at column `x`, row `y`
    pub fn encoded(&self, x: usize, y: usize) -> Option<[f32; 3]> {
        Some([
            *self.encoded.get([y, x, 0])?,
            *self.encoded.get([y, x, 1])?,
            *self.encoded.get([y, x, 2])?,
        ])
    }

    /// Decoded vector at column `x`, row `y`
    pub fn decoded(&self, x: usize, y: usize) -> Option<[f32; 3]> {
        self.encoded(x, y).map(|v| v.map(decode_component))
    }

    /// Iterate over every decoded vector in row-major order
    pub fn decoded_iter(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.encoded
            .lanes(Axis(2))
            .into_iter()
            .map(|lane| lane_pixel(&lane).map(decode_component))
    }

    /// View the encoded field as an RGB raster
    pub fn to_rgb(&self) -> RgbRaster {
        RgbRaster::from_trusted(self.encoded.clone())
    }
}

impl Quantize for Vector3Field {
    fn channel_count(&self) -> usize {
        3
    }

    fn quantize(&self) -> DynamicImage {
        self.to_rgb().quantize()
    }
}
