//! One-dimensional kernels applied along a single axis of a 2-D array
//!
//! Kernels are stored as a centre weight plus one side. Symmetric kernels
//! sum mirrored pairs before weighting and antisymmetric kernels subtract
//! them, so a constant line produces an exactly constant (or exactly zero)
//! response.

use crate::filters::border::index_table;
use ndarray::{Array2, Axis, Zip};

/// Mirror relationship between the two sides of a kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// `w[-i] == w[i]`
    Symmetric,
    /// `w[-i] == -w[i]`, centre weight zero
    Antisymmetric,
}

/// Odd-length 1-D correlation kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel1D {
    center: f64,
    side: Vec<f64>,
    parity: Parity,
}

impl Kernel1D {
    /// Symmetric kernel from its centre weight and right-hand side
    pub const fn symmetric(center: f64, side: Vec<f64>) -> Self {
        Self {
            center,
            side,
            parity: Parity::Symmetric,
        }
    }

    /// Antisymmetric kernel from its right-hand side
    pub const fn antisymmetric(side: Vec<f64>) -> Self {
        Self {
            center: 0.0,
            side,
            parity: Parity::Antisymmetric,
        }
    }

    /// Number of samples on each side of the centre
    pub fn radius(&self) -> usize {
        self.side.len()
    }

    /// Full kernel extent
    pub fn size(&self) -> usize {
        2 * self.radius() + 1
    }

    /// Weights from leftmost to rightmost tap
    pub fn weights(&self) -> Vec<f64> {
        let sign = match self.parity {
            Parity::Symmetric => 1.0,
            Parity::Antisymmetric => -1.0,
        };
        self.side
            .iter()
            .rev()
            .map(|w| w * sign)
            .chain(std::iter::once(self.center))
            .chain(self.side.iter().copied())
            .collect()
    }

    // `centre` is a position in the padded table
    fn respond(&self, line: &[f32], table: &[usize], centre: usize) -> f32 {
        let sample = |position: usize| -> f64 {
            table
                .get(position)
                .and_then(|&source| line.get(source))
                .map_or(0.0, |&v| f64::from(v))
        };

        let mut acc = self.center * sample(centre);
        for (offset, weight) in self.side.iter().enumerate() {
            let step = offset + 1;
            let right = sample(centre + step);
            let left = sample(centre - step);
            acc += match self.parity {
                Parity::Symmetric => weight * (right + left),
                Parity::Antisymmetric => weight * (right - left),
            };
        }
        acc as f32
    }
}

/// Correlate every lane running along `axis` with `kernel`
///
/// `Axis(1)` filters horizontally (along rows), `Axis(0)` vertically.
pub fn correlate_axis(data: &Array2<f32>, kernel: &Kernel1D, axis: Axis) -> Array2<f32> {
    let len = data.len_of(axis);
    let radius = kernel.radius();
    let table = index_table(len, radius);
    let mut out = Array2::zeros(data.raw_dim());
    let mut line = Vec::with_capacity(len);

    Zip::from(out.lanes_mut(axis))
        .and(data.lanes(axis))
        .for_each(|mut dst, src| {
            line.clear();
            line.extend(src.iter().copied());
            for (i, value) in dst.iter_mut().enumerate() {
                *value = kernel.respond(&line, &table, i + radius);
            }
        });

    out
}
