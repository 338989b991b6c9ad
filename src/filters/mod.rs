//! Spatial filter primitives over scalar fields
//!
//! Every kernel reads outside the image through the same reflect-101 border
//! policy, see [`border`].

/// Border handling shared by all kernels
pub mod border;
/// Gaussian low-pass filtering and kernel sizing
pub mod gaussian;
/// First-derivative edge operators
pub mod gradient;
/// One-dimensional separable kernels
pub mod kernel;
/// Second-derivative curvature operator
pub mod laplacian;

pub use gaussian::{gaussian_blur, odd_kernel_size};
pub use gradient::{GradientPair, sobel};
pub use laplacian::laplacian;
