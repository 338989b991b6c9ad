//! Tests for Gaussian kernel sizing, weights and blurring

#[cfg(test)]
mod tests {
    use pbrmaps::ErrorKind;
    use pbrmaps::filters::gaussian::{gaussian_sigma, gaussian_weights};
    use pbrmaps::filters::{gaussian_blur, odd_kernel_size};
    use pbrmaps::raster::ScalarField;

    // Tests extents truncate then force odd
    // Verified by rounding before forcing odd
    #[test]
    fn test_odd_kernel_size() {
        assert_eq!(odd_kernel_size(12.8_f32), 13);
        assert_eq!(odd_kernel_size(10.0_f32), 11);
        assert_eq!(odd_kernel_size(20.0_f32), 21);
        assert_eq!(odd_kernel_size(40.0_f32), 41);
        assert_eq!(odd_kernel_size(7.9_f64), 7);
        assert_eq!(odd_kernel_size(0.4_f32), 1);
    }

    // Tests negative and non-finite extents fall back to the identity kernel
    // Verified by casting negatives through an unsigned wrap
    #[test]
    fn test_odd_kernel_size_degenerate() {
        assert_eq!(odd_kernel_size(-3.0_f32), 1);
        assert_eq!(odd_kernel_size(f32::NAN), 1);
    }

    // Tests sigma formula at a table-free extent
    // Verified by using (k - 1) / 2 directly as sigma
    #[test]
    fn test_sigma_formula() {
        assert!((gaussian_sigma(9) - 1.7).abs() < 1e-12);
        assert!((gaussian_sigma(31) - 5.0).abs() < 1e-12);
    }

    // Tests small extents use the fixed tables
    // Verified by computing all extents from sigma
    #[test]
    fn test_small_kernel_tables() {
        assert_eq!(gaussian_weights(1).unwrap(), vec![1.0]);
        assert_eq!(gaussian_weights(3).unwrap(), vec![0.25, 0.5, 0.25]);
        assert_eq!(
            gaussian_weights(5).unwrap(),
            vec![0.0625, 0.25, 0.375, 0.25, 0.0625]
        );
    }

    // Tests computed weights are normalized, symmetric and peaked at the centre
    // Verified by skipping normalization
    #[test]
    fn test_large_kernel_shape() {
        let weights = gaussian_weights(21).unwrap();
        let total: f64 = weights.iter().sum();

        assert_eq!(weights.len(), 21);
        assert!((total - 1.0).abs() < 1e-12);
        for i in 0..10 {
            assert!((weights[i] - weights[20 - i]).abs() < 1e-15);
            assert!(weights[i] < weights[i + 1]);
        }
    }

    // Tests even and oversized extents are configuration errors
    // Verified by rounding even extents up
    #[test]
    fn test_invalid_extents() {
        assert_eq!(
            gaussian_weights(4).unwrap_err().kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            gaussian_weights(100_001).unwrap_err().kind(),
            ErrorKind::Configuration
        );
        let field = ScalarField::filled(4, 4, 0.0);
        assert!(gaussian_blur(&field, 6).is_err());
    }

    // Tests a constant field survives blurring unchanged
    // Verified by normalizing weights in f32
    #[test]
    fn test_blur_constant_field() {
        let field = ScalarField::filled(40, 23, 0.37);
        let blurred = gaussian_blur(&field, 13).unwrap();

        assert!(blurred.data().iter().all(|&v| (v - 0.37).abs() < 1e-6));
    }

    // Tests the separable response to a unit impulse
    // Verified by applying only the horizontal pass
    #[test]
    fn test_blur_impulse_response() {
        let mut samples = vec![0.0; 21 * 21];
        samples[10 * 21 + 10] = 1.0;
        let field = ScalarField::from_vec(21, 21, samples).unwrap();
        let blurred = gaussian_blur(&field, 5).unwrap();

        assert_eq!(blurred.get(10, 10), Some(0.140_625));
        assert_eq!(blurred.get(11, 10), Some(0.093_75));
        assert_eq!(blurred.get(12, 12), Some(0.003_906_25));
        assert_eq!(blurred.get(13, 10), Some(0.0));
    }

    // Tests identity kernel and kernels wider than the image
    // Verified by rejecting kernels larger than the image
    #[test]
    fn test_blur_identity_and_oversized() {
        let field = ScalarField::from_vec(3, 2, vec![0.1, 0.9, 0.4, 0.3, 0.7, 0.2]).unwrap();

        assert_eq!(gaussian_blur(&field, 1).unwrap(), field);

        let wide = gaussian_blur(&field, 41).unwrap();
        assert!(wide.data().iter().all(|v| v.is_finite()));
        assert_eq!((wide.width(), wide.height()), (3, 2));
    }
}
