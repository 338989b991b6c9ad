//! Tests for the 4-neighbour Laplacian

#[cfg(test)]
mod tests {
    use pbrmaps::filters::laplacian;
    use pbrmaps::raster::ScalarField;

    // Tests a flat field has exactly zero curvature
    // Verified by using an unbalanced centre weight
    #[test]
    fn test_flat_field_is_zero() {
        let out = laplacian(&ScalarField::filled(6, 5, 0.8));
        assert!(out.data().iter().all(|&v| v == 0.0));
    }

    // Tests impulse response matches the cross-shaped kernel
    // Verified by including diagonal neighbours
    #[test]
    fn test_impulse_response() {
        let mut samples = vec![0.0; 25];
        samples[12] = 1.0;
        let out = laplacian(&ScalarField::from_vec(5, 5, samples).unwrap());

        assert_eq!(out.get(2, 2), Some(-4.0));
        assert_eq!(out.get(1, 2), Some(1.0));
        assert_eq!(out.get(2, 3), Some(1.0));
        assert_eq!(out.get(1, 1), Some(0.0));
    }

    // Tests a quadratic profile has constant second derivative
    // Verified by dropping the -2 centre weight
    #[test]
    fn test_quadratic_profile() {
        let samples = (0..3)
            .flat_map(|_| (0..6).map(|x| (x * x) as f32))
            .collect();
        let out = laplacian(&ScalarField::from_vec(6, 3, samples).unwrap());

        for x in 1..5 {
            assert_eq!(out.get(x, 1), Some(2.0));
        }
    }
}
