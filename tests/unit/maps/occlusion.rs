//! Tests for multi-scale ambient occlusion

#[cfg(test)]
mod tests {
    use pbrmaps::ErrorKind;
    use pbrmaps::maps::occlusion::occlusion_kernel_sizes;
    use pbrmaps::maps::{OcclusionParameters, generate_ao_map};
    use pbrmaps::raster::ScalarField;

    fn pit_field() -> ScalarField {
        let mut samples = vec![0.6; 31 * 31];
        for y in 13..18 {
            for x in 13..18 {
                samples[y * 31 + x] = 0.2;
            }
        }
        ScalarField::from_vec(31, 31, samples).unwrap()
    }

    fn bump_field() -> ScalarField {
        let mut samples = vec![0.2; 31 * 31];
        samples[15 * 31 + 15] = 0.9;
        ScalarField::from_vec(31, 31, samples).unwrap()
    }

    // Tests three kernel scales at half, one and two times the radius
    // Verified by rounding the scaled radius up
    #[test]
    fn test_kernel_sizes() {
        assert_eq!(occlusion_kernel_sizes(20.0), [11, 21, 41]);
        assert_eq!(occlusion_kernel_sizes(5.0), [3, 5, 11]);
        assert_eq!(occlusion_kernel_sizes(0.0), [1, 1, 1]);
    }

    // Tests a flat field is fully unoccluded
    // Verified by accumulating signed differences
    #[test]
    fn test_flat_field_unoccluded() {
        let ao = generate_ao_map(
            &ScalarField::filled(48, 48, 0.5),
            OcclusionParameters::default(),
        )
        .unwrap();
        assert!(ao.data().iter().all(|&v| (v - 1.0).abs() < 1e-6));
    }

    // Tests a dark pit is darker than the open surface around it
    // Verified by subtracting blurred from original
    #[test]
    fn test_pit_is_occluded() {
        let ao = generate_ao_map(&pit_field(), OcclusionParameters::default()).unwrap();

        let centre = ao.get(15, 15).unwrap();
        let open = ao.get(0, 0).unwrap();
        assert!(centre < 0.9, "centre {centre}");
        assert!(open > centre);
    }

    // Tests a raised peak is never darkened at its apex
    // Verified by taking the absolute difference
    #[test]
    fn test_peak_is_unoccluded() {
        let ao = generate_ao_map(&bump_field(), OcclusionParameters::default()).unwrap();
        assert_eq!(ao.get(15, 15), Some(1.0));
    }

    // Tests zero strength and zero radius both leave the map white
    // Verified by clamping before scaling by strength
    #[test]
    fn test_degenerate_parameters() {
        let field = pit_field();
        for params in [
            OcclusionParameters {
                radius: 20.0,
                strength: 0.0,
            },
            OcclusionParameters {
                radius: 0.0,
                strength: 1.5,
            },
        ] {
            let ao = generate_ao_map(&field, params).unwrap();
            assert!(ao.data().iter().all(|&v| v == 1.0));
        }
    }

    // Tests larger strength darkens monotonically
    // Verified by dividing by strength
    #[test]
    fn test_strength_monotonic() {
        let field = pit_field();
        let light = generate_ao_map(
            &field,
            OcclusionParameters {
                radius: 10.0,
                strength: 0.5,
            },
        )
        .unwrap();
        let dark = generate_ao_map(
            &field,
            OcclusionParameters {
                radius: 10.0,
                strength: 3.0,
            },
        )
        .unwrap();

        for (l, d) in light.data().iter().zip(dark.data().iter()) {
            assert!(d <= l);
        }
    }

    // Tests radius above the supported maximum is a configuration error
    // Verified by allowing unbounded radius
    #[test]
    fn test_validate() {
        let field = ScalarField::filled(4, 4, 0.5);
        for params in [
            OcclusionParameters {
                radius: 600.0,
                strength: 1.0,
            },
            OcclusionParameters {
                radius: -1.0,
                strength: 1.0,
            },
            OcclusionParameters {
                radius: 10.0,
                strength: -1.0,
            },
        ] {
            let err = generate_ao_map(&field, params).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Configuration);
        }
    }
}
