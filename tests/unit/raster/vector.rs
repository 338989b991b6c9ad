//! Tests for guarded normalization and tangent-space vector encoding

#[cfg(test)]
mod tests {
    use pbrmaps::raster::vector::{decode_component, encode_component, normalize_guarded};
    use pbrmaps::raster::{Quantize, ScalarField, Vector3Field};

    // Tests normalization produces unit length
    // Verified by dividing by the squared length
    #[test]
    fn test_normalize_unit_length() {
        let [x, y, z] = normalize_guarded([3.0_f64, 4.0, 12.0], 1e-8);

        assert!((x - 3.0 / 13.0).abs() < 1e-12);
        assert!((y - 4.0 / 13.0).abs() < 1e-12);
        assert!((z - 12.0 / 13.0).abs() < 1e-12);
    }

    // Tests zero vectors stay finite under the epsilon guard
    // Verified by removing the max with epsilon
    #[test]
    fn test_normalize_zero_vector_is_finite() {
        let v = normalize_guarded([0.0_f32, 0.0, 0.0], 1e-8);
        assert!(v.iter().all(|c| c.is_finite()));
        assert_eq!(v, [0.0, 0.0, 0.0]);
    }

    // Tests encoding maps [-1, 1] onto [0, 1] and decoding inverts it
    // Verified by encoding with v * 0.5 only
    #[test]
    fn test_encode_decode() {
        assert_eq!(encode_component(-1.0_f32), 0.0);
        assert_eq!(encode_component(0.0_f32), 0.5);
        assert_eq!(encode_component(1.0_f32), 1.0);
        assert_eq!(decode_component(0.75_f32), 0.5);
    }

    // Tests a straight-up vector encodes to the flat normal color
    // Verified by skipping normalization of the z component
    #[test]
    fn test_flat_vectors_encode_to_flat_normal() {
        let zero = ScalarField::filled(4, 3, 0.0);
        let up = ScalarField::filled(4, 3, 2.5);
        let field = Vector3Field::from_components(&zero, &zero, &up, 1e-8);

        assert_eq!(field.width(), 4);
        assert_eq!(field.height(), 3);
        assert_eq!(field.encoded(3, 2), Some([0.5, 0.5, 1.0]));
        assert_eq!(field.quantize().to_rgb8().get_pixel(0, 0).0, [128, 128, 255]);
    }

    // Tests every decoded vector has unit length
    // Verified by encoding the raw vectors without normalizing
    #[test]
    fn test_decoded_vectors_are_unit_length() {
        let x = ScalarField::from_vec(3, 1, vec![-4.0, 0.3, 9.0]).unwrap();
        let y = ScalarField::from_vec(3, 1, vec![1.0, -0.7, 0.0]).unwrap();
        let z = ScalarField::filled(3, 1, 1.0);
        let field = Vector3Field::from_components(&x, &y, &z, 1e-8);

        for [vx, vy, vz] in field.decoded_iter() {
            let length = vx.mul_add(vx, vy.mul_add(vy, vz * vz)).sqrt();
            assert!((length - 1.0).abs() < 1e-5, "length {length}");
        }
        assert_eq!(field.decoded_iter().count(), 3);
    }

    // Tests the RGB view carries the encoded components unchanged
    // Verified by decoding in to_rgb
    #[test]
    fn test_to_rgb_matches_encoded() {
        let x = ScalarField::filled(2, 2, 1.0);
        let zero = ScalarField::filled(2, 2, 0.0);
        let field = Vector3Field::from_components(&x, &zero, &zero, 1e-8);

        assert_eq!(field.to_rgb().pixel(1, 1), field.encoded(1, 1));
        assert_eq!(field.decoded(0, 0), Some([1.0, 0.0, 0.0]));
    }
}
