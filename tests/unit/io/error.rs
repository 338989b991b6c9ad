//! Tests for error classification, source chaining and message formatting

#[cfg(test)]
mod tests {
    use pbrmaps::io::error::{WithPath, invalid_kernel, invalid_parameter};
    use pbrmaps::{ErrorKind, TextureError};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = TextureError::FileSystem {
            path: "/tmp/out".into(),
            operation: "create directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert_eq!(error.kind(), ErrorKind::Save);
        assert!(
            TextureError::MissingInput {
                path: "a.png".into()
            }
            .source()
            .is_none()
        );
    }

    // Tests every variant maps to its category
    // Verified by classifying missing input as a data error
    #[test]
    fn test_kinds() {
        assert_eq!(
            TextureError::MissingInput {
                path: PathBuf::from("a.png")
            }
            .kind(),
            ErrorKind::Load
        );
        assert_eq!(
            invalid_kernel("sobel gradient", 7, "extent must be 3 or 5").kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            TextureError::DimensionMismatch {
                operation: "merge",
                expected: "4x4".to_string(),
                actual: "4x3".to_string(),
            }
            .kind(),
            ErrorKind::Data
        );
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("ao_radius", &-1.0, &"must be >= 0");

        let message = error.to_string();
        assert!(message.contains("ao_radius"));
        assert!(message.contains("-1"));
        assert!(message.contains("must be >= 0"));
    }

    // Tests InvalidKernel message names the operation and extent
    // Verified by omitting size from message
    #[test]
    fn test_invalid_kernel_message() {
        let message = invalid_kernel("gaussian blur", 4, "extent must be odd").to_string();
        assert!(message.contains("gaussian blur"));
        assert!(message.contains('4'));
        assert!(message.contains("odd"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = TextureError::ImageExport {
            path: PathBuf::from("out/wall_AO.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("wall_AO.png"));
        assert!(message.contains("access denied"));
        assert_eq!(error.kind(), ErrorKind::Save);
    }

    // Tests conversions carry a placeholder path until one is attached
    // Verified by leaving the placeholder in place
    #[test]
    fn test_with_path() {
        let converted: TextureError = std::io::Error::other("disk full").into();
        assert!(converted.to_string().contains("<unknown>"));

        let result: Result<(), std::io::Error> = Err(std::io::Error::other("disk full"));
        let error = result.with_path(std::path::Path::new("maps")).unwrap_err();
        assert!(error.to_string().contains("'maps'"));
    }
}
