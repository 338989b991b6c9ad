//! Error types and context management for texture derivation

use std::fmt;
use std::path::{Path, PathBuf};

/// Broad classification of a [`TextureError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input missing, unreadable, or not decodable
    Load,
    /// Parameter or kernel outside its valid range
    Configuration,
    /// Output could not be written
    Save,
    /// Raster data with inconsistent shape
    Data,
}

/// Main error type for all pipeline operations
#[derive(Debug)]
pub enum TextureError {
    /// Input path does not exist or is not a file
    MissingInput {
        /// Path that was requested
        path: PathBuf,
    },

    /// Failed to decode source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Generator parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Filter kernel size rejected by a primitive
    InvalidKernel {
        /// Filter that rejected the kernel
        operation: &'static str,
        /// Requested kernel extent
        size: usize,
        /// Explanation of the constraint
        reason: &'static str,
    },

    /// Buffer length or channel count does not match the declared shape
    DimensionMismatch {
        /// Operation that detected the mismatch
        operation: &'static str,
        /// Expected element count or dimensions
        expected: String,
        /// Actual element count or dimensions
        actual: String,
    },

    /// Failed to encode or write a generated map
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl TextureError {
    /// Classify the error for callers that branch on failure category
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingInput { .. } | Self::ImageLoad { .. } => ErrorKind::Load,
            Self::InvalidParameter { .. } | Self::InvalidKernel { .. } => {
                ErrorKind::Configuration
            }
            Self::ImageExport { .. } | Self::FileSystem { .. } => ErrorKind::Save,
            Self::DimensionMismatch { .. } => ErrorKind::Data,
        }
    }
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput { path } => {
                write!(f, "Input image '{}' does not exist", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidKernel {
                operation,
                size,
                reason,
            } => {
                write!(f, "Invalid kernel size {size} for {operation}: {reason}")
            }
            Self::DimensionMismatch {
                operation,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Dimension mismatch in {operation}: expected {expected}, got {actual}"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, TextureError>;

/// Attaches a concrete path to errors converted without one
pub trait WithPath<T> {
    /// Replace the placeholder path of load, export and file system errors
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<TextureError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                TextureError::MissingInput { path: p }
                | TextureError::ImageLoad { path: p, .. }
                | TextureError::ImageExport { path: p, .. }
                | TextureError::FileSystem { path: p, .. } => {
                    *p = path.to_path_buf();
                }
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for TextureError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for TextureError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TextureError {
    TextureError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid kernel error
pub const fn invalid_kernel(
    operation: &'static str,
    size: usize,
    reason: &'static str,
) -> TextureError {
    TextureError::InvalidKernel {
        operation,
        size,
        reason,
    }
}
