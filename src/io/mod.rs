//! Input/output, configuration and error handling around the pipeline

/// Command-line interface
pub mod cli;
/// Tuning constants and parameter defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding and encoding
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Stage progress display
pub mod progress;
