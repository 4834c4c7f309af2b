//! Input/output: image coding, animation, errors, configuration and the CLI

/// Scoped frame capture and GIF assembly
pub mod animation;
/// Command-line parsing and command execution
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Block raster encoding and decoding
pub mod image;
/// Optional progress bars
pub mod progress;
