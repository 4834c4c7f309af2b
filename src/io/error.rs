//! Error types for maze generation, solving and image coding

use std::fmt;
use std::path::PathBuf;

use crate::spatial::Coord;

/// Reasons a raster image could not be read back as a maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// No repeating block pattern could be measured in the image
    Unrecognized,

    /// A block size was measured but is not one the codec produces
    Unsupported {
        /// Detected tile side length in pixels
        block_size: usize,
        /// Block sizes the codec accepts
        supported: &'static [usize],
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized => write!(f, "Can not recognize block size"),
            Self::Unsupported {
                block_size,
                supported,
            } => write!(
                f,
                "Block size {block_size} is not supported (expected one of {supported:?})"
            ),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Wall removal was asked for two cells that do not share exactly one axis
    ///
    /// This is a contract violation inside the engine rather than a user error
    InvalidGeometry {
        /// First cell passed to wall removal
        first: Coord,
        /// Second cell passed to wall removal
        second: Coord,
    },

    /// Image could not be interpreted as a maze
    Decode(DecodeError),

    /// Failed to load an image from the filesystem or memory
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode or save an image
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

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Maze contents do not allow the requested operation
    InvalidSourceData {
        /// Description of what's wrong with the maze
        reason: String,
    },

    /// Requested maze exceeds the front-end size ceiling
    SizeLimitExceeded {
        /// Requested side length
        requested: usize,
        /// Largest accepted side length
        limit: usize,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry { first, second } => {
                write!(
                    f,
                    "Cells {first} and {second} must lie on one line to share a wall"
                )
            }
            Self::Decode(error) => write!(f, "Failed to decode maze image: {error}"),
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid maze data: {reason}")
            }
            Self::SizeLimitExceeded { requested, limit } => {
                write!(f, "Size {requested} is too large (max: {limit})")
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(source) => Some(source),
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<DecodeError> for MazeError {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}

impl From<image::ImageError> for MazeError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<memory>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl MazeError {
    /// Whether the error came from reading a maze image
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source_data(reason: &impl ToString) -> MazeError {
    MazeError::InvalidSourceData {
        reason: reason.to_string(),
    }
}

/// Wrap an I/O failure with the path and operation involved
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> MazeError {
    let path = path.into();
    move |source| MazeError::FileSystem {
        path,
        operation,
        source,
    }
}
