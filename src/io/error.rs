//! Error types and context management for grid operations

use crate::spatial::grid::GridCoord;
use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all grid and placement operations
#[derive(Debug)]
pub enum GridError {
    /// Coordinate lies outside the grid extent
    OutOfBounds {
        /// Rejected grid coordinate
        position: GridCoord,
        /// Grid width in cells
        width: usize,
        /// Grid height in cells
        height: usize,
    },

    /// Placement target already holds a connector
    CellOccupied {
        /// Coordinate of the occupied cell
        position: GridCoord,
    },

    /// Neighbor pattern the orientation rules could not classify
    ///
    /// Unreachable with four axis directions. Resolution still falls back to
    /// a default orientation; this variant exists so the pattern can be
    /// reported instead of dropped.
    UnresolvedAdjacency {
        /// Raw neighbor mask that failed to resolve
        mask: u8,
        /// Which rule rejected the pattern
        reason: &'static str,
    },

    /// Configuration or argument validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Placement script line could not be parsed
    ScriptParse {
        /// 1-based line number
        line: usize,
        /// Offending line content
        content: String,
        /// What was wrong with the line
        reason: String,
    },

    /// Failed to encode or save a rendered image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
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

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                position,
                width,
                height,
            } => {
                write!(
                    f,
                    "Position {position} is outside the grid (size {width}x{height})"
                )
            }
            Self::CellOccupied { position } => {
                write!(f, "Cell {position} is already occupied")
            }
            Self::UnresolvedAdjacency { mask, reason } => {
                write!(f, "Unresolved adjacency for mask {mask:#06b}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ScriptParse {
                line,
                content,
                reason,
            } => {
                write!(f, "Script error on line {line} ('{content}'): {reason}")
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

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl GridError {
    /// Whether the caller can simply retry with a different coordinate
    pub const fn is_placement_rejection(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::CellOccupied { .. })
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Attaches file context to I/O failures
pub trait WithContext<T> {
    /// Wrap an I/O error with the path and operation that produced it
    ///
    /// # Errors
    ///
    /// Propagates the original error as [`GridError::FileSystem`]
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithContext<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| GridError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for GridError {
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
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
