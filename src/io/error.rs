//! Error types and context management for generation operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all generation operations
///
/// A contradiction during solving is not an error; it is reported as
/// [`AdvanceStatus::Fail`](crate::algorithm::solver::AdvanceStatus::Fail).
#[derive(Debug)]
pub enum GenerationError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Source map doesn't meet extraction requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Chunk extraction requires dimensions that are multiples of the pattern size
    IndivisibleSize {
        /// Which grid was rejected, e.g. "source" or "output"
        subject: &'static str,
        /// Rejected width
        width: usize,
        /// Rejected height
        height: usize,
        /// Pattern size the dimensions must divide by
        pattern_size: usize,
    },

    /// ASCII map contains a glyph outside the tile set
    UnknownTile {
        /// The unrecognised character
        character: char,
        /// 1-based line number
        line: usize,
        /// 1-based column number
        column: usize,
    },

    /// Solver bookkeeping reached a state that should be impossible
    InvariantViolation {
        /// Operation that detected the violation
        operation: &'static str,
        /// Description of the violated invariant
        reason: String,
    },

    /// Every permitted attempt ended in a contradiction
    AttemptsExhausted {
        /// Number of attempts made
        attempts: usize,
    },

    /// Failed to save a rendered map to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// A global logger was already installed
    LoggerInstall {
        /// Underlying facade error
        source: log::SetLoggerError,
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

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::IndivisibleSize {
                subject,
                width,
                height,
                pattern_size,
            } => {
                write!(
                    f,
                    "The {subject} size {width}x{height} is not a multiple of the pattern size {pattern_size}"
                )
            }
            Self::UnknownTile {
                character,
                line,
                column,
            } => {
                write!(
                    f,
                    "Unknown tile {character:?} at line {line}, column {column}"
                )
            }
            Self::InvariantViolation { operation, reason } => {
                write!(f, "Invariant violated in {operation}: {reason}")
            }
            Self::AttemptsExhausted { attempts } => {
                write!(f, "Generation failed after {attempts} attempts")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::LoggerInstall { source } => {
                write!(f, "Failed to install logger: {source}")
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

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::LoggerInstall { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Attaches path and operation context to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`GenerationError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| GenerationError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invariant violation error
pub fn invariant_violation(operation: &'static str, reason: &impl ToString) -> GenerationError {
    GenerationError::InvariantViolation {
        operation,
        reason: reason.to_string(),
    }
}
