//! Error types for catalog loading, synthesis and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all kolam generation operations
#[derive(Debug)]
pub enum KolamError {
    /// Requested grid size is below the smallest synthesizable grid
    InvalidSize {
        /// Size that was requested
        size: i64,
        /// Smallest accepted size
        minimum: usize,
    },

    /// Tile catalog or mirror tables failed validation
    ///
    /// Indicates a data authoring bug rather than a recoverable runtime condition.
    CatalogIntegrity {
        /// Description of the violated property
        reason: String,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
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

    /// Pattern could not be serialized
    Serialization {
        /// Underlying serializer error
        source: serde_json::Error,
    },
}

impl fmt::Display for KolamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size, minimum } => {
                write!(f, "Invalid kolam size {size}: must be at least {minimum}")
            }
            Self::CatalogIntegrity { reason } => {
                write!(f, "Tile catalog integrity check failed: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
            Self::Serialization { source } => {
                write!(f, "Failed to serialize pattern: {source}")
            }
        }
    }
}

impl std::error::Error for KolamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for kolam results
pub type Result<T> = std::result::Result<T, KolamError>;

impl From<std::io::Error> for KolamError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for KolamError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> KolamError {
    KolamError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a catalog integrity error
pub fn catalog_error(reason: &impl ToString) -> KolamError {
    KolamError::CatalogIntegrity {
        reason: reason.to_string(),
    }
}

/// Attach a path and operation to a file system error
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> KolamError {
    let path = path.into();
    move |source| KolamError::FileSystem {
        path,
        operation,
        source,
    }
}
