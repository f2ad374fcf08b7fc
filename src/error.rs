//! Error type for filesystem-backed path operations.

use std::path::PathBuf;

/// Error returned by the mutating and querying operations on a
/// [`Path`](crate::Path).
///
/// Variants carry the path and operation that failed where applicable.
/// Uses `#[non_exhaustive]` for forward compatibility.
///
/// # Examples
///
/// ```rust
/// use pathkit::PathError;
/// use std::path::PathBuf;
///
/// let err = PathError::NotFound { path: PathBuf::from("/missing") };
/// assert_eq!(err.to_string(), "not found: /missing");
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// Path does not exist.
    #[error("not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Destination already exists and the operation was not forced.
    #[error("{operation}: already exists: {path}")]
    AlreadyExists {
        /// The path that already exists.
        path: PathBuf,
        /// The operation that failed.
        operation: &'static str,
    },

    /// Expected a directory but found something else.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The path that is not a directory.
        path: PathBuf,
    },

    /// The operation is not supported on this platform.
    #[error("operation not supported: {operation}")]
    Unsupported {
        /// The unsupported operation.
        operation: &'static str,
    },

    /// Underlying OS error with context.
    #[error("{operation} failed for {path}: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl PathError {
    /// Wrap an I/O error with the operation name and path it belongs to.
    pub(crate) fn io(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => PathError::NotFound { path },
            std::io::ErrorKind::AlreadyExists => PathError::AlreadyExists { path, operation },
            _ => PathError::Io {
                operation,
                path,
                source,
            },
        }
    }
}

impl From<std::io::Error> for PathError {
    fn from(error: std::io::Error) -> Self {
        // Convert common io::ErrorKind to more specific variants when possible
        match error.kind() {
            std::io::ErrorKind::NotFound => PathError::NotFound {
                path: PathBuf::new(),
            },
            std::io::ErrorKind::AlreadyExists => PathError::AlreadyExists {
                path: PathBuf::new(),
                operation: "io",
            },
            _ => PathError::Io {
                operation: "io",
                path: PathBuf::new(),
                source: error,
            },
        }
    }
}
