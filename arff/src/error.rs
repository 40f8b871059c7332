//! Error types for file-backed ARFF loading

use arff_core::{ArffError, ErrorCategory};
use std::path::PathBuf;

/// Result type alias for file-backed operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or summarizing an ARFF file
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be opened, mapped or read
    #[error("Unable to open file: {}: {source}", path.display())]
    Io {
        /// The path that failed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The input was rejected by the parser
    #[error(transparent)]
    Invalid(#[from] ArffError),

    /// A summary could not be rendered as JSON
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an I/O error for `path`
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Broad classification of the error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Io { .. } => ErrorCategory::Io,
            Error::Invalid(err) => err.category(),
            #[cfg(feature = "serde")]
            Error::Json(_) => ErrorCategory::Data,
        }
    }

    /// The parser error, if this is one
    pub fn as_invalid(&self) -> Option<&ArffError> {
        match self {
            Error::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::io(io_err, "/data/iris.arff");
        let message = err.to_string();
        assert!(message.starts_with("Unable to open file: /data/iris.arff"));
        assert!(message.contains("no such file"));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(err.as_invalid().is_none());
    }

    #[test]
    fn test_invalid_is_transparent() {
        let err = Error::from(ArffError::NoSamples);
        assert_eq!(err.to_string(), ArffError::NoSamples.to_string());
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.as_invalid(), Some(&ArffError::NoSamples));
    }

    #[test]
    fn test_limit_category_passes_through() {
        let err = Error::from(ArffError::TooManySamples { count: 3, limit: 2 });
        assert_eq!(err.category(), ErrorCategory::ResourceLimit);
    }
}
