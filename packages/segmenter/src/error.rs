//! Error types for the segmenter.
//!
//! The core parse itself never fails: a document without recognizable
//! structure yields empty or minimal output rather than an error. Everything
//! fallible lives at the I/O boundary (reading input, writing JSON).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the segmenter library.
#[derive(Debug, Error)]
pub enum SegmenterError {
    /// Input file could not be read or decoded as UTF-8.
    #[error("Failed to read input {path}: {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for segmenter operations.
pub type Result<T> = std::result::Result<T, SegmenterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_unreadable_display() {
        let err = SegmenterError::InputUnreadable {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("missing.txt"));
        assert!(err.to_string().contains("no such file"));
    }
}
