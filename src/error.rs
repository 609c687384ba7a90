//! Error types for meshidx.
//!
//! The indexing core itself never fails on well-formed input; these errors
//! come from reading and writing files and from exhausting a narrow index type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur while loading, indexing, or saving a mesh.
#[derive(Error, Debug)]
pub enum MeshError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error loading a triangle soup from file.
    #[error("failed to load mesh from {path}: {message}")]
    LoadError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Error saving index buffers to file.
    #[error("failed to save mesh to {path}: {message}")]
    SaveError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },

    /// A `vertex` line could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number in the source text.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// The vertex table grew past what the chosen index type can address.
    #[error("{count} unique vertices do not fit in a {index_type} index buffer")]
    IndexOverflow {
        /// Name of the index type, e.g. `u16`.
        index_type: &'static str,
        /// Number of vertices that were requested.
        count: usize,
    },
}

impl MeshError {
    /// Create a parse error for the given line.
    pub fn parse<T: std::fmt::Display>(line: usize, message: T) -> Self {
        MeshError::Parse {
            line,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = MeshError::parse(7, "expected 3 coordinates, found 2");
        assert_eq!(err.to_string(), "line 7: expected 3 coordinates, found 2");
    }

    #[test]
    fn test_overflow_message() {
        let err = MeshError::IndexOverflow {
            index_type: "u16",
            count: 65_536,
        };
        assert_eq!(
            err.to_string(),
            "65536 unique vertices do not fit in a u16 index buffer"
        );
    }
}
