//! Error types for the match crate.
//!
//! Matching itself never fails; only reading and writing dictionary files can.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for dictionary file operations.
pub type Result<T> = std::result::Result<T, MatchError>;

/// Errors that can occur while loading or saving dictionaries.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The file could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON object of the expected shape
    #[error("Invalid dictionary JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// In-memory JSON (not tied to a file) failed to parse or serialize
    #[error("JSON error: {0}")]
    JsonValue(#[from] serde_json::Error),
}

impl MatchError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        MatchError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &Path, source: serde_json::Error) -> Self {
        MatchError::Json {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the file involved, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            MatchError::Io { path, .. } | MatchError::Json { path, .. } => Some(path),
            MatchError::JsonValue(_) => None,
        }
    }

    /// Returns true if the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MatchError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
