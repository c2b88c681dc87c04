//! Error types for curated persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing curated artifacts.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be created, written or copied.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed.
    #[error("failed to write CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// Parquet serialization failed.
    #[error("failed to write Parquet {path}: {message}")]
    Parquet { path: PathBuf, message: String },

    /// Profile JSON serialization failed.
    #[error("failed to write JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A directory the stage reads from does not exist.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },
}

impl OutputError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, OutputError>;
