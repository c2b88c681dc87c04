//! Error types for raw-layer ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a raw table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Raw extract not found.
    #[error("raw file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Raw file has no content at all, not even a header.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// File uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path} (expected UTF-8)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl IngestError {
    /// True when the raw artifact is absent, as opposed to present but unreadable.
    pub fn is_missing(&self) -> bool {
        matches!(self, IngestError::FileNotFound { .. })
    }
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("data/raw/dim_Customers.csv"),
        };
        assert_eq!(err.to_string(), "raw file not found: data/raw/dim_Customers.csv");
        assert!(err.is_missing());
    }

    #[test]
    fn test_parse_error_is_not_missing() {
        let err = IngestError::CsvParse {
            path: PathBuf::from("data/raw/fact_Invoices.csv"),
            message: "empty CSV".to_string(),
        };
        assert!(!err.is_missing());
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("price".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
