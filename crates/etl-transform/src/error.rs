//! Error types for curated transformations.

use thiserror::Error;

/// Errors that abort the transformation of one table.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Two source columns normalize or rename to the same name.
    #[error("column '{column}' appears more than once after normalization")]
    DuplicateColumn { column: String },

    /// An identifier that cannot be represented as an integer.
    #[error("invalid identifier '{value}' in column '{column}' at row {row}")]
    InvalidIdentifier {
        column: String,
        value: String,
        row: usize,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
