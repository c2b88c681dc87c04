//! Raw CSV loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// A UTF-8 BOM is accepted; UTF-16 BOM markers are rejected.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads a raw CSV file with every column as text.
///
/// Empty fields become nulls. `n_rows` stops the reader early; a value of
/// zero is ignored here and handled by [`apply_row_limit`].
pub fn read_raw_csv(path: &Path, n_rows: Option<usize>) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_n_rows(n_rows.filter(|n| *n > 0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Keeps the first `limit` rows in source order.
pub fn apply_row_limit(df: DataFrame, limit: Option<usize>) -> DataFrame {
    match limit {
        Some(limit) if limit < df.height() => df.head(Some(limit)),
        _ => df,
    }
}

/// Loads one raw table, truncated to `limit` rows when given.
///
/// Returns [`IngestError::FileNotFound`] when the extract is absent so callers
/// can skip the table instead of failing it.
pub fn load_raw_table(path: &Path, limit: Option<usize>) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    if metadata.len() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    validate_encoding(path)?;
    let df = read_raw_csv(path, limit)?;
    let df = apply_row_limit(df, limit);
    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "raw table loaded"
    );
    Ok(df)
}
