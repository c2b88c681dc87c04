//! Curated dataset writers.

use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, ParquetWriter, SerWriter};

use crate::error::{OutputError, Result};
use crate::file::write_replacing;

/// Write the curated dataset as UTF-8 CSV with a BOM and a header row.
///
/// On failure no file is left at `path`.
pub fn write_curated_csv(path: &Path, df: &mut DataFrame) -> Result<()> {
    write_replacing(path, |file| {
        CsvWriter::new(file)
            .include_bom(true)
            .include_header(true)
            .finish(df)
            .map_err(|err| OutputError::Csv {
                path: path.to_path_buf(),
                message: err.to_string(),
            })
    })
}

/// Write the curated dataset as Parquet.
///
/// On failure no file is left at `path`.
pub fn write_curated_parquet(path: &Path, df: &mut DataFrame) -> Result<()> {
    write_replacing(path, |file| {
        ParquetWriter::new(file)
            .finish(df)
            .map_err(|err| OutputError::Parquet {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, NamedFrom, Series};

    fn frame() -> DataFrame {
        let columns: Vec<Column> = vec![
            Series::new("id_cliente".into(), vec![1i64, 2]).into(),
            Series::new("nombre".into(), vec![Some("Ana"), None]).into(),
        ];
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn csv_starts_with_bom_and_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dim_Customers_curated.csv");
        write_curated_csv(&path, &mut frame()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        assert_eq!(text.lines().next(), Some("id_cliente,nombre"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn parquet_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("x.parquet");
        let err = write_curated_parquet(&path, &mut frame()).unwrap_err();
        assert!(matches!(err, OutputError::Io { .. }));
    }

    #[test]
    fn failed_parquet_write_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dim_Customers_curated.parquet");
        std::fs::write(&path, b"stale bytes from an earlier run").unwrap();
        // Blocking the staging file makes the write fail before any bytes land.
        std::fs::create_dir(dir.path().join("dim_Customers_curated.parquet.partial")).unwrap();

        assert!(write_curated_parquet(&path, &mut frame()).is_err());
        assert!(!path.exists());
    }
}
