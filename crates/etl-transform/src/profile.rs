//! Data-quality profiling of a curated dataset.

use std::collections::HashSet;

use etl_model::QualityProfile;
use indexmap::IndexMap;
use etl_ingest::any_to_f64;
use polars::prelude::{AnyValue, DataFrame};

use crate::error::Result;
use crate::frame::text_column;
use crate::normalization::round_to;

/// Compute the quality profile of a curated dataset.
///
/// Null percentages are `nulls / rows * 100` rounded to 2 decimals (0 for an
/// empty dataset). Duplicates count rows equal to an earlier row across every
/// column, nulls comparing equal to each other.
pub fn profile_dataframe(df: &DataFrame) -> Result<QualityProfile> {
    let rows = df.height();
    let mut null_total = 0usize;
    let mut null_percent_by_col = IndexMap::with_capacity(df.width());

    for column in df.get_columns() {
        let nulls = column.null_count();
        null_total += nulls;
        let percent = if rows == 0 {
            0.0
        } else {
            round_to(nulls as f64 / rows as f64 * 100.0, 2)
        };
        null_percent_by_col.insert(column.name().to_string(), percent);
    }

    Ok(QualityProfile {
        rows,
        cols: df.width(),
        null_total,
        null_percent_by_col,
        duplicates: count_duplicate_rows(df)?,
    })
}

/// Cell identity used to compare rows.
///
/// Floats compare by value: `-0.0` equals `0.0` and every NaN equals every
/// other NaN. Other cells compare by their text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CellKey {
    Null,
    Float(u64),
    Text(String),
}

impl CellKey {
    fn float(value: f64) -> Self {
        let canonical = if value.is_nan() { f64::NAN } else { value + 0.0 };
        CellKey::Float(canonical.to_bits())
    }
}

fn cell_keys(df: &DataFrame, name: &str) -> Result<Vec<CellKey>> {
    let column = df.column(name)?;
    if !column.dtype().is_float() {
        return Ok(text_column(df, name)?
            .into_iter()
            .map(|value| value.map_or(CellKey::Null, CellKey::Text))
            .collect());
    }
    let mut keys = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        keys.push(any_to_f64(&value).map_or(CellKey::Null, CellKey::float));
    }
    Ok(keys)
}

fn count_duplicate_rows(df: &DataFrame) -> Result<usize> {
    if df.height() < 2 || df.width() == 0 {
        return Ok(0);
    }

    let mut columns = Vec::with_capacity(df.width());
    for name in df.get_column_names() {
        columns.push(cell_keys(df, name)?);
    }

    let mut seen: HashSet<Vec<CellKey>> = HashSet::with_capacity(df.height());
    let mut duplicates = 0;
    for idx in 0..df.height() {
        let key: Vec<CellKey> = columns.iter().map(|values| values[idx].clone()).collect();
        if !seen.insert(key) {
            duplicates += 1;
        }
    }
    Ok(duplicates)
}
