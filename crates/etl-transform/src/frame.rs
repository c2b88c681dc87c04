//! Column accessors shared by the table rules.

use chrono::NaiveDate;
use polars::prelude::{
    AnyValue, BooleanChunked, DataFrame, DataType, NamedFrom, NewChunkedArray, Series,
};
use tracing::debug;

use crate::error::Result;
use crate::normalization::{coerce_date, coerce_numeric, days_since_epoch};

pub(crate) fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_index(name).is_some()
}

/// Raw cell values of a column, nulls kept as `None`.
pub(crate) fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        values.push(etl_ingest::any_to_text(&value));
    }
    Ok(values)
}

/// Column coerced to f64; cells that were present but unparseable become `None`.
pub(crate) fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    let mut coerced = 0usize;
    for idx in 0..df.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        let parsed = coerce_numeric(&value);
        if parsed.is_none() && !value.is_null() {
            coerced += 1;
        }
        values.push(parsed);
    }
    if coerced > 0 {
        debug!(column = name, coerced, "non-numeric values set to null");
    }
    Ok(values)
}

/// Column coerced to dates; cells that were present but unparseable become `None`.
pub(crate) fn date_column(df: &DataFrame, name: &str) -> Result<Vec<Option<NaiveDate>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    let mut coerced = 0usize;
    for idx in 0..df.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        let parsed = coerce_date(&value);
        if parsed.is_none() && !value.is_null() {
            coerced += 1;
        }
        values.push(parsed);
    }
    if coerced > 0 {
        debug!(column = name, coerced, "unparseable dates set to null");
    }
    Ok(values)
}

pub(crate) fn set_f64_column(df: &mut DataFrame, name: &str, values: Vec<Option<f64>>) -> Result<()> {
    df.with_column(Series::new(name.into(), values))?;
    Ok(())
}

pub(crate) fn set_i64_column(df: &mut DataFrame, name: &str, values: Vec<i64>) -> Result<()> {
    df.with_column(Series::new(name.into(), values))?;
    Ok(())
}

pub(crate) fn set_string_column(df: &mut DataFrame, name: &str, values: Vec<String>) -> Result<()> {
    df.with_column(Series::new(name.into(), values))?;
    Ok(())
}

pub(crate) fn set_date_column(
    df: &mut DataFrame,
    name: &str,
    values: &[Option<NaiveDate>],
) -> Result<()> {
    let days: Vec<Option<i32>> = values
        .iter()
        .map(|date| date.map(days_since_epoch))
        .collect();
    let series = Series::new(name.into(), days).cast(&DataType::Date)?;
    df.with_column(series)?;
    Ok(())
}

pub(crate) fn filter_rows(df: &mut DataFrame, keep: &[bool]) -> Result<()> {
    if keep.iter().all(|keep| *keep) {
        return Ok(());
    }
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    *df = df.filter(&mask)?;
    Ok(())
}
