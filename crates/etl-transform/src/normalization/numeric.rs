//! Numeric coercion for curated columns.
//!
//! Coercion is lenient: a value that cannot be read as a finite number becomes
//! `None` instead of failing the table.

use etl_ingest::any_to_f64;
use polars::prelude::AnyValue;

/// Parse a string value to a finite f64.
///
/// Accepts surrounding whitespace and scientific notation. Thousands
/// separators are not stripped, so `"1,234"` (or a decimal comma) is
/// rejected rather than silently re-scaled. `nan` and `inf` forms are
/// treated as missing.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerce a cell of any type to a finite f64.
pub fn coerce_numeric(value: &AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::String(s) => parse_numeric(s),
        AnyValue::StringOwned(s) => parse_numeric(s),
        other => any_to_f64(other).filter(|v| v.is_finite()),
    }
}

/// Parse an identifier as an integer.
///
/// Integral floats (`"42.0"`, as written by exports that went through a
/// float column) are accepted; fractional values are not.
pub fn parse_identifier(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if let Ok(id) = trimmed.parse::<i64>() {
        return Some(id);
    }
    let float = parse_numeric(trimmed)?;
    if float.fract() != 0.0 || float < i64::MIN as f64 || float >= i64::MAX as f64 {
        return None;
    }
    Some(float as i64)
}

/// Round to `decimals` places, ties to even on the scaled value.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
