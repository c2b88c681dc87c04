//! Polars AnyValue utility functions.

use polars::prelude::AnyValue;

/// Converts a Polars AnyValue to text, keeping nulls distinct from empty strings.
pub fn any_to_text(value: &AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(v.to_string()),
        AnyValue::Int16(v) => Some(v.to_string()),
        AnyValue::Int32(v) => Some(v.to_string()),
        AnyValue::Int64(v) => Some(v.to_string()),
        AnyValue::UInt8(v) => Some(v.to_string()),
        AnyValue::UInt16(v) => Some(v.to_string()),
        AnyValue::UInt32(v) => Some(v.to_string()),
        AnyValue::UInt64(v) => Some(v.to_string()),
        AnyValue::Float32(v) => Some(format_numeric(f64::from(*v))),
        AnyValue::Float64(v) => Some(format_numeric(*v)),
        AnyValue::String(s) => Some((*s).to_string()),
        AnyValue::StringOwned(s) => Some(s.to_string()),
        AnyValue::Boolean(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Converts an AnyValue to f64, returning None for non-numeric or null values.
pub fn any_to_f64(value: &AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(*v)),
        AnyValue::Int16(v) => Some(f64::from(*v)),
        AnyValue::Int32(v) => Some(f64::from(*v)),
        AnyValue::Int64(v) => Some(*v as f64),
        AnyValue::UInt8(v) => Some(f64::from(*v)),
        AnyValue::UInt16(v) => Some(f64::from(*v)),
        AnyValue::UInt32(v) => Some(f64::from(*v)),
        AnyValue::UInt64(v) => Some(*v as f64),
        AnyValue::Float32(v) => Some(f64::from(*v)),
        AnyValue::Float64(v) => Some(*v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(s),
        _ => None,
    }
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_text() {
        assert_eq!(any_to_text(&AnyValue::Null), None);
        assert_eq!(any_to_text(&AnyValue::String("")), Some(String::new()));
        assert_eq!(any_to_text(&AnyValue::Int64(42)), Some("42".to_string()));
        assert_eq!(any_to_text(&AnyValue::Float64(10.50)), Some("10.5".to_string()));
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(30.0), "30");
        assert_eq!(format_numeric(12.5), "12.5");
        assert_eq!(format_numeric(100.0), "100");
    }

    #[test]
    fn test_any_to_f64() {
        assert_eq!(any_to_f64(&AnyValue::Int64(3)), Some(3.0));
        assert_eq!(any_to_f64(&AnyValue::String(" 2.5 ")), Some(2.5));
        assert_eq!(any_to_f64(&AnyValue::String("abc")), None);
        assert_eq!(any_to_f64(&AnyValue::Null), None);
    }
}
