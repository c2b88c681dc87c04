//! Date parsing and ISO 8601 formatting.
//!
//! Invoice exports carry dates in several layouts. Values are parsed to a
//! calendar date (any time of day is dropped); anything unparseable becomes
//! `None` and the row is later discarded by the invoice rule.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use polars::prelude::AnyValue;

/// Days between 0001-01-01 (CE day 1) and 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

const DATETIME_FORMATS: [&str; 8] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

// Month-first is tried before day-first, so ambiguous values such as
// 03/04/2024 read as March 4th.
const DATE_FORMATS: [&str; 9] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y%m%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%d-%b-%Y",
    "%d %b %Y",
];

/// Parse a date string in any supported layout.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    // Offsets such as 2024-01-15T10:30:00+02:00 keep their local date.
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Coerce a cell of any type to a date.
pub fn coerce_date(value: &AnyValue<'_>) -> Option<NaiveDate> {
    match value {
        AnyValue::String(s) => parse_date(s),
        AnyValue::StringOwned(s) => parse_date(s),
        AnyValue::Date(days) => {
            NaiveDate::from_num_days_from_ce_opt(days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?)
        }
        _ => None,
    }
}

/// Days since 1970-01-01, the physical representation of a Date column.
pub fn days_since_epoch(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_iso_dates() {
        assert_eq!(parse_date("2024-01-15"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date(" 2024/01/15 "), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("20240115"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_datetimes_drop_time() {
        assert_eq!(parse_date("2024-01-15T10:30:00"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("2024-01-15 23:59:59.123"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("2024-01-15T10:30:00+02:00"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_month_first_before_day_first() {
        assert_eq!(parse_date("03/04/2024"), Some(ymd(2024, 3, 4)));
        assert_eq!(parse_date("25/12/2023"), Some(ymd(2023, 12, 25)));
        assert_eq!(parse_date("15-Jan-2024"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2024-13-45"), None);
    }

    #[test]
    fn test_epoch_days() {
        assert_eq!(days_since_epoch(ymd(1970, 1, 1)), 0);
        assert_eq!(days_since_epoch(ymd(2024, 1, 1)), 19_723);
        assert_eq!(coerce_date(&AnyValue::Date(19_723)), Some(ymd(2024, 1, 1)));
    }

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_iso_date(ymd(2024, 3, 5)), "2024-03-05");
    }
}
