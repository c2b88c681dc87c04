//! Normalization functions for curated data.
//!
//! - **columns**: snake_case-equivalent column names
//! - **numeric**: lenient numeric coercion and decimal rounding
//! - **datetime**: date parsing and ISO 8601 formatting

pub mod columns;
pub mod datetime;
pub mod numeric;

pub use columns::{normalize_column_name, normalize_columns};
pub use datetime::{coerce_date, days_since_epoch, format_iso_date, parse_date};
pub use numeric::{coerce_numeric, parse_identifier, parse_numeric, round_to};
