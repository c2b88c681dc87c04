//! Raw-layer ingestion for the curated ETL.
//!
//! Each logical table arrives from the extract stage as one CSV file in the
//! raw directory. This crate locates that file, checks its encoding, and reads
//! it into a Polars `DataFrame` with every column as text, so that type
//! coercion is left entirely to the transformation rules.
//!
//! # Example
//!
//! ```ignore
//! use etl_ingest::load_raw_table;
//! use etl_model::{CurateOptions, TableKind};
//!
//! let options = CurateOptions::from_data_dir("data".as_ref()).with_limit(Some(1000));
//! let df = load_raw_table(&options.raw_path(TableKind::Invoices), options.limit)?;
//! ```

mod error;
mod reader;
mod values;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{apply_row_limit, load_raw_table, read_raw_csv, validate_encoding};

// === AnyValue helpers ===
pub use values::{any_to_f64, any_to_text, format_numeric, parse_f64};
