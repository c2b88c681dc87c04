//! Curated-layer transformation for the SpaceParts star schema.
//!
//! This crate turns a raw table (every column as text) into an
//! analytics-ready dataset:
//!
//! - **normalization**: column-name normalization, numeric and date coercion
//! - **rules**: one pure rule per table, selected with [`rule_for`]
//! - **profile**: the data-quality profile computed after the rule ran
//!
//! # Example
//!
//! ```ignore
//! use etl_model::TableKind;
//! use etl_transform::{curate_table, profile_dataframe};
//!
//! let curated = curate_table(TableKind::Invoices, raw, Some(1000))?;
//! let profile = profile_dataframe(&curated)?;
//! ```
//!
//! Values that fail a coercion become nulls in place; only structural
//! problems (colliding column names, a non-integer customer identifier) are
//! reported as [`TransformError`].

mod error;
mod frame;
pub mod normalization;
mod profile;
pub mod rules;

pub use error::{Result, TransformError};
pub use normalization::{normalize_column_name, normalize_columns};
pub use profile::profile_dataframe;
pub use rules::{TableRule, curate_table, rule_for};
