//! Core types shared by the curated ETL crates.
//!
//! - **table**: the fixed table registry and its file naming
//! - **profile**: the per-table data-quality profile record
//! - **processing**: persistence attempts and per-table outcomes
//! - **options**: directories, row limit and table selection for a run

pub mod error;
pub mod options;
pub mod processing;
pub mod profile;
pub mod table;

pub use error::{ModelError, Result};
pub use options::{CurateOptions, CURATED_DIR_NAME, LOAD_DIR_NAME, RAW_DIR_NAME};
pub use processing::{ArtifactKind, PersistAttempt, PersistLevel, TableReport, TableStatus};
pub use profile::QualityProfile;
pub use table::TableKind;
