//! Curated-layer persistence for the SpaceParts ETL.
//!
//! - **curated**: the curated dataset as CSV (UTF-8 with BOM) and Parquet
//! - **profile**: the quality profile as JSON and as a single-row CSV
//! - **persist**: the ordered persistence chain for one table
//! - **load**: copy of the curated layer into the load layer
//!
//! Every artifact is written to a staging file and renamed into place, so a
//! failed write leaves nothing at the artifact path.

pub mod curated;
pub mod error;
mod file;
pub mod load;
pub mod persist;
pub mod profile;

// === Writers ===
pub use curated::{write_curated_csv, write_curated_parquet};
pub use profile::{write_profile_csv, write_profile_json};

// === Stages ===
pub use file::discard_artifact;
pub use load::{LoadReport, load_files, load_layer};
pub use persist::persist_table;

// === Errors ===
pub use error::{OutputError, Result};
