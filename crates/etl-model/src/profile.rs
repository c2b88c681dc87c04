//! Data-quality profile of a curated dataset.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Completeness and duplication summary computed once per curated dataset.
///
/// Field names are the persisted keys of `profile_<table>.json` and the
/// header of `profile_<table>.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityProfile {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Null cells across the whole dataset.
    pub null_total: usize,
    /// Null percentage per column, in column order, rounded to 2 decimals.
    pub null_percent_by_col: IndexMap<String, f64>,
    /// Rows identical to an earlier row across all columns.
    pub duplicates: usize,
}

impl QualityProfile {
    /// Percentage of null cells over the whole dataset, rounded to 2 decimals.
    pub fn null_ratio_percent(&self) -> f64 {
        let cells = self.rows * self.cols;
        if cells == 0 {
            return 0.0;
        }
        let percent = self.null_total as f64 / cells as f64 * 100.0;
        (percent * 100.0).round() / 100.0
    }

    /// Columns with at least one null value.
    pub fn incomplete_columns(&self) -> impl Iterator<Item = (&str, f64)> {
        self.null_percent_by_col
            .iter()
            .filter(|(_, percent)| **percent > 0.0)
            .map(|(name, percent)| (name.as_str(), *percent))
    }
}
