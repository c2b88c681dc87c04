//! Configuration for a curation run.

use std::path::{Path, PathBuf};

use crate::table::TableKind;

/// Raw-layer directory name under the data root.
pub const RAW_DIR_NAME: &str = "raw";
/// Curated-layer directory name under the data root.
pub const CURATED_DIR_NAME: &str = "curated";
/// Load-layer directory name under the data root.
pub const LOAD_DIR_NAME: &str = "load";

/// Options controlling one curation batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurateOptions {
    /// Directory holding `<table>.csv` raw extracts.
    pub raw_dir: PathBuf,
    /// Directory receiving curated datasets and profiles.
    pub curated_dir: PathBuf,
    /// Keep only the first `limit` rows of each raw table.
    ///
    /// Intended for demos and tests: the curated output and its profile then
    /// describe a prefix of the source, not a representative sample.
    pub limit: Option<usize>,
    /// Tables to process, in registry order.
    pub tables: Vec<TableKind>,
}

impl CurateOptions {
    pub fn new(raw_dir: impl Into<PathBuf>, curated_dir: impl Into<PathBuf>) -> Self {
        Self {
            raw_dir: raw_dir.into(),
            curated_dir: curated_dir.into(),
            limit: None,
            tables: TableKind::ALL.to_vec(),
        }
    }

    /// Standard `<data>/raw` and `<data>/curated` layout.
    pub fn from_data_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(RAW_DIR_NAME), data_dir.join(CURATED_DIR_NAME))
    }

    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Restrict the run to a subset of tables.
    ///
    /// Order and duplicates are normalized to registry order. An empty
    /// selection keeps the full registry.
    #[must_use]
    pub fn with_tables(mut self, tables: &[TableKind]) -> Self {
        if tables.is_empty() {
            self.tables = TableKind::ALL.to_vec();
        } else {
            self.tables = TableKind::ALL
                .into_iter()
                .filter(|kind| tables.contains(kind))
                .collect();
        }
        self
    }

    /// Path of the raw extract for a table.
    pub fn raw_path(&self, table: TableKind) -> PathBuf {
        self.raw_dir.join(table.raw_file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_layout() {
        let options = CurateOptions::from_data_dir(Path::new("data"));
        assert_eq!(options.raw_dir, Path::new("data").join("raw"));
        assert_eq!(options.curated_dir, Path::new("data").join("curated"));
        assert_eq!(options.limit, None);
        assert_eq!(options.tables, TableKind::ALL.to_vec());
        assert_eq!(
            options.raw_path(TableKind::Products),
            Path::new("data").join("raw").join("dim_Products.csv")
        );
    }

    #[test]
    fn table_selection_follows_registry_order() {
        let options = CurateOptions::new("raw", "curated").with_tables(&[
            TableKind::Invoices,
            TableKind::Customers,
            TableKind::Invoices,
        ]);
        assert_eq!(options.tables, vec![TableKind::Customers, TableKind::Invoices]);
    }

    #[test]
    fn empty_selection_keeps_registry() {
        let options = CurateOptions::new("raw", "curated").with_tables(&[]);
        assert_eq!(options.tables.len(), 3);
    }
}
