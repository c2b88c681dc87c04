//! The table registry.
//!
//! The curated stage knows exactly three tables of the SpaceParts star schema.
//! [`TableKind::ALL`] is the registry and fixes the processing order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A logical table the curation engine knows how to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TableKind {
    /// Customer dimension (`dim_Customers`).
    Customers,
    /// Product dimension (`dim_Products`).
    Products,
    /// Invoice fact table (`fact_Invoices`).
    Invoices,
}

impl TableKind {
    /// All tables in registry (processing) order.
    pub const ALL: [TableKind; 3] = [TableKind::Customers, TableKind::Products, TableKind::Invoices];

    /// Logical identifier, also the stem of every file name for the table.
    pub fn name(self) -> &'static str {
        match self {
            TableKind::Customers => "dim_Customers",
            TableKind::Products => "dim_Products",
            TableKind::Invoices => "fact_Invoices",
        }
    }

    /// Human-readable description for summaries.
    pub fn description(self) -> &'static str {
        match self {
            TableKind::Customers => "Customer dimension",
            TableKind::Products => "Product dimension",
            TableKind::Invoices => "Invoice fact table",
        }
    }

    /// File name of the raw extract, e.g. `dim_Customers.csv`.
    pub fn raw_file_name(self) -> String {
        format!("{}.csv", self.name())
    }

    /// File name of a curated artifact, e.g. `fact_Invoices_curated.parquet`.
    pub fn curated_file_name(self, extension: &str) -> String {
        format!("{}_curated.{extension}", self.name())
    }

    /// File name of a profile artifact, e.g. `profile_dim_Products.json`.
    pub fn profile_file_name(self, extension: &str) -> String {
        format!("profile_{}.{extension}", self.name())
    }

    fn short_alias(self) -> &'static str {
        match self {
            TableKind::Customers => "customers",
            TableKind::Products => "products",
            TableKind::Invoices => "invoices",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableKind {
    type Err = ModelError;

    /// Accepts the logical name or a short alias, case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        TableKind::ALL
            .into_iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(trimmed)
                    || kind.short_alias().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ModelError::UnknownTable(trimmed.to_string()))
    }
}
