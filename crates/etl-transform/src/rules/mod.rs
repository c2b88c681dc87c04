//! Per-table cleaning rules.
//!
//! Each table of the registry has exactly one rule. Every rule normalizes the
//! column names first and then applies its table-specific logic; rules are
//! pure functions of the raw frame.

mod customers;
mod invoices;
mod products;

use etl_ingest::apply_row_limit;
use etl_model::TableKind;
use polars::prelude::DataFrame;
use tracing::debug;

use crate::error::Result;

pub use customers::curate_customers;
pub use invoices::curate_invoices;
pub use products::curate_products;

/// A table-specific transformation.
pub type TableRule = fn(DataFrame) -> Result<DataFrame>;

/// The rule registered for a table.
pub fn rule_for(table: TableKind) -> TableRule {
    match table {
        TableKind::Customers => curate_customers,
        TableKind::Products => curate_products,
        TableKind::Invoices => curate_invoices,
    }
}

/// Truncate `raw` to the first `limit` rows, then apply the table's rule.
pub fn curate_table(table: TableKind, raw: DataFrame, limit: Option<usize>) -> Result<DataFrame> {
    let input = apply_row_limit(raw, limit);
    let input_rows = input.height();
    let curated = rule_for(table)(input)?;
    debug!(
        table = %table,
        input_rows,
        output_rows = curated.height(),
        "table rule applied"
    );
    Ok(curated)
}
