//! Product dimension.

use polars::prelude::DataFrame;

use crate::error::Result;
use crate::frame::{has_column, numeric_column, set_f64_column};
use crate::normalization::{normalize_columns, round_to};

/// Coerce `price` to Float64 rounded to 2 decimals; unparseable prices become null.
pub fn curate_products(mut df: DataFrame) -> Result<DataFrame> {
    normalize_columns(&mut df)?;

    if has_column(&df, "price") {
        let prices = numeric_column(&df, "price")?
            .into_iter()
            .map(|price| price.map(|v| round_to(v, 2)))
            .collect();
        set_f64_column(&mut df, "price", prices)?;
    }
    Ok(df)
}
