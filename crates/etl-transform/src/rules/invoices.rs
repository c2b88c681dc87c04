//! Invoice fact table.
//!
//! Column roles:
//!
//! | column                | treatment                                        |
//! |-----------------------|--------------------------------------------------|
//! | first `*date*` column | Date; rows without a date dropped; `date_iso`   |
//! | `quantity`            | numeric, nulls to 0, truncated to Int64          |
//! | `unitprice`           | numeric, rounded to 2 decimals                   |
//! | `net_invoice_value`   | numeric, nulls to 0, absolute value              |
//! | `net_invoice_cogs`    | numeric, nulls to 0, absolute value              |
//!
//! Derived: `gross_invoice_value` and, when COGS are present, `profit`.

use polars::prelude::DataFrame;

use crate::error::Result;
use crate::frame::{
    date_column, filter_rows, has_column, numeric_column, set_date_column, set_f64_column,
    set_i64_column, set_string_column,
};
use crate::normalization::{format_iso_date, normalize_columns, round_to};

const QUANTITY: &str = "quantity";
const UNIT_PRICE: &str = "unitprice";
const NET_VALUE: &str = "net_invoice_value";
const NET_COGS: &str = "net_invoice_cogs";
const GROSS_VALUE: &str = "gross_invoice_value";
const PROFIT: &str = "profit";
const DATE_ISO: &str = "date_iso";

/// Clean the invoice fact table and derive gross value and profit.
pub fn curate_invoices(mut df: DataFrame) -> Result<DataFrame> {
    normalize_columns(&mut df)?;

    if let Some(date_col) = date_column_name(&df) {
        curate_date(&mut df, &date_col)?;
    }

    let quantity = if has_column(&df, QUANTITY) {
        let values: Vec<i64> = numeric_column(&df, QUANTITY)?
            .into_iter()
            .map(|v| v.unwrap_or(0.0).trunc() as i64)
            .collect();
        set_i64_column(&mut df, QUANTITY, values.clone())?;
        Some(values)
    } else {
        None
    };

    let unit_price = if has_column(&df, UNIT_PRICE) {
        let values: Vec<Option<f64>> = numeric_column(&df, UNIT_PRICE)?
            .into_iter()
            .map(|v| v.map(|p| round_to(p, 2)))
            .collect();
        set_f64_column(&mut df, UNIT_PRICE, values.clone())?;
        Some(values)
    } else {
        None
    };

    let net_value = absolute_amounts(&mut df, NET_VALUE)?;
    let net_cogs = absolute_amounts(&mut df, NET_COGS)?;

    let gross: Vec<Option<f64>> = match (quantity, unit_price) {
        (Some(quantity), Some(unit_price)) => quantity
            .iter()
            .zip(&unit_price)
            .map(|(q, p)| p.map(|p| round_to(*q as f64 * p, 2)))
            .collect(),
        _ => match net_value {
            Some(net) => net.into_iter().map(Some).collect(),
            None => vec![Some(0.0); df.height()],
        },
    };

    let profit: Option<Vec<Option<f64>>> = net_cogs.map(|cogs| {
        gross
            .iter()
            .zip(&cogs)
            .map(|(g, c)| g.map(|g| g - c))
            .collect()
    });

    set_f64_column(&mut df, GROSS_VALUE, gross)?;
    if let Some(profit) = profit {
        set_f64_column(&mut df, PROFIT, profit)?;
    }
    Ok(df)
}

/// First column, in column order, whose name contains `date`.
pub(crate) fn date_column_name(df: &DataFrame) -> Option<String> {
    df.get_column_names()
        .into_iter()
        .find(|name| name.contains("date"))
        .map(ToString::to_string)
}

fn curate_date(df: &mut DataFrame, column: &str) -> Result<()> {
    let dates = date_column(df, column)?;
    let keep: Vec<bool> = dates.iter().map(Option::is_some).collect();
    set_date_column(df, column, &dates)?;
    filter_rows(df, &keep)?;

    let iso: Vec<String> = dates.into_iter().flatten().map(format_iso_date).collect();
    set_string_column(df, DATE_ISO, iso)
}

/// Replace a monetary column by its absolute values, nulls as 0.
fn absolute_amounts(df: &mut DataFrame, column: &str) -> Result<Option<Vec<f64>>> {
    if !has_column(df, column) {
        return Ok(None);
    }
    let values: Vec<f64> = numeric_column(df, column)?
        .into_iter()
        .map(|v| v.unwrap_or(0.0).abs())
        .collect();
    set_f64_column(df, column, values.iter().copied().map(Some).collect())?;
    Ok(Some(values))
}
