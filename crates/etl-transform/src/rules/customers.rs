//! Customer dimension.

use polars::prelude::DataFrame;

use crate::error::{Result, TransformError};
use crate::frame::{filter_rows, has_column, set_i64_column, text_column};
use crate::normalization::columns::rename_columns;
use crate::normalization::{normalize_columns, parse_identifier};

/// Canonical business name of the customer key.
pub const CUSTOMER_ID: &str = "id_cliente";

const RENAMES: [(&str, &str); 3] = [
    ("customerid", CUSTOMER_ID),
    ("firstname", "nombre"),
    ("lastname", "apellido"),
];

/// Rename key columns to business names, drop rows without a customer id and
/// store the id as Int64.
///
/// A blank id counts as missing. An id that is present but not an integer
/// fails the table.
pub fn curate_customers(mut df: DataFrame) -> Result<DataFrame> {
    normalize_columns(&mut df)?;
    rename_columns(&mut df, &RENAMES)?;

    if !has_column(&df, CUSTOMER_ID) {
        return Ok(df);
    }

    let raw_ids = text_column(&df, CUSTOMER_ID)?;
    let mut keep = Vec::with_capacity(raw_ids.len());
    let mut ids = Vec::with_capacity(raw_ids.len());
    for (row, value) in raw_ids.iter().enumerate() {
        let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) else {
            keep.push(false);
            continue;
        };
        let id = parse_identifier(value).ok_or_else(|| TransformError::InvalidIdentifier {
            column: CUSTOMER_ID.to_string(),
            value: value.to_string(),
            row,
        })?;
        keep.push(true);
        ids.push(id);
    }

    filter_rows(&mut df, &keep)?;
    set_i64_column(&mut df, CUSTOMER_ID, ids)?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{AnyValue, Column, DataType, NamedFrom, Series};

    fn customers(ids: Vec<Option<&str>>) -> DataFrame {
        let names: Vec<Option<&str>> = (0..ids.len()).map(|_| Some("Ana")).collect();
        let columns: Vec<Column> = vec![
            Series::new("CustomerID".into(), ids).into(),
            Series::new(" FirstName".into(), names).into(),
        ];
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn test_renames_and_casts_identifier() {
        let df = curate_customers(customers(vec![Some("7"), Some(" 8.0 ")])).unwrap();
        let names: Vec<String> = df
            .get_column_names()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(names, vec!["id_cliente", "nombre"]);
        let ids = df.column(CUSTOMER_ID).unwrap();
        assert_eq!(ids.dtype(), &DataType::Int64);
        assert_eq!(ids.get(1).unwrap(), AnyValue::Int64(8));
    }

    #[test]
    fn test_drops_missing_identifiers() {
        let df = curate_customers(customers(vec![Some("1"), None, Some("  "), Some("4")])).unwrap();
        assert_eq!(df.height(), 2);
        let ids = df.column(CUSTOMER_ID).unwrap();
        assert_eq!(ids.get(0).unwrap(), AnyValue::Int64(1));
        assert_eq!(ids.get(1).unwrap(), AnyValue::Int64(4));
    }

    #[test]
    fn test_rejects_non_integer_identifier() {
        let err = curate_customers(customers(vec![Some("1"), Some("C-2")])).unwrap_err();
        assert!(matches!(
            err,
            TransformError::InvalidIdentifier { ref value, row: 1, .. } if value == "C-2"
        ));
    }

    #[test]
    fn test_without_identifier_column() {
        let columns: Vec<Column> = vec![Series::new("City".into(), vec!["Lima"]).into()];
        let df = curate_customers(DataFrame::new(columns).unwrap()).unwrap();
        assert_eq!(df.height(), 1);
        assert!(df.column("city").is_ok());
    }
}
