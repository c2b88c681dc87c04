//! Column-name normalization.

use std::collections::HashSet;

use polars::prelude::DataFrame;

use crate::error::{Result, TransformError};

/// Normalizes a raw column name.
///
/// Trims surrounding whitespace (and a stray UTF-8 BOM left by the extract),
/// replaces each remaining whitespace character with `_`, and lowercases.
/// Applying it to its own output is a no-op.
///
/// # Examples
///
/// ```
/// use etl_transform::normalize_column_name;
///
/// assert_eq!(normalize_column_name("  Net Invoice Value "), "net_invoice_value");
/// assert_eq!(normalize_column_name("\u{feff}CustomerID"), "customerid");
/// assert_eq!(normalize_column_name("unitprice"), "unitprice");
/// ```
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{feff}')
        .chars()
        .map(|ch| if ch.is_whitespace() { '_' } else { ch })
        .collect::<String>()
        .to_lowercase()
}

/// Normalizes every column name of a DataFrame in place.
///
/// Fails without touching the frame when two columns would end up with the
/// same name.
pub fn normalize_columns(df: &mut DataFrame) -> Result<()> {
    let renames: Vec<(String, String)> = df
        .get_column_names()
        .into_iter()
        .map(|name| (name.to_string(), normalize_column_name(name)))
        .collect();

    let mut seen = HashSet::with_capacity(renames.len());
    for (_, normalized) in &renames {
        if !seen.insert(normalized.as_str()) {
            return Err(TransformError::DuplicateColumn {
                column: normalized.clone(),
            });
        }
    }

    // Normalized names are unique and fixed points of the rule, so renaming
    // one column at a time never collides with a column not yet renamed.
    for (original, normalized) in renames {
        if original != normalized {
            df.rename(&original, normalized.into())?;
        }
    }
    Ok(())
}

/// Renames columns found in `renames` (`(from, to)` pairs); absent columns are ignored.
pub fn rename_columns(df: &mut DataFrame, renames: &[(&str, &str)]) -> Result<()> {
    for (from, to) in renames {
        if df.get_column_index(from).is_none() {
            continue;
        }
        if df.get_column_index(to).is_some() {
            return Err(TransformError::DuplicateColumn {
                column: (*to).to_string(),
            });
        }
        df.rename(from, (*to).into())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, NamedFrom, Series};

    fn frame(names: &[&str]) -> DataFrame {
        let columns: Vec<Column> = names
            .iter()
            .map(|name| Series::new((*name).into(), vec!["x"]).into())
            .collect();
        DataFrame::new(columns).unwrap()
    }

    fn names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name("Customer ID"), "customer_id");
        assert_eq!(normalize_column_name("  Price  "), "price");
        assert_eq!(normalize_column_name("Order\tDate"), "order_date");
        assert_eq!(normalize_column_name("net invoice  cogs"), "net_invoice__cogs");
        assert_eq!(normalize_column_name(""), "");
    }

    #[test]
    fn test_normalize_columns() {
        let mut df = frame(&["CustomerID", " First Name", "LastName "]);
        normalize_columns(&mut df).unwrap();
        assert_eq!(names(&df), vec!["customerid", "first_name", "lastname"]);
    }

    #[test]
    fn test_normalize_columns_rejects_collisions() {
        let mut df = frame(&["Price", " price"]);
        let err = normalize_columns(&mut df).unwrap_err();
        assert!(matches!(err, TransformError::DuplicateColumn { column } if column == "price"));
        assert_eq!(names(&df), vec!["Price", " price"]);
    }

    #[test]
    fn test_rename_columns() {
        let mut df = frame(&["customerid", "firstname", "city"]);
        rename_columns(&mut df, &[("customerid", "id_cliente"), ("lastname", "apellido")])
            .unwrap();
        assert_eq!(names(&df), vec!["id_cliente", "firstname", "city"]);
    }

    #[test]
    fn test_rename_columns_rejects_existing_target() {
        let mut df = frame(&["customerid", "id_cliente"]);
        let err = rename_columns(&mut df, &[("customerid", "id_cliente")]).unwrap_err();
        assert!(matches!(err, TransformError::DuplicateColumn { .. }));
    }
}
