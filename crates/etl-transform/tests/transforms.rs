//! Table rule and profile tests against fixture rows.

use etl_model::TableKind;
use etl_transform::{curate_table, profile_dataframe, rule_for};
use polars::prelude::{AnyValue, Column, DataFrame, DataType, NamedFrom, Series};

fn frame(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
    let columns: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into())
        .collect();
    DataFrame::new(columns).unwrap()
}

fn f64_at(df: &DataFrame, column: &str, row: usize) -> Option<f64> {
    match df.column(column).unwrap().get(row).unwrap() {
        AnyValue::Float64(v) => Some(v),
        AnyValue::Null => None,
        other => panic!("unexpected value {other:?} in {column}"),
    }
}

fn i64_at(df: &DataFrame, column: &str, row: usize) -> i64 {
    match df.column(column).unwrap().get(row).unwrap() {
        AnyValue::Int64(v) => v,
        other => panic!("unexpected value {other:?} in {column}"),
    }
}

fn raw_invoices() -> DataFrame {
    frame(vec![
        (
            "Date",
            vec![Some("2024-01-05"), Some("2024-01-06"), Some("bad"), Some("2024-01-07")],
        ),
        ("Quantity", vec![Some("3"), Some("2"), Some("1"), None]),
        ("UnitPrice", vec![Some("10.00"), Some("4.125"), Some("1"), Some("9.99")]),
        (
            "Net Invoice Value",
            vec![Some("-30.00"), Some("8.25"), Some("1"), None],
        ),
        (
            "Net Invoice COGS",
            vec![Some("-18.00"), Some("x"), Some("1"), Some("-2.5")],
        ),
    ])
}

// =========================================================================
// Invoice fact table
// =========================================================================

#[test]
fn test_invoice_scenario() {
    let raw = frame(vec![
        ("date", vec![Some("2024-01-05")]),
        ("quantity", vec![Some("3")]),
        ("unitprice", vec![Some("10.00")]),
        ("net_invoice_value", vec![Some("-30.00")]),
        ("net_invoice_cogs", vec![Some("-18.00")]),
    ]);
    let df = curate_table(TableKind::Invoices, raw, None).unwrap();

    assert_eq!(df.height(), 1);
    assert_eq!(df.column("date").unwrap().dtype(), &DataType::Date);
    assert_eq!(
        df.column("date_iso").unwrap().get(0).unwrap(),
        AnyValue::String("2024-01-05")
    );
    assert_eq!(i64_at(&df, "quantity", 0), 3);
    assert_eq!(f64_at(&df, "unitprice", 0), Some(10.0));
    assert_eq!(f64_at(&df, "net_invoice_value", 0), Some(30.0));
    assert_eq!(f64_at(&df, "net_invoice_cogs", 0), Some(18.0));
    assert_eq!(f64_at(&df, "gross_invoice_value", 0), Some(30.0));
    assert_eq!(f64_at(&df, "profit", 0), Some(12.0));
}

#[test]
fn test_invoice_column_order() {
    let df = curate_table(TableKind::Invoices, raw_invoices(), None).unwrap();
    let names: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        names,
        vec![
            "date",
            "quantity",
            "unitprice",
            "net_invoice_value",
            "net_invoice_cogs",
            "date_iso",
            "gross_invoice_value",
            "profit",
        ]
    );
}

#[test]
fn test_invoice_amounts_are_non_negative() {
    let df = curate_table(TableKind::Invoices, raw_invoices(), None).unwrap();
    for row in 0..df.height() {
        assert!(f64_at(&df, "net_invoice_value", row).unwrap() >= 0.0);
        assert!(f64_at(&df, "net_invoice_cogs", row).unwrap() >= 0.0);
    }
}

#[test]
fn test_invoice_gross_and_profit() {
    let df = curate_table(TableKind::Invoices, raw_invoices(), None).unwrap();
    assert_eq!(df.height(), 3);
    for row in 0..df.height() {
        let quantity = i64_at(&df, "quantity", row) as f64;
        let unit_price = f64_at(&df, "unitprice", row).unwrap();
        let gross = f64_at(&df, "gross_invoice_value", row).unwrap();
        let cogs = f64_at(&df, "net_invoice_cogs", row).unwrap();
        assert_eq!(gross, (quantity * unit_price * 100.0).round_ties_even() / 100.0);
        assert_eq!(f64_at(&df, "profit", row), Some(gross - cogs));
    }
    // Missing quantity counts as zero.
    assert_eq!(f64_at(&df, "gross_invoice_value", 2), Some(0.0));
}

#[test]
fn test_profit_absent_without_cogs() {
    let raw = frame(vec![
        ("quantity", vec![Some("1")]),
        ("unitprice", vec![Some("2")]),
    ]);
    let df = curate_table(TableKind::Invoices, raw, None).unwrap();
    assert!(df.column("gross_invoice_value").is_ok());
    assert!(df.column("profit").is_err());
}

// =========================================================================
// Dimensions
// =========================================================================

#[test]
fn test_customers_missing_identifier_excluded() {
    let raw = frame(vec![
        ("CustomerID", vec![Some("1"), None, Some("3")]),
        ("FirstName", vec![Some("Ana"), Some("Luis"), Some("Eva")]),
        ("LastName", vec![Some("Diaz"), Some("Paz"), None]),
    ]);
    let df = rule_for(TableKind::Customers)(raw).unwrap();

    assert_eq!(df.height(), 2);
    assert_eq!(i64_at(&df, "id_cliente", 0), 1);
    assert_eq!(i64_at(&df, "id_cliente", 1), 3);
    assert_eq!(
        df.column("nombre").unwrap().get(1).unwrap(),
        AnyValue::String("Eva")
    );
    assert!(df.column("apellido").unwrap().get(1).unwrap().is_null());
}

#[test]
fn test_products_price_rounding() {
    let raw = frame(vec![("Price", vec![Some(" 3.14159 "), Some("1,234.50")])]);
    let df = curate_table(TableKind::Products, raw, None).unwrap();
    assert_eq!(f64_at(&df, "price", 0), Some(3.14));
    assert_eq!(f64_at(&df, "price", 1), None);
}

#[test]
fn test_colliding_columns_fail_the_table() {
    let raw = frame(vec![
        ("Price", vec![Some("1")]),
        (" price", vec![Some("2")]),
    ]);
    assert!(curate_table(TableKind::Products, raw, None).is_err());
}

// =========================================================================
// Row limit and profile
// =========================================================================

#[test]
fn test_limit_keeps_first_rows() {
    let raw = frame(vec![(
        "CustomerID",
        vec![Some("1"), Some("2"), Some("3"), Some("4"), Some("5")],
    )]);
    let df = curate_table(TableKind::Customers, raw, Some(2)).unwrap();
    assert_eq!(df.height(), 2);
    assert_eq!(i64_at(&df, "id_cliente", 1), 2);
}

#[test]
fn test_profile_invariants() {
    let df = curate_table(TableKind::Invoices, raw_invoices(), None).unwrap();
    let profile = profile_dataframe(&df).unwrap();

    assert_eq!(profile.rows, df.height());
    assert_eq!(profile.cols, df.width());
    assert!(profile.duplicates <= profile.rows);

    let estimated: f64 = profile
        .null_percent_by_col
        .values()
        .map(|percent| percent / 100.0 * profile.rows as f64)
        .sum();
    assert!((estimated - profile.null_total as f64).abs() < 0.05 * profile.cols as f64);
}

#[test]
fn test_profile_counts_full_row_duplicates() {
    let raw = frame(vec![
        ("id", vec![Some("1"), Some("1"), Some("2"), Some("1")]),
        ("name", vec![Some("a"), Some("a"), Some("b"), Some("a")]),
    ]);
    let profile = profile_dataframe(&raw).unwrap();
    assert_eq!(profile.duplicates, 2);
    assert_eq!(profile.null_total, 0);
}
