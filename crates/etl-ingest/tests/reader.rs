//! Integration tests for raw table loading.

use std::fs;

use etl_ingest::{IngestError, load_raw_table};
use tempfile::TempDir;

fn write_raw(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn limit_keeps_prefix_in_source_order() {
    let dir = TempDir::new().unwrap();
    let path = write_raw(
        &dir,
        "fact_Invoices.csv",
        "invoice,quantity\nA,1\nB,2\nC,3\nD,4\nE,5\n",
    );

    let df = load_raw_table(&path, Some(3)).unwrap();

    assert_eq!(df.height(), 3);
    let invoices: Vec<Option<&str>> = df
        .column("invoice")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(invoices, vec![Some("A"), Some("B"), Some("C")]);
}

#[test]
fn no_limit_loads_everything() {
    let dir = TempDir::new().unwrap();
    let path = write_raw(&dir, "dim_Products.csv", "productid,price\n1,2.5\n2,3.5\n");

    let df = load_raw_table(&path, None).unwrap();

    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 2);
}

#[test]
fn zero_limit_keeps_schema_only() {
    let dir = TempDir::new().unwrap();
    let path = write_raw(&dir, "dim_Products.csv", "productid,price\n1,2.5\n2,3.5\n");

    let df = load_raw_table(&path, Some(0)).unwrap();

    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 2);
}

#[test]
fn bom_prefixed_header_is_readable() {
    let dir = TempDir::new().unwrap();
    let path = write_raw(
        &dir,
        "dim_Customers.csv",
        "\u{feff}CustomerID,FirstName\n1,Ana\n",
    );

    let df = load_raw_table(&path, None).unwrap();

    let first = df.get_column_names()[0].to_string();
    assert_eq!(first.trim_start_matches('\u{feff}'), "CustomerID");
    assert_eq!(df.height(), 1);
}

#[test]
fn missing_file_is_reported_as_missing() {
    let dir = TempDir::new().unwrap();
    let err = load_raw_table(&dir.path().join("dim_Customers.csv"), None).unwrap_err();

    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn empty_file_is_unreadable_not_missing() {
    let dir = TempDir::new().unwrap();
    let path = write_raw(&dir, "fact_Invoices.csv", "");

    let err = load_raw_table(&path, None).unwrap_err();

    assert!(matches!(err, IngestError::EmptyCsv { .. }));
    assert!(!err.is_missing());
}
