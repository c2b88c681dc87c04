use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use etl_cli::engine::{TracingLog, publish_reports, run_curation};
use etl_model::{CURATED_DIR_NAME, CurateOptions, LOAD_DIR_NAME, RAW_DIR_NAME, TableKind, TableReport};
use etl_output::{LoadReport, load_layer};
use tracing::{info, info_span};

use crate::cli::{CurateArgs, LoadArgs, RunArgs};
use crate::summary::apply_table_style;

pub fn run_tables() {
    let mut table = Table::new();
    table.set_header(vec!["Table", "Description", "Raw file"]);
    apply_table_style(&mut table);
    for kind in TableKind::ALL {
        table.add_row(vec![
            kind.name().to_string(),
            kind.description().to_string(),
            kind.raw_file_name(),
        ]);
    }
    println!("{table}");
}

pub fn run_curate(args: &CurateArgs) -> Result<Vec<TableReport>> {
    let options = curate_options(args);
    let span = info_span!("curate_stage", curated_dir = %options.curated_dir.display());
    let _guard = span.enter();
    let started = Instant::now();
    info!(
        raw_dir = %options.raw_dir.display(),
        tables = options.tables.len(),
        limit = ?options.limit,
        "starting curated stage"
    );

    let reports = run_curation(&options, &TracingLog).context("curated stage")?;

    info!(
        duration_ms = started.elapsed().as_millis(),
        "curated stage finished"
    );
    Ok(reports)
}

pub fn run_load(args: &LoadArgs) -> Result<LoadReport> {
    let curated_dir = resolve_dir(args.curated_dir.as_ref(), &args.data_dir, CURATED_DIR_NAME);
    let load_dir = resolve_dir(args.load_dir.as_ref(), &args.data_dir, LOAD_DIR_NAME);
    load(&curated_dir, &load_dir)
}

pub fn run_pipeline(args: &RunArgs) -> Result<(Vec<TableReport>, LoadReport)> {
    let reports = run_curate(&args.curate)?;
    let load_dir = resolve_dir(args.load_dir.as_ref(), &args.curate.data_dir, LOAD_DIR_NAME);

    let span = info_span!("load_stage", load_dir = %load_dir.display());
    let _guard = span.enter();
    let load_report = publish_reports(&reports, &load_dir)
        .with_context(|| format!("publish curated files to {}", load_dir.display()))?;
    log_load(&load_report);
    Ok((reports, load_report))
}

fn load(curated_dir: &Path, load_dir: &Path) -> Result<LoadReport> {
    let span = info_span!("load_stage", load_dir = %load_dir.display());
    let _guard = span.enter();
    let report = load_layer(curated_dir, load_dir)
        .with_context(|| format!("load curated files from {}", curated_dir.display()))?;
    log_load(&report);
    Ok(report)
}

fn log_load(report: &LoadReport) {
    info!(
        copied = report.copied.len(),
        failed = report.failures.len(),
        "load stage finished"
    );
}

fn curate_options(args: &CurateArgs) -> CurateOptions {
    let raw_dir = resolve_dir(args.raw_dir.as_ref(), &args.data_dir, RAW_DIR_NAME);
    let curated_dir = resolve_dir(args.curated_dir.as_ref(), &args.data_dir, CURATED_DIR_NAME);
    CurateOptions::new(raw_dir, curated_dir)
        .with_limit(args.limit)
        .with_tables(&args.tables)
}

fn resolve_dir(explicit: Option<&PathBuf>, data_dir: &Path, name: &str) -> PathBuf {
    explicit.cloned().unwrap_or_else(|| data_dir.join(name))
}
