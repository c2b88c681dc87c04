//! The curation engine.
//!
//! Runs load → transform → profile → persist for every selected table, one
//! table at a time. Any failure is contained in the table's [`TableReport`];
//! the batch always runs to completion.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use etl_ingest::load_raw_table;
use etl_model::{CurateOptions, PersistAttempt, TableKind, TableReport};
use etl_output::{LoadReport, load_files, persist_table};
use etl_transform::{curate_table, profile_dataframe};
use tracing::{error, info, info_span, warn};

/// Sink for per-table progress messages.
///
/// The engine reports through this trait so that tests can observe exactly
/// what a run announced.
pub trait CurationLog {
    fn info(&self, table: TableKind, message: &str);
    fn warn(&self, table: TableKind, message: &str);
    fn error(&self, table: TableKind, message: &str);
}

/// Forwards engine messages to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl CurationLog for TracingLog {
    fn info(&self, table: TableKind, message: &str) {
        info!(table = %table, "{message}");
    }

    fn warn(&self, table: TableKind, message: &str) {
        warn!(table = %table, "{message}");
    }

    fn error(&self, table: TableKind, message: &str) {
        error!(table = %table, "{message}");
    }
}

/// Curate every table selected in `options`, in registry order.
///
/// Fails only when the curated directory cannot be created.
pub fn run_curation(options: &CurateOptions, log: &dyn CurationLog) -> Result<Vec<TableReport>> {
    fs::create_dir_all(&options.curated_dir).with_context(|| {
        format!(
            "create curated directory {}",
            options.curated_dir.display()
        )
    })?;

    Ok(options
        .tables
        .iter()
        .map(|&table| curate_one(table, options, log))
        .collect())
}

/// Copy what this run wrote into `load_dir`.
///
/// Only tables whose curated output is available contribute, and only the
/// artifacts they actually wrote. Files left in the curated directory by
/// earlier runs are never published.
pub fn publish_reports(
    reports: &[TableReport],
    load_dir: &Path,
) -> etl_output::Result<LoadReport> {
    let sources: Vec<PathBuf> = reports.iter().flat_map(TableReport::written_paths).collect();
    load_files(&sources, load_dir)
}

fn curate_one(table: TableKind, options: &CurateOptions, log: &dyn CurationLog) -> TableReport {
    let span = info_span!("curate", table = %table);
    let _guard = span.enter();
    let started = Instant::now();
    log.info(table, &format!("processing {}", table.description()));

    let raw_path = options.raw_path(table);
    let raw = match load_raw_table(&raw_path, options.limit) {
        Ok(raw) => raw,
        Err(err) if err.is_missing() => {
            log.warn(
                table,
                &format!("raw file not found at {}; table skipped", raw_path.display()),
            );
            return TableReport::skipped(table, err.to_string());
        }
        Err(err) => {
            log.error(table, &format!("unreadable input: {err}"));
            return TableReport::failed(table, None, err.to_string());
        }
    };
    let input_rows = raw.height();

    let mut curated = match curate_table(table, raw, options.limit) {
        Ok(curated) => curated,
        Err(err) => {
            log.error(table, &format!("transformation failed: {err}"));
            return TableReport::failed(table, Some(input_rows), err.to_string());
        }
    };

    let profile = match profile_dataframe(&curated) {
        Ok(profile) => profile,
        Err(err) => {
            log.error(table, &format!("profiling failed: {err}"));
            return TableReport::failed(table, Some(input_rows), err.to_string());
        }
    };
    log.info(
        table,
        &format!(
            "profile: {} rows, {} cols, {} nulls, {} duplicates",
            profile.rows, profile.cols, profile.null_total, profile.duplicates
        ),
    );

    let attempts = persist_table(&options.curated_dir, table, &mut curated, &profile);
    for attempt in &attempts {
        log_attempt(table, attempt, log);
    }

    let report = TableReport::persisted(table, input_rows, profile, attempts);
    let duration_ms = started.elapsed().as_millis();
    info!(table = %table, status = %report.status, duration_ms, "table finished");
    log.info(table, &format!("finished: {}", report.status));
    report
}

fn log_attempt(table: TableKind, attempt: &PersistAttempt, log: &dyn CurationLog) {
    match &attempt.error {
        None => log.info(
            table,
            &format!("saved {}: {}", attempt.artifact, attempt.path.display()),
        ),
        Some(reason) if attempt.artifact.is_primary() => log.error(
            table,
            &format!("could not save {}: {reason}", attempt.artifact),
        ),
        Some(reason) => log.warn(
            table,
            &format!("could not save {} (continuing): {reason}", attempt.artifact),
        ),
    }
}
