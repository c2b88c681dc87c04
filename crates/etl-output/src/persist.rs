//! The persistence chain for one curated table.

use std::path::Path;

use etl_model::{ArtifactKind, PersistAttempt, QualityProfile, TableKind};
use polars::prelude::DataFrame;
use tracing::debug;

use crate::curated::{write_curated_csv, write_curated_parquet};
use crate::error::Result;
use crate::file::discard_artifact;
use crate::profile::{write_profile_csv, write_profile_json};

/// Reason recorded for the Parquet attempt when the curated CSV was not written.
pub const PRIMARY_NOT_WRITTEN: &str = "primary artifact not written";

/// Write every artifact of a table into `dir`, in [`ArtifactKind::CHAIN`] order.
///
/// A failed artifact is recorded and the chain moves on, with one exception:
/// when the curated CSV fails, the curated Parquet is not written and any
/// Parquet left from an earlier run is removed, so the curated dataset is
/// either complete or absent. Profile artifacts are always attempted. The
/// caller derives the table outcome from the returned attempts.
pub fn persist_table(
    dir: &Path,
    table: TableKind,
    df: &mut DataFrame,
    profile: &QualityProfile,
) -> Vec<PersistAttempt> {
    let mut primary_written = false;
    ArtifactKind::CHAIN
        .iter()
        .map(|&artifact| {
            let path = dir.join(artifact.file_name(table));
            if artifact == ArtifactKind::CuratedParquet && !primary_written {
                discard_artifact(&path);
                debug!(table = %table, artifact = %artifact, reason = PRIMARY_NOT_WRITTEN, "artifact skipped");
                return PersistAttempt::failed(artifact, path, PRIMARY_NOT_WRITTEN);
            }
            match write_artifact(artifact, &path, df, profile) {
                Ok(()) => {
                    debug!(table = %table, artifact = %artifact, path = %path.display(), "artifact written");
                    primary_written |= artifact.is_primary();
                    PersistAttempt::succeeded(artifact, path)
                }
                Err(err) => PersistAttempt::failed(artifact, path, err.to_string()),
            }
        })
        .collect()
}

fn write_artifact(
    artifact: ArtifactKind,
    path: &Path,
    df: &mut DataFrame,
    profile: &QualityProfile,
) -> Result<()> {
    match artifact {
        ArtifactKind::CuratedCsv => write_curated_csv(path, df),
        ArtifactKind::CuratedParquet => write_curated_parquet(path, df),
        ArtifactKind::ProfileJson => write_profile_json(path, profile),
        ArtifactKind::ProfileCsv => write_profile_csv(path, profile),
    }
}
