//! Per-table processing outcomes.
//!
//! Persistence is an ordered chain of attempts. The curated CSV is the
//! primary artifact; every other artifact is secondary and its failure only
//! degrades the table outcome.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::profile::QualityProfile;
use crate::table::TableKind;

/// An artifact written for a curated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtifactKind {
    /// `<table>_curated.csv`
    CuratedCsv,
    /// `<table>_curated.parquet`
    CuratedParquet,
    /// `profile_<table>.json`
    ProfileJson,
    /// `profile_<table>.csv`
    ProfileCsv,
}

impl ArtifactKind {
    /// Persistence order.
    pub const CHAIN: [ArtifactKind; 4] = [
        ArtifactKind::CuratedCsv,
        ArtifactKind::CuratedParquet,
        ArtifactKind::ProfileJson,
        ArtifactKind::ProfileCsv,
    ];

    /// Whether downstream consumers depend on this artifact being present.
    pub fn is_primary(self) -> bool {
        matches!(self, ArtifactKind::CuratedCsv)
    }

    pub fn extension(self) -> &'static str {
        match self {
            ArtifactKind::CuratedCsv | ArtifactKind::ProfileCsv => "csv",
            ArtifactKind::CuratedParquet => "parquet",
            ArtifactKind::ProfileJson => "json",
        }
    }

    /// File name of this artifact for a table.
    pub fn file_name(self, table: TableKind) -> String {
        match self {
            ArtifactKind::CuratedCsv | ArtifactKind::CuratedParquet => {
                table.curated_file_name(self.extension())
            }
            ArtifactKind::ProfileJson | ArtifactKind::ProfileCsv => {
                table.profile_file_name(self.extension())
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::CuratedCsv => "curated csv",
            ArtifactKind::CuratedParquet => "curated parquet",
            ArtifactKind::ProfileJson => "profile json",
            ArtifactKind::ProfileCsv => "profile csv",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One persistence attempt and its result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistAttempt {
    pub artifact: ArtifactKind,
    pub path: PathBuf,
    /// Failure summary; `None` when the artifact was written.
    pub error: Option<String>,
}

impl PersistAttempt {
    pub fn succeeded(artifact: ArtifactKind, path: PathBuf) -> Self {
        Self {
            artifact,
            path,
            error: None,
        }
    }

    pub fn failed(artifact: ArtifactKind, path: PathBuf, error: impl Into<String>) -> Self {
        Self {
            artifact,
            path,
            error: Some(error.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Best persistence level achieved for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersistLevel {
    /// Every artifact was written.
    Full,
    /// The curated CSV was written but a secondary artifact failed.
    Degraded,
    /// The curated CSV was not written.
    Failed,
}

impl PersistLevel {
    /// Derive the level from an attempt chain.
    pub fn from_attempts(attempts: &[PersistAttempt]) -> Self {
        let primary_ok = attempts
            .iter()
            .any(|attempt| attempt.artifact.is_primary() && attempt.is_ok());
        if !primary_ok {
            return PersistLevel::Failed;
        }
        if attempts.iter().all(PersistAttempt::is_ok) {
            PersistLevel::Full
        } else {
            PersistLevel::Degraded
        }
    }
}

/// Final status of one table in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableStatus {
    /// Curated and every artifact persisted.
    Full,
    /// Curated CSV persisted, some secondary artifact missing.
    Degraded,
    /// Raw input absent; nothing was attempted.
    Skipped,
    /// Unreadable input, transformation error, or primary persistence failure.
    Failed,
}

impl From<PersistLevel> for TableStatus {
    fn from(level: PersistLevel) -> Self {
        match level {
            PersistLevel::Full => TableStatus::Full,
            PersistLevel::Degraded => TableStatus::Degraded,
            PersistLevel::Failed => TableStatus::Failed,
        }
    }
}

impl TableStatus {
    pub fn label(self) -> &'static str {
        match self {
            TableStatus::Full => "full",
            TableStatus::Degraded => "degraded",
            TableStatus::Skipped => "skipped",
            TableStatus::Failed => "failed",
        }
    }

    /// Whether the curated output is available to the load stage.
    pub fn has_output(self) -> bool {
        matches!(self, TableStatus::Full | TableStatus::Degraded)
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything known about one table after a curation run.
#[derive(Debug, Clone, PartialEq)]
pub struct TableReport {
    pub table: TableKind,
    pub status: TableStatus,
    /// Rows loaded from the raw layer (after the row limit).
    pub input_rows: Option<usize>,
    pub profile: Option<QualityProfile>,
    pub attempts: Vec<PersistAttempt>,
    /// Reason the table was skipped or failed before persistence.
    pub error: Option<String>,
}

impl TableReport {
    pub fn skipped(table: TableKind, reason: impl Into<String>) -> Self {
        Self {
            table,
            status: TableStatus::Skipped,
            input_rows: None,
            profile: None,
            attempts: Vec::new(),
            error: Some(reason.into()),
        }
    }

    pub fn failed(table: TableKind, input_rows: Option<usize>, reason: impl Into<String>) -> Self {
        Self {
            table,
            status: TableStatus::Failed,
            input_rows,
            profile: None,
            attempts: Vec::new(),
            error: Some(reason.into()),
        }
    }

    pub fn persisted(
        table: TableKind,
        input_rows: usize,
        profile: QualityProfile,
        attempts: Vec<PersistAttempt>,
    ) -> Self {
        let status = PersistLevel::from_attempts(&attempts).into();
        Self {
            table,
            status,
            input_rows: Some(input_rows),
            profile: Some(profile),
            attempts,
            error: None,
        }
    }

    /// The attempt for a given artifact, if it was tried.
    pub fn attempt(&self, artifact: ArtifactKind) -> Option<&PersistAttempt> {
        self.attempts.iter().find(|attempt| attempt.artifact == artifact)
    }

    /// Paths this run wrote for the table, empty unless the curated output
    /// is available.
    pub fn written_paths(&self) -> Vec<PathBuf> {
        if !self.status.has_output() {
            return Vec::new();
        }
        self.attempts
            .iter()
            .filter(|attempt| attempt.is_ok())
            .map(|attempt| attempt.path.clone())
            .collect()
    }
}
