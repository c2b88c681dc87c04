//! Load stage: publish the curated layer.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::{OutputError, Result};

/// Outcome of copying the curated directory into the load directory.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoadReport {
    /// Destination paths of copied files, in copy order.
    pub copied: Vec<PathBuf>,
    /// Source path and error message of every file that could not be copied.
    pub failures: Vec<(PathBuf, String)>,
}

impl LoadReport {
    /// Whether every file was copied.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Copy every regular file of `curated_dir` into `load_dir`.
///
/// The load directory is created when missing. A failed copy is logged and
/// recorded; remaining files are still copied. Subdirectories and staging
/// files left by an interrupted write are ignored.
pub fn load_layer(curated_dir: &Path, load_dir: &Path) -> Result<LoadReport> {
    if !curated_dir.is_dir() {
        return Err(OutputError::DirectoryNotFound {
            path: curated_dir.to_path_buf(),
        });
    }
    let mut sources = Vec::new();
    for entry in fs::read_dir(curated_dir).map_err(|source| OutputError::io(curated_dir, source))? {
        let entry = entry.map_err(|source| OutputError::io(curated_dir, source))?;
        let path = entry.path();
        if path.is_file() && !is_staging_file(&path) {
            sources.push(path);
        }
    }
    sources.sort();

    load_files(&sources, load_dir)
}

/// Copy the given files into `load_dir`, keeping their file names.
///
/// Used to publish only the artifacts a run actually produced. Missing
/// sources are recorded as failures like any other copy error.
pub fn load_files(sources: &[PathBuf], load_dir: &Path) -> Result<LoadReport> {
    fs::create_dir_all(load_dir).map_err(|source| OutputError::CreateDir {
        path: load_dir.to_path_buf(),
        source,
    })?;

    let mut report = LoadReport::default();
    for source in sources {
        let Some(name) = source.file_name() else {
            continue;
        };
        let target = load_dir.join(name);
        match fs::copy(source, &target) {
            Ok(_) => {
                info!(file = %target.display(), "copied to load layer");
                report.copied.push(target);
            }
            Err(err) => {
                error!(file = %source.display(), error = %err, "failed to copy to load layer");
                report.failures.push((source.clone(), err.to_string()));
            }
        }
    }
    Ok(report)
}

fn is_staging_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "partial")
}
