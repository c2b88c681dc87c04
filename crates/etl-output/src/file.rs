//! Artifact file replacement.
//!
//! Artifacts are serialized into a `.partial` sibling and renamed into place
//! once complete. When anything fails, both the partial file and any earlier
//! artifact at the target path are removed, so a failed write never leaves a
//! truncated or stale artifact behind.

use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{OutputError, Result};

/// Write `path` through `write`, replacing the previous artifact only on success.
pub(crate) fn write_replacing<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(File) -> Result<()>,
{
    let partial = partial_path(path);
    let result = File::create(&partial)
        .map_err(|source| OutputError::io(&partial, source))
        .and_then(write)
        .and_then(|()| fs::rename(&partial, path).map_err(|source| OutputError::io(path, source)));

    if result.is_err() {
        discard_artifact(&partial);
        discard_artifact(path);
    }
    result
}

/// Remove an artifact file if present. Directories are left alone.
pub fn discard_artifact(path: &Path) {
    if !path.is_file() {
        return;
    }
    if let Err(err) = fs::remove_file(path) {
        warn!(path = %path.display(), error = %err, "could not remove artifact");
    }
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}
