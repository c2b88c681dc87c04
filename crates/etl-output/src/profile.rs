//! Quality profile writers.
//!
//! The JSON file is the structured record; the CSV file is a single row for
//! spreadsheet consumers, with the per-column percentages embedded as a JSON
//! object string.

use std::io::{BufWriter, Write};
use std::path::Path;

use etl_model::QualityProfile;
use serde::Serialize;

use crate::error::{OutputError, Result};
use crate::file::write_replacing;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Flat form of a profile for the single-row CSV export.
#[derive(Debug, Serialize)]
struct ProfileRow {
    rows: usize,
    cols: usize,
    null_total: usize,
    null_percent_by_col: String,
    duplicates: usize,
}

/// Write the profile as pretty-printed JSON.
pub fn write_profile_json(path: &Path, profile: &QualityProfile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    write_replacing(path, |mut file| {
        file.write_all(json.as_bytes())
            .map_err(|source| OutputError::io(path, source))
    })
}

/// Write the profile as a header plus one data row.
pub fn write_profile_csv(path: &Path, profile: &QualityProfile) -> Result<()> {
    let csv_error = |message: String| OutputError::Csv {
        path: path.to_path_buf(),
        message,
    };

    let null_percent_by_col =
        serde_json::to_string(&profile.null_percent_by_col).map_err(|source| {
            OutputError::Json {
                path: path.to_path_buf(),
                source,
            }
        })?;
    let row = ProfileRow {
        rows: profile.rows,
        cols: profile.cols,
        null_total: profile.null_total,
        null_percent_by_col,
        duplicates: profile.duplicates,
    };

    write_replacing(path, |file| {
        let mut out = BufWriter::new(file);
        out.write_all(UTF8_BOM)
            .map_err(|source| OutputError::io(path, source))?;

        let mut writer = csv::Writer::from_writer(out);
        writer
            .serialize(&row)
            .map_err(|err| csv_error(err.to_string()))?;
        writer.flush().map_err(|source| OutputError::io(path, source))
    })
}
