//! Timestamped CSV output

use crate::core::film::MovieRow;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const FILE_SUFFIX: &str = "oscars_movies.csv";

/// Path of the export written at `now`, e.g. `2025-04-28_09-30-00_oscars_movies.csv`.
pub fn output_path(dir: &Path, now: NaiveDateTime) -> PathBuf {
    let timestamp = now.format("%Y-%m-%d_%H-%M-%S");
    dir.join(format!("{timestamp}_{FILE_SUFFIX}"))
}

/// Writes `rows` with a header line into a new file under `dir`, creating the
/// directory if needed.
pub fn write_csv(dir: &Path, rows: &[MovieRow], now: NaiveDateTime) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let path = output_path(dir, now);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write row for film: {}", row.film))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush CSV file: {}", path.display()))?;

    debug!(rows = rows.len(), "Wrote {}", path.display());
    Ok(path)
}
