//! Report output: summary to a writer, detail artifact to disk.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;

use super::aggregator::Summary;
use super::detail::DetailReport;
use crate::error::{PreflightError, Result};

/// Writes summaries and detail artifacts.
pub struct ReportEmitter;

impl ReportEmitter {
    /// Write the summary as pretty JSON followed by a newline.
    pub fn emit_summary<W: Write>(mut writer: W, summary: &Summary) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, summary)?;
        writeln!(writer).map_err(PreflightError::Output)?;
        Ok(())
    }

    /// Persist the detail report into `dir`, creating it if needed.
    ///
    /// Returns the path written.
    pub fn persist(dir: impl AsRef<Path>, report: &DetailReport) -> Result<PathBuf> {
        let dir = dir.as_ref();

        fs::create_dir_all(dir).map_err(|e| {
            PreflightError::Persistence(format!(
                "Failed to create directory '{}': {}",
                dir.display(),
                e
            ))
        })?;

        let path = preview_path(dir, Utc::now().timestamp_millis());
        let file = File::create(&path).map_err(|e| {
            PreflightError::Persistence(format!(
                "Failed to create file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, report).map_err(|e| {
            PreflightError::Persistence(format!("Failed to serialize detail report: {}", e))
        })?;
        writer.flush().map_err(|e| {
            PreflightError::Persistence(format!(
                "Failed to write file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Wrote {} detail rows to {}", report.rows.len(), path.display());
        Ok(path)
    }
}

impl DetailReport {
    /// Load a previously persisted detail report.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            PreflightError::Persistence(format!(
                "Failed to open file '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            PreflightError::Persistence(format!(
                "Failed to parse detail report '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

/// Artifact path for a given timestamp.
///
/// # Example
///
/// ```
/// use preflight::report::preview_path;
///
/// let path = preview_path("tmp", 1700000000000);
/// assert_eq!(path.to_string_lossy(), "tmp/products-import-preview-1700000000000.json");
/// ```
pub fn preview_path(dir: impl AsRef<Path>, timestamp_millis: i64) -> PathBuf {
    dir.as_ref()
        .join(format!("products-import-preview-{}.json", timestamp_millis))
}

/// Default artifact directory: a `tmp` folder next to the input file.
///
/// # Example
///
/// ```
/// use preflight::report::default_preview_dir;
///
/// let dir = default_preview_dir("data/products.csv");
/// assert_eq!(dir.to_string_lossy(), "data/tmp");
/// ```
pub fn default_preview_dir(input: impl AsRef<Path>) -> PathBuf {
    let parent = input.as_ref().parent().unwrap_or(Path::new("."));
    parent.join("tmp")
}
