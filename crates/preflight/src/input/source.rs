//! Metadata about the input file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Metadata about the source catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Format derived from the delimiter (csv-semicolon, tsv, etc.).
    pub format: String,
    /// Expected encoding.
    pub encoding: String,
    /// Number of header columns.
    pub column_count: usize,
}

impl SourceMetadata {
    /// Create metadata for an opened file.
    pub fn new(path: PathBuf, size_bytes: u64, delimiter: u8, column_count: usize) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        Self {
            file,
            path,
            size_bytes,
            format,
            encoding: "utf-8".to_string(),
            column_count,
        }
    }
}
