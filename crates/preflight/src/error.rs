//! Error types for the preflight library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for preflight operations.
///
/// Per-row defects are never errors; they are reported as
/// [`Issue`](crate::validation::Issue) tags inside the summary.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// Error reading or accessing the input file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library (malformed quoting, invalid UTF-8).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input has no header row at all.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A required field has no matching column in the header row.
    #[error("required header not found for {}. Detected headers: {headers:?}", fields.join(", "))]
    MissingHeader {
        fields: Vec<String>,
        headers: Vec<String>,
    },

    /// Failed to write the summary to its output channel.
    #[error("Output error: {0}")]
    Output(#[source] std::io::Error),

    /// Failed to write the detail artifact.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PreflightError {
    /// Whether this error means the input itself cannot be checked.
    ///
    /// Fatal input errors halt the pipeline before any report is produced.
    pub fn is_fatal_input(&self) -> bool {
        matches!(
            self,
            PreflightError::Io { .. }
                | PreflightError::Csv(_)
                | PreflightError::EmptyData(_)
                | PreflightError::MissingHeader { .. }
        )
    }
}

/// Result type alias for preflight operations.
pub type Result<T> = std::result::Result<T, PreflightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_header_message() {
        let err = PreflightError::MissingHeader {
            fields: vec!["name".to_string(), "price".to_string()],
            headers: vec!["SKU".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("name, price"));
        assert!(msg.contains("\"SKU\""));
    }

    #[test]
    fn test_fatal_classification() {
        assert!(PreflightError::EmptyData("no rows".into()).is_fatal_input());
        assert!(!PreflightError::Persistence("denied".into()).is_fatal_input());
    }
}
