//! Preflight: validation report for product catalog exports.
//!
//! Reads a semicolon-delimited catalog, locates the interesting columns by
//! loose header matching, classifies every row, and summarizes how many rows
//! are importable and which structural defects exist.
//!
//! # Pipeline
//!
//! - **Header resolution**: candidate labels matched exactly, then by
//!   substring, case-insensitively. Runs once.
//! - **Row classification**: pure per-row extraction and validity checks.
//! - **Aggregation**: counts, duplicate identifiers, bounded samples.
//! - **Emission**: JSON summary, optional per-row detail artifact.
//!
//! # Example
//!
//! ```no_run
//! use preflight::Preflight;
//!
//! let report = Preflight::new().check("products.csv").unwrap();
//!
//! println!("Rows: {}", report.summary.total_rows);
//! println!("Importable: {}", report.summary.importable_rows_name_and_price);
//! ```

pub mod error;
pub mod input;
pub mod report;
pub mod schema;
pub mod validation;

mod preflight;

pub use crate::preflight::{Preflight, PreflightConfig, PreflightReport};
pub use error::{PreflightError, Result};
pub use input::{CatalogReader, RawRow, ReaderConfig, SourceMetadata};
pub use report::{Aggregator, DetailEntry, DetailReport, ReportEmitter, Summary};
pub use schema::{FieldSpec, HeaderMapping, LogicalField, Resolution};
pub use validation::{FieldValues, Issue, RowVerdict};
