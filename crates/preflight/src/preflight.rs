//! Main Preflight struct and public API.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{PreflightError, Result};
use crate::input::{CatalogReader, ReaderConfig, SourceMetadata};
use crate::report::{Aggregator, DetailEntry, DetailReport, Summary};
use crate::schema::{resolve, FieldSpec, HeaderMapping};
use crate::validation::classify;

/// Configuration for a preflight run.
#[derive(Debug, Clone)]
pub struct PreflightConfig {
    /// Reader configuration.
    pub reader: ReaderConfig,
    /// Fields to locate in the header row.
    pub fields: Vec<FieldSpec>,
    /// Keep one detail entry per row for the persisted artifact.
    pub emit_detail: bool,
}

impl Default for PreflightConfig {
    fn default() -> Self {
        Self {
            reader: ReaderConfig::default(),
            fields: FieldSpec::catalog_defaults(),
            emit_detail: true,
        }
    }
}

impl PreflightConfig {
    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.reader.delimiter = delimiter;
        self
    }

    /// Enable or disable per-row detail retention.
    pub fn with_detail(mut self, emit_detail: bool) -> Self {
        self.emit_detail = emit_detail;
        self
    }
}

/// Result of checking one catalog.
#[derive(Debug, Clone)]
pub struct PreflightReport {
    /// Metadata about the input, when read from a file.
    pub source: Option<SourceMetadata>,
    /// Header resolution used for every row.
    pub mapping: HeaderMapping,
    /// Aggregate counts and samples.
    pub summary: Summary,
    /// One entry per data row; empty unless detail mode is on.
    pub rows: Vec<DetailEntry>,
}

impl PreflightReport {
    /// Package the summary and rows as the persisted artifact.
    pub fn into_detail_report(self) -> DetailReport {
        DetailReport {
            summary: self.summary,
            rows: self.rows,
        }
    }
}

/// The catalog preflight pipeline.
///
/// Resolves headers once, classifies every row, and aggregates the verdicts
/// in a single pass.
pub struct Preflight {
    config: PreflightConfig,
}

impl Preflight {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(PreflightConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: PreflightConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &PreflightConfig {
        &self.config
    }

    /// Check a catalog file.
    pub fn check(&self, path: impl AsRef<Path>) -> Result<PreflightReport> {
        let (reader, source) = CatalogReader::open(path, &self.config.reader)?;
        let mut report = self.run(reader)?;
        report.source = Some(source);
        Ok(report)
    }

    /// Check a catalog from any byte source.
    pub fn check_reader(&self, rdr: impl Read) -> Result<PreflightReport> {
        let reader = CatalogReader::from_reader(rdr, &self.config.reader)?;
        self.run(reader)
    }

    fn run<R: Read>(&self, mut reader: CatalogReader<R>) -> Result<PreflightReport> {
        let mapping = resolve(reader.headers(), &self.config.fields);

        let missing = mapping.missing_required(&self.config.fields);
        if !missing.is_empty() {
            return Err(PreflightError::MissingHeader {
                fields: missing.iter().map(|f| f.to_string()).collect(),
                headers: reader.headers().to_vec(),
            });
        }

        let mut aggregator = Aggregator::new();
        let mut rows = Vec::new();

        for row in &mut reader {
            let row = row?;
            let (values, verdict) = classify(&row, &mapping);
            aggregator.observe(row.index, &values, &verdict);
            if self.config.emit_detail {
                rows.push(DetailEntry::new(row.index, &values, &verdict));
            }
        }

        debug!("Classified {} rows", reader.rows_read());
        let summary = aggregator.finalize();
        info!(
            "{} of {} rows importable ({} unique SKUs, {} duplicate occurrences)",
            summary.importable_rows_name_and_price,
            summary.total_rows,
            summary.unique_skus,
            summary.duplicate_sku_count
        );

        Ok(PreflightReport {
            source: None,
            mapping,
            summary,
            rows,
        })
    }
}

impl Default for Preflight {
    fn default() -> Self {
        Self::new()
    }
}
