//! Per-row detail listing.

use serde::{Deserialize, Serialize};

use super::aggregator::Summary;
use crate::schema::LogicalField;
use crate::validation::{FieldValues, Issue, RowVerdict};

/// One row of the detail listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailEntry {
    pub row: usize,
    pub sku: String,
    pub name: String,
    pub price_raw: String,
    pub category: String,
    pub image: String,
    pub has_description: bool,
    pub has_features: bool,
    pub issues: Vec<Issue>,
}

impl DetailEntry {
    /// Build an entry from a classified row.
    pub fn new(row: usize, values: &FieldValues, verdict: &RowVerdict) -> Self {
        Self {
            row,
            sku: values.get(LogicalField::Sku).to_string(),
            name: values.get(LogicalField::Name).to_string(),
            price_raw: values.get(LogicalField::Price).to_string(),
            category: values.get(LogicalField::Category).to_string(),
            image: values.get(LogicalField::Image).to_string(),
            has_description: values.has(LogicalField::Description),
            has_features: values.has(LogicalField::Features),
            issues: verdict.issues.iter().copied().collect(),
        }
    }
}

/// The persisted artifact: summary plus every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailReport {
    pub summary: Summary,
    pub rows: Vec<DetailEntry>,
}
