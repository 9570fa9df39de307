//! Per-row field extraction and validity classification.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::RawRow;
use crate::schema::{HeaderMapping, LogicalField};

/// A single validation failure on a row.
///
/// Declaration order is the order tags appear in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    MissingName,
    MissingOrInvalidPrice,
    MissingCategory,
    MissingImage,
    MissingDescription,
    MissingFeatures,
}

impl Issue {
    /// All issue tags, in report order.
    pub const ALL: [Issue; 6] = [
        Issue::MissingName,
        Issue::MissingOrInvalidPrice,
        Issue::MissingCategory,
        Issue::MissingImage,
        Issue::MissingDescription,
        Issue::MissingFeatures,
    ];

    /// The tag as written in reports.
    pub fn tag(&self) -> &'static str {
        match self {
            Issue::MissingName => "missing_name",
            Issue::MissingOrInvalidPrice => "missing_or_invalid_price",
            Issue::MissingCategory => "missing_category",
            Issue::MissingImage => "missing_image",
            Issue::MissingDescription => "missing_description",
            Issue::MissingFeatures => "missing_features",
        }
    }
}

/// Trimmed values extracted from one row, keyed by logical field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldValues {
    values: IndexMap<LogicalField, String>,
}

impl FieldValues {
    /// Value for a field; `""` when absent.
    pub fn get(&self, field: LogicalField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Whether a field has a non-empty value.
    pub fn has(&self, field: LogicalField) -> bool {
        !self.get(field).is_empty()
    }
}

impl FromIterator<(LogicalField, String)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (LogicalField, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Classification of one row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RowVerdict {
    /// Failed predicates.
    pub issues: BTreeSet<Issue>,
    /// Name and price are both valid.
    pub importable: bool,
}

impl RowVerdict {
    /// Whether the verdict carries a tag.
    pub fn has(&self, issue: Issue) -> bool {
        self.issues.contains(&issue)
    }
}

/// A price is valid when non-empty and numeric once thousands commas are
/// removed. Decimal commas (`9,99`) therefore read as `999`.
pub fn is_valid_price(raw: &str) -> bool {
    if raw.is_empty() {
        return false;
    }
    raw.replace(',', "").trim().parse::<f64>().is_ok()
}

/// Extract field values from a row and classify them.
pub fn classify(row: &RawRow, mapping: &HeaderMapping) -> (FieldValues, RowVerdict) {
    let values: FieldValues = LogicalField::ALL
        .iter()
        .map(|&field| {
            let value = mapping
                .column(field)
                .map(|column| row.cell(column).trim().to_string())
                .unwrap_or_default();
            (field, value)
        })
        .collect();

    let checks = [
        (Issue::MissingName, values.has(LogicalField::Name)),
        (Issue::MissingOrInvalidPrice, is_valid_price(values.get(LogicalField::Price))),
        (Issue::MissingCategory, values.has(LogicalField::Category)),
        (Issue::MissingImage, values.has(LogicalField::Image)),
        (Issue::MissingDescription, values.has(LogicalField::Description)),
        (Issue::MissingFeatures, values.has(LogicalField::Features)),
    ];

    let issues: BTreeSet<Issue> = checks
        .into_iter()
        .filter(|(_, ok)| !ok)
        .map(|(issue, _)| issue)
        .collect();

    let importable =
        !issues.contains(&Issue::MissingName) && !issues.contains(&Issue::MissingOrInvalidPrice);

    (values, RowVerdict { issues, importable })
}
