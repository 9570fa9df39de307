//! Logical fields and their candidate header labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An abstract catalog column, independent of its literal header spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalField {
    /// Product display name.
    Name,
    /// Unit price as exported.
    Price,
    /// Product code used as the identifier.
    Sku,
    /// Category path.
    Category,
    /// Detailed image URL.
    Image,
    /// Long description.
    Description,
    /// Feature list.
    Features,
}

impl LogicalField {
    /// All fields, in report order.
    pub const ALL: [LogicalField; 7] = [
        LogicalField::Name,
        LogicalField::Price,
        LogicalField::Sku,
        LogicalField::Category,
        LogicalField::Image,
        LogicalField::Description,
        LogicalField::Features,
    ];

    /// Stable snake_case key.
    pub fn key(&self) -> &'static str {
        match self {
            LogicalField::Name => "name",
            LogicalField::Price => "price",
            LogicalField::Sku => "sku",
            LogicalField::Category => "category",
            LogicalField::Image => "image",
            LogicalField::Description => "description",
            LogicalField::Features => "features",
        }
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A logical field plus the header labels that may identify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// The field being located.
    pub field: LogicalField,
    /// Candidate labels, tried in order.
    pub candidates: Vec<String>,
    /// Whether an unresolved header is a fatal input error.
    pub required: bool,
}

impl FieldSpec {
    /// Create a required field spec.
    pub fn required(field: LogicalField, candidates: &[&str]) -> Self {
        Self {
            field,
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
            required: true,
        }
    }

    /// Create an optional field spec.
    pub fn optional(field: LogicalField, candidates: &[&str]) -> Self {
        Self {
            required: false,
            ..Self::required(field, candidates)
        }
    }

    /// Field specs for a product catalog export.
    ///
    /// Name and price are required; everything else degrades per row.
    pub fn catalog_defaults() -> Vec<FieldSpec> {
        vec![
            FieldSpec::required(LogicalField::Name, &["Product name", "Product Name", "name"]),
            FieldSpec::required(LogicalField::Price, &["Price", "price"]),
            FieldSpec::optional(
                LogicalField::Sku,
                &["Product code", "SKU", "sku", "product code"],
            ),
            FieldSpec::optional(LogicalField::Category, &["Category", "category"]),
            FieldSpec::optional(
                LogicalField::Image,
                &["Detailed image URL", "Detailed image", "Detailed image url"],
            ),
            FieldSpec::optional(LogicalField::Description, &["Description", "description"]),
            FieldSpec::optional(LogicalField::Features, &["Features", "features"]),
        ]
    }
}
