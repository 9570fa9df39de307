//! Loose header matching.
//!
//! Logical fields are located in the header row in two passes over the full
//! spec list: an exact (case-insensitive) pass first, then a substring pass
//! for whatever is still unresolved. Within a pass, candidates are tried in
//! order and the earliest matching header column wins.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::field::{FieldSpec, LogicalField};

/// How a header was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Header equals a candidate, ignoring case.
    Exact,
    /// Header contains a candidate, ignoring case.
    Substring,
}

/// Outcome of locating one logical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    /// A header column was found.
    Found {
        /// The header label as it appears in the input.
        label: String,
        /// Zero-based column index of that header.
        index: usize,
        matched_by: MatchKind,
    },
    /// No candidate matched any header.
    NotFound,
}

impl Resolution {
    /// Column index, if resolved.
    pub fn index(&self) -> Option<usize> {
        match self {
            Resolution::Found { index, .. } => Some(*index),
            Resolution::NotFound => None,
        }
    }

    /// Header label, if resolved.
    pub fn label(&self) -> Option<&str> {
        match self {
            Resolution::Found { label, .. } => Some(label),
            Resolution::NotFound => None,
        }
    }
}

static NOT_FOUND: Resolution = Resolution::NotFound;

/// Mapping from logical field to the header column found for it.
///
/// Built once by [`resolve`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderMapping {
    headers: Vec<String>,
    fields: IndexMap<LogicalField, Resolution>,
}

impl HeaderMapping {
    /// The header row the mapping was resolved against.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Resolution for a field. Fields that were never specified are `NotFound`.
    pub fn resolution(&self, field: LogicalField) -> &Resolution {
        self.fields.get(&field).unwrap_or(&NOT_FOUND)
    }

    /// Column index for a field, if resolved.
    pub fn column(&self, field: LogicalField) -> Option<usize> {
        self.resolution(field).index()
    }

    /// Header label for a field, if resolved.
    pub fn label(&self, field: LogicalField) -> Option<&str> {
        self.resolution(field).label()
    }

    /// Whether a field was resolved.
    pub fn is_resolved(&self, field: LogicalField) -> bool {
        self.column(field).is_some()
    }

    /// Iterate over resolutions in spec order.
    pub fn iter(&self) -> impl Iterator<Item = (LogicalField, &Resolution)> {
        self.fields.iter().map(|(f, r)| (*f, r))
    }

    /// Required fields from `specs` that have no header.
    pub fn missing_required(&self, specs: &[FieldSpec]) -> Vec<LogicalField> {
        specs
            .iter()
            .filter(|s| s.required && !self.is_resolved(s.field))
            .map(|s| s.field)
            .collect()
    }
}

/// Resolve field specs against a header row.
///
/// Never fails: unresolved fields map to [`Resolution::NotFound`] and it is up
/// to the caller to decide whether that is fatal.
pub fn resolve(headers: &[String], specs: &[FieldSpec]) -> HeaderMapping {
    let lowered: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();

    let mut fields: IndexMap<LogicalField, Resolution> = specs
        .iter()
        .map(|s| (s.field, Resolution::NotFound))
        .collect();

    for spec in specs {
        if let Some(index) = find_column(&lowered, &spec.candidates, |h, c| h == c) {
            fields.insert(spec.field, found(headers, index, MatchKind::Exact));
        }
    }

    for spec in specs {
        if fields[&spec.field] != Resolution::NotFound {
            continue;
        }
        if let Some(index) = find_column(&lowered, &spec.candidates, |h, c| h.contains(c)) {
            fields.insert(spec.field, found(headers, index, MatchKind::Substring));
        }
    }

    for (field, resolution) in &fields {
        match resolution {
            Resolution::Found { label, index, matched_by } => {
                debug!("Resolved {} -> '{}' (column {}, {:?})", field, label, index, matched_by);
            }
            Resolution::NotFound => {
                let required = specs.iter().any(|s| s.field == *field && s.required);
                if !required {
                    warn!("No header found for optional field '{}'", field);
                }
            }
        }
    }

    HeaderMapping {
        headers: headers.to_vec(),
        fields,
    }
}

/// First header index matching any candidate, candidates tried in order.
fn find_column(
    lowered: &[String],
    candidates: &[String],
    matches: impl Fn(&str, &str) -> bool,
) -> Option<usize> {
    candidates.iter().find_map(|candidate| {
        let candidate = candidate.to_lowercase();
        lowered.iter().position(|h| matches(h, &candidate))
    })
}

fn found(headers: &[String], index: usize, matched_by: MatchKind) -> Resolution {
    Resolution::Found {
        label: headers[index].clone(),
        index,
        matched_by,
    }
}
