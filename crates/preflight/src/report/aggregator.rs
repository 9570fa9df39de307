//! Corpus-wide accumulation of row verdicts.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::schema::LogicalField;
use crate::validation::{FieldValues, Issue, RowVerdict};

/// Maximum entries kept in each summary sample.
pub const SAMPLE_LIMIT: usize = 10;

/// Compact record of a row that cannot be imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRow {
    pub row: usize,
    pub name: String,
    pub price_raw: String,
    pub sku: String,
    pub category: String,
}

/// Aggregate report for a whole catalog.
///
/// Field order is the key order of the emitted document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_rows: usize,
    pub importable_rows_name_and_price: usize,
    pub missing_name: usize,
    pub missing_price: usize,
    pub missing_category: usize,
    pub missing_image: usize,
    pub missing_description: usize,
    pub missing_features: usize,
    /// Distinct non-empty identifiers.
    pub unique_skus: usize,
    /// Sum of all occurrences of identifiers seen more than once,
    /// first occurrence included.
    pub duplicate_sku_count: usize,
    /// First duplicated identifiers in first-seen order, as `[sku, count]`.
    pub duplicates_sample: Vec<(String, usize)>,
    /// First non-importable rows in input order.
    pub sample_problem_rows: Vec<ProblemRow>,
}

impl Summary {
    /// Miss count for an issue tag.
    pub fn missing(&self, issue: Issue) -> usize {
        match issue {
            Issue::MissingName => self.missing_name,
            Issue::MissingOrInvalidPrice => self.missing_price,
            Issue::MissingCategory => self.missing_category,
            Issue::MissingImage => self.missing_image,
            Issue::MissingDescription => self.missing_description,
            Issue::MissingFeatures => self.missing_features,
        }
    }
}

/// Stateful accumulator fed one verdict per row.
#[derive(Debug, Default)]
pub struct Aggregator {
    total_rows: usize,
    importable_rows: usize,
    misses: BTreeMap<Issue, usize>,
    sku_counts: IndexMap<String, usize>,
    problem_rows: Vec<ProblemRow>,
}

impl Aggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one classified row.
    pub fn observe(&mut self, row_index: usize, values: &FieldValues, verdict: &RowVerdict) {
        self.total_rows += 1;
        if verdict.importable {
            self.importable_rows += 1;
        }

        for issue in &verdict.issues {
            *self.misses.entry(*issue).or_insert(0) += 1;
        }

        let sku = values.get(LogicalField::Sku);
        if !sku.is_empty() {
            *self.sku_counts.entry(sku.to_string()).or_insert(0) += 1;
        }

        if !verdict.importable && self.problem_rows.len() < SAMPLE_LIMIT {
            self.problem_rows.push(ProblemRow {
                row: row_index,
                name: values.get(LogicalField::Name).to_string(),
                price_raw: values.get(LogicalField::Price).to_string(),
                sku: sku.to_string(),
                category: values.get(LogicalField::Category).to_string(),
            });
        }
    }

    /// Rows observed so far.
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Derive the summary from the accumulated counters.
    pub fn finalize(self) -> Summary {
        let miss = |issue: Issue| self.misses.get(&issue).copied().unwrap_or(0);

        let duplicates: Vec<(&String, &usize)> =
            self.sku_counts.iter().filter(|(_, count)| **count > 1).collect();

        Summary {
            total_rows: self.total_rows,
            importable_rows_name_and_price: self.importable_rows,
            missing_name: miss(Issue::MissingName),
            missing_price: miss(Issue::MissingOrInvalidPrice),
            missing_category: miss(Issue::MissingCategory),
            missing_image: miss(Issue::MissingImage),
            missing_description: miss(Issue::MissingDescription),
            missing_features: miss(Issue::MissingFeatures),
            unique_skus: self.sku_counts.len(),
            duplicate_sku_count: duplicates.iter().map(|(_, count)| **count).sum(),
            duplicates_sample: duplicates
                .iter()
                .take(SAMPLE_LIMIT)
                .map(|(sku, count)| ((*sku).clone(), **count))
                .collect(),
            sample_problem_rows: self.problem_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(name: &str, price: &str, sku: &str) -> FieldValues {
        [
            (LogicalField::Name, name.to_string()),
            (LogicalField::Price, price.to_string()),
            (LogicalField::Sku, sku.to_string()),
        ]
        .into_iter()
        .collect()
    }

    fn verdict(issues: &[Issue]) -> RowVerdict {
        let issues = issues.iter().copied().collect::<std::collections::BTreeSet<_>>();
        let importable = !issues.contains(&Issue::MissingName)
            && !issues.contains(&Issue::MissingOrInvalidPrice);
        RowVerdict { issues, importable }
    }

    #[test]
    fn test_empty_aggregator() {
        let summary = Aggregator::new().finalize();
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn test_counts() {
        let mut agg = Aggregator::new();
        agg.observe(1, &values("A", "1", "S1"), &verdict(&[Issue::MissingCategory]));
        agg.observe(2, &values("", "1", "S2"), &verdict(&[Issue::MissingName]));
        agg.observe(
            3,
            &values("", "x", ""),
            &verdict(&[Issue::MissingName, Issue::MissingOrInvalidPrice]),
        );
        assert_eq!(agg.total_rows(), 3);

        let summary = agg.finalize();
        assert_eq!(summary.total_rows, 3);
        assert_eq!(summary.importable_rows_name_and_price, 1);
        assert_eq!(summary.missing_name, 2);
        assert_eq!(summary.missing_price, 1);
        assert_eq!(summary.missing_category, 1);
        assert_eq!(summary.missing(Issue::MissingImage), 0);
        assert_eq!(summary.unique_skus, 2);
        assert_eq!(summary.sample_problem_rows.len(), 2);
        assert_eq!(summary.sample_problem_rows[1].row, 3);
        assert_eq!(summary.sample_problem_rows[1].price_raw, "x");
    }

    #[test]
    fn test_duplicate_count_includes_first_occurrence() {
        let mut agg = Aggregator::new();
        for (i, sku) in ["B", "A", "B", "C", "A", "B"].iter().enumerate() {
            agg.observe(i + 1, &values("n", "1", sku), &verdict(&[]));
        }
        let summary = agg.finalize();

        assert_eq!(summary.unique_skus, 3);
        assert_eq!(summary.duplicate_sku_count, 5);
        assert_eq!(
            summary.duplicates_sample,
            vec![("B".to_string(), 3), ("A".to_string(), 2)]
        );
    }

    #[test]
    fn test_samples_are_capped() {
        let mut agg = Aggregator::new();
        for i in 0..25 {
            let sku = format!("S{}", i % 12);
            agg.observe(i + 1, &values("", "", &sku), &verdict(&[Issue::MissingName]));
        }
        for i in 0..12 {
            agg.observe(26 + i, &values("n", "1", &format!("S{}", i)), &verdict(&[]));
        }
        let summary = agg.finalize();

        assert_eq!(summary.sample_problem_rows.len(), SAMPLE_LIMIT);
        assert_eq!(summary.sample_problem_rows[0].row, 1);
        assert_eq!(summary.sample_problem_rows[9].row, 10);
        assert_eq!(summary.duplicates_sample.len(), SAMPLE_LIMIT);
        assert_eq!(summary.duplicates_sample[0].0, "S0");
        assert_eq!(summary.unique_skus, 12);
    }

    #[test]
    fn test_summary_key_order() {
        let json = serde_json::to_string(&Summary::default()).unwrap();
        let keys = [
            "total_rows",
            "importable_rows_name_and_price",
            "missing_name",
            "missing_price",
            "missing_category",
            "missing_image",
            "missing_description",
            "missing_features",
            "unique_skus",
            "duplicate_sku_count",
            "duplicates_sample",
            "sample_problem_rows",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| json.find(&format!("\"{}\"", k)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
