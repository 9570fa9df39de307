//! Row classification.

mod classifier;

pub use classifier::{classify, is_valid_price, FieldValues, Issue, RowVerdict};
