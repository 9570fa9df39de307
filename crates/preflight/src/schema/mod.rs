//! Logical catalog fields and header resolution.

mod field;
mod resolver;

pub use field::{FieldSpec, LogicalField};
pub use resolver::{resolve, HeaderMapping, MatchKind, Resolution};
