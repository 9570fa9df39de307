//! Aggregation and report emission.

mod aggregator;
mod detail;
mod emitter;

pub use aggregator::{Aggregator, ProblemRow, Summary, SAMPLE_LIMIT};
pub use detail::{DetailEntry, DetailReport};
pub use emitter::{default_preview_dir, preview_path, ReportEmitter};
