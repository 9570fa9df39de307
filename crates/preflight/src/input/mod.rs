//! Input reading and source metadata.

mod reader;
mod source;

pub use reader::{CatalogReader, RawRow, ReaderConfig};
pub use source::SourceMetadata;
