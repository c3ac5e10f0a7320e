pub mod document;
pub mod tally;
pub mod types;

pub use document::{load, LoadError, DEFAULT_PATH};
pub use tally::{report, tally, Format, TypeTally};
pub use types::{collect_document_types, collect_types};
