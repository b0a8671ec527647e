//! Report writers.

mod csv;
mod json;
mod text;
mod types;
mod writer;

pub use csv::CsvWriter;
pub use json::{JsonClip, JsonHighlights, JsonReport, JsonTier, JsonWriter};
pub use text::TextWriter;
pub use types::Report;
pub use writer::{ReportWriter, writer_for};
