//! Report writer trait definition.

use std::io::Write;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::{CsvWriter, JsonWriter, Report, TextWriter};

/// Trait for writing segmentation reports.
pub trait ReportWriter {
    /// Write a complete report.
    fn write_report(&mut self, report: &Report<'_>) -> Result<()>;

    /// Flush any buffered output.
    fn finalize(&mut self) -> Result<()>;
}

/// Create a writer for `format` over `out`.
pub fn writer_for<'w, W>(format: OutputFormat, out: W) -> Box<dyn ReportWriter + 'w>
where
    W: Write + 'w,
{
    match format {
        OutputFormat::Text => Box::new(TextWriter::new(out)),
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Csv => Box::new(CsvWriter::new(out)),
    }
}
