//! CSV segment table writer.

use std::io::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::highlights::{HighlightTier, Highlights};
use crate::output::{Report, ReportWriter};

/// One CSV row per segment.
#[derive(Debug, Serialize)]
struct SegmentRow<'a> {
    #[serde(rename = "Segment")]
    segment: usize,
    #[serde(rename = "Start line")]
    start_line: usize,
    #[serde(rename = "End line")]
    end_line: usize,
    #[serde(rename = "Start")]
    start_time: &'a str,
    #[serde(rename = "End")]
    end_time: &'a str,
    #[serde(rename = "Start (s)")]
    start_seconds: u32,
    #[serde(rename = "End (s)")]
    end_seconds: u32,
    #[serde(rename = "Duration (s)")]
    duration: u32,
    #[serde(rename = "Tiers")]
    tiers: String,
    #[serde(rename = "Text")]
    text: &'a str,
}

/// CSV table of segments, with the highlight tiers each one made.
pub struct CsvWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvWriter<W> {
    /// Create a CSV writer over `out`.
    pub fn new(out: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(out),
        }
    }
}

impl<W: Write> ReportWriter for CsvWriter<W> {
    fn write_report(&mut self, report: &Report<'_>) -> Result<()> {
        for (index, segment) in report.segments.iter().enumerate() {
            let row = SegmentRow {
                segment: index + 1,
                start_line: segment.start_line,
                end_line: segment.end_line,
                start_time: &segment.start_time,
                end_time: &segment.end_time,
                start_seconds: segment.start_seconds,
                end_seconds: segment.end_seconds,
                duration: segment.duration,
                tiers: tiers_containing(report.highlights, index),
                text: &segment.text,
            };
            self.writer
                .serialize(row)
                .map_err(|e| Error::CsvWrite { source: e })?;
        }
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Space-separated names of the tiers that selected segment `index`.
fn tiers_containing(highlights: &Highlights<'_>, index: usize) -> String {
    HighlightTier::ALL
        .iter()
        .filter(|tier| {
            highlights
                .tier(**tier)
                .iter()
                .any(|highlight| highlight.index == index)
        })
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
