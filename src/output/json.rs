//! JSON report writer.

use std::io::{BufWriter, Write};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::SegmenterConfig;
use crate::error::{Error, Result};
use crate::highlights::{HighlightTier, Highlights};
use crate::output::{Report, ReportWriter};
use crate::segmenter::{DurationStats, Segment};

/// JSON report document.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Transcript name.
    pub source: &'a str,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Number of parsed transcript lines.
    pub line_count: usize,
    /// Segmentation settings used.
    pub settings: &'a SegmenterConfig,
    /// Duration summary.
    pub summary: DurationStats,
    /// All segments in transcript order.
    pub segments: &'a [Segment],
    /// Highlight tiers.
    pub highlights: JsonHighlights,
}

/// Highlight tiers in JSON form.
#[derive(Debug, Serialize)]
pub struct JsonHighlights {
    /// Quick tier.
    pub quick: JsonTier,
    /// Extended tier.
    pub extended: JsonTier,
    /// Comprehensive tier.
    pub comprehensive: JsonTier,
}

/// One highlight tier in JSON form.
#[derive(Debug, Serialize)]
pub struct JsonTier {
    /// Compact `timestamp_duration` list.
    pub timecodes: String,
    /// Total selected seconds.
    pub total_seconds: u32,
    /// Selected clips, ordered by start time.
    pub clips: Vec<JsonClip>,
}

/// One selected clip.
#[derive(Debug, Serialize)]
pub struct JsonClip {
    /// 1-based position of the segment in the full listing.
    pub segment: usize,
    /// Importance score.
    pub score: f64,
    /// Display start timestamp.
    pub start_time: String,
    /// Start in seconds.
    pub start_seconds: u32,
    /// Duration in seconds.
    pub duration: u32,
}

impl JsonTier {
    fn from_highlights(highlights: &Highlights<'_>, tier: HighlightTier) -> Self {
        Self {
            timecodes: highlights.timecodes(tier),
            total_seconds: highlights.total_seconds(tier),
            clips: highlights
                .tier(tier)
                .iter()
                .map(|highlight| JsonClip {
                    segment: highlight.index + 1,
                    score: highlight.score,
                    start_time: highlight.segment.start_time.clone(),
                    start_seconds: highlight.segment.start_seconds,
                    duration: highlight.segment.duration,
                })
                .collect(),
        }
    }
}

impl<'a> JsonReport<'a> {
    /// Build the JSON document for `report`, stamped with the current time.
    pub fn new(report: &Report<'a>) -> Self {
        let highlights = report.highlights;
        Self {
            source: report.source,
            generated_at: Utc::now(),
            line_count: report.line_count,
            settings: report.settings,
            summary: report.stats(),
            segments: report.segments,
            highlights: JsonHighlights {
                quick: JsonTier::from_highlights(highlights, HighlightTier::Quick),
                extended: JsonTier::from_highlights(highlights, HighlightTier::Extended),
                comprehensive: JsonTier::from_highlights(highlights, HighlightTier::Comprehensive),
            },
        }
    }
}

/// Writes a pretty-printed [`JsonReport`].
pub struct JsonWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> JsonWriter<W> {
    /// Create a JSON writer over `out`.
    pub fn new(out: W) -> Self {
        Self {
            writer: BufWriter::new(out),
        }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report<'_>) -> Result<()> {
        let document = JsonReport::new(report);
        serde_json::to_writer_pretty(&mut self.writer, &document)
            .map_err(|e| Error::JsonWrite { source: e })?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
