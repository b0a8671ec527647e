//! Data handed to report writers.

use crate::config::SegmenterConfig;
use crate::highlights::Highlights;
use crate::segmenter::{DurationStats, Segment};

/// Everything a reporter needs about one segmentation run.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    /// Name of the transcript the report describes.
    pub source: &'a str,
    /// Number of parsed transcript lines.
    pub line_count: usize,
    /// Settings the segments were built with.
    pub settings: &'a SegmenterConfig,
    /// All built segments, in transcript order.
    pub segments: &'a [Segment],
    /// Highlight tiers selected from `segments`.
    pub highlights: &'a Highlights<'a>,
}

impl Report<'_> {
    /// Duration summary against the configured medium window.
    pub fn stats(&self) -> DurationStats {
        DurationStats::compute(
            self.segments,
            self.settings.min_duration,
            self.settings.max_duration,
        )
    }
}
