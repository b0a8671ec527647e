//! Transcript segmentation.
//!
//! Splits an ordered transcript into contiguous, time-bounded segments.
//! Boundaries land on lines that score well as natural breaks, and the
//! per-segment target window is chosen by a pluggable [`TargetPolicy`].

mod builder;
mod policy;
mod scorer;
mod segment;
pub mod vocabulary;

pub use builder::{BuildState, SegmentBuilder};
pub use policy::{
    FixedPolicy, SeededPolicy, TargetPolicy, TargetWindow, WindowKind, long_attempt_probability,
};
pub use scorer::{BreakScorer, SpanScorer};
pub use segment::{DurationStats, Segment};

use crate::config::SegmenterConfig;
use crate::error::Result;
use crate::transcript::TranscriptLine;

/// Segment `lines` with the default scorers and a seeded random policy.
///
/// # Errors
///
/// Returns [`crate::Error::ConfigValidation`] for inconsistent settings.
pub fn segment_transcript(
    lines: &[TranscriptLine],
    config: &SegmenterConfig,
) -> Result<Vec<Segment>> {
    let builder = SegmentBuilder::new(config.clone())?;
    let mut policy = SeededPolicy::from_config(config);
    Ok(builder.build(lines, &mut policy))
}
