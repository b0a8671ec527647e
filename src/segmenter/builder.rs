//! Greedy left-to-right segment construction.
//!
//! Each step asks the policy for a target window, finds the earliest line
//! that satisfies the window's minimum and the latest line that stays
//! within its maximum, then cuts at the best-scoring line in between.

use tracing::{debug, info};

use crate::config::{SegmenterConfig, validate_segmenter};
use crate::error::Result;
use crate::transcript::TranscriptLine;

use super::policy::{TargetPolicy, WindowKind};
use super::scorer::{BreakScorer, SpanScorer};
use super::segment::Segment;

/// Accumulated state of a segmentation pass.
///
/// The builder consumes a state and hands back the advanced one, so a pass
/// can be driven one step at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildState {
    cursor: usize,
    segments: Vec<Segment>,
    long_segments: usize,
}

impl BuildState {
    /// Index of the next unconsumed line.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Segments built so far.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of built segments longer than the medium window.
    pub fn long_segments(&self) -> usize {
        self.long_segments
    }

    /// Share of built segments that are long; 0 before anything is built.
    #[allow(clippy::cast_precision_loss)]
    pub fn long_ratio(&self) -> f64 {
        self.long_segments as f64 / self.segments.len().max(1) as f64
    }

    /// Whether every line in `lines` has been consumed.
    pub fn is_complete(&self, lines: &[TranscriptLine]) -> bool {
        self.cursor >= lines.len()
    }

    /// Consume the state, returning the built segments.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    fn push(&mut self, segment: Segment, long_threshold: u32, next_cursor: usize) {
        if segment.duration > long_threshold {
            self.long_segments += 1;
        }
        self.segments.push(segment);
        self.cursor = next_cursor;
    }
}

/// Splits a transcript into contiguous, non-overlapping segments.
#[derive(Debug, Clone)]
pub struct SegmentBuilder {
    config: SegmenterConfig,
    breaks: BreakScorer,
    spans: SpanScorer,
}

impl SegmentBuilder {
    /// Create a builder with the default vocabularies.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ConfigValidation`] if the duration settings
    /// are inconsistent.
    pub fn new(config: SegmenterConfig) -> Result<Self> {
        validate_segmenter(&config)?;
        Ok(Self {
            config,
            breaks: BreakScorer::default(),
            spans: SpanScorer::default(),
        })
    }

    /// Replace the scorers used for boundaries and long spans.
    #[must_use]
    pub fn with_scorers(mut self, breaks: BreakScorer, spans: SpanScorer) -> Self {
        self.breaks = breaks;
        self.spans = spans;
        self
    }

    /// Segment all of `lines` in one pass.
    ///
    /// An empty transcript yields no segments.
    pub fn build<P>(&self, lines: &[TranscriptLine], policy: &mut P) -> Vec<Segment>
    where
        P: TargetPolicy + ?Sized,
    {
        let mut state = BuildState::default();
        while !state.is_complete(lines) {
            state = self.step(lines, state, policy);
        }

        info!(
            "Built {} segments from {} lines ({} long)",
            state.segments.len(),
            lines.len(),
            state.long_segments
        );
        state.into_segments()
    }

    /// Build the next segment starting at the state's cursor.
    ///
    /// A completed state is returned unchanged.
    pub fn step<P>(
        &self,
        lines: &[TranscriptLine],
        mut state: BuildState,
        policy: &mut P,
    ) -> BuildState
    where
        P: TargetPolicy + ?Sized,
    {
        let start = state.cursor;
        if start >= lines.len() {
            return state;
        }

        let kind = policy.choose(&state);
        let window = kind.window(&self.config);

        let min_end = min_boundary(lines, start, window.min);
        let mut max_end = max_boundary(lines, start, min_end, window.max);
        let mut window_max = window.max;
        let mut fell_back = false;

        if kind == WindowKind::Long && max_end > min_end {
            let span = join_text(&lines[start..=max_end]);
            if !self.spans.is_suitable(&span) {
                window_max = WindowKind::Medium.window(&self.config).max;
                max_end = max_boundary(lines, start, min_end, window_max);
                fell_back = true;
            }
        }

        let end = if max_end > min_end {
            self.best_break(lines, min_end, max_end)
        } else {
            min_end.min(lines.len() - 1)
        };

        let Some(segment) = Segment::spanning(&lines[start..=end]) else {
            return state;
        };

        debug!(
            "Segment lines {}-{} ({}s, {:?} window {}-{}s{})",
            segment.start_line,
            segment.end_line,
            segment.duration,
            kind,
            window.min,
            window_max,
            if fell_back {
                ", unsuitable span fell back to medium maximum"
            } else {
                ""
            }
        );

        state.push(segment, self.config.max_duration, end + 1);
        state
    }

    /// Index in `[min_end, max_end]` with the highest break score.
    ///
    /// Ties go to the earliest index.
    fn best_break(&self, lines: &[TranscriptLine], min_end: usize, max_end: usize) -> usize {
        let mut best_index = min_end;
        let mut best_score = f64::NEG_INFINITY;

        for index in min_end..=max_end.min(lines.len() - 1) {
            let score = self.breaks.score(&lines[index], lines.get(index + 1));
            if score > best_score {
                best_score = score;
                best_index = index;
            }
        }

        best_index
    }
}

/// First index at or after `start` that is at least `target_min` seconds in.
///
/// Falls back to the last index when the transcript ends first.
fn min_boundary(lines: &[TranscriptLine], start: usize, target_min: u32) -> usize {
    let origin = lines[start].seconds;
    lines[start..]
        .iter()
        .position(|line| line.seconds.saturating_sub(origin) >= target_min)
        .map_or(lines.len() - 1, |offset| start + offset)
}

/// Last index from `min_end` onward that stays within `target_max` seconds.
///
/// Never returns less than `min_end`.
fn max_boundary(lines: &[TranscriptLine], start: usize, min_end: usize, target_max: u32) -> usize {
    let origin = lines[start].seconds;
    let mut max_end = min_end;

    for (index, line) in lines.iter().enumerate().skip(min_end) {
        if line.seconds.saturating_sub(origin) > target_max {
            break;
        }
        max_end = index;
    }

    max_end
}

fn join_text(lines: &[TranscriptLine]) -> String {
    lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
