//! Built segments and their duration statistics.

use serde::Serialize;

use crate::transcript::TranscriptLine;

/// A contiguous run of transcript lines treated as one editing unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Line number of the first line.
    pub start_line: usize,
    /// Line number of the last line (inclusive).
    pub end_line: usize,
    /// Display timestamp of the first line.
    pub start_time: String,
    /// Display timestamp of the last line.
    pub end_time: String,
    /// Elapsed seconds at the first line.
    pub start_seconds: u32,
    /// Elapsed seconds at the last line.
    pub end_seconds: u32,
    /// `end_seconds - start_seconds`.
    pub duration: u32,
    /// Texts of all lines, joined with single spaces.
    pub text: String,
}

impl Segment {
    /// Build a segment spanning every line in `lines`.
    ///
    /// Returns `None` for an empty slice.
    pub fn spanning(lines: &[TranscriptLine]) -> Option<Self> {
        let first = lines.first()?;
        let last = lines.last()?;

        let text = lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Some(Self {
            start_line: first.line_number,
            end_line: last.line_number,
            start_time: first.timestamp.clone(),
            end_time: last.timestamp.clone(),
            start_seconds: first.seconds,
            end_seconds: last.seconds,
            duration: last.seconds.saturating_sub(first.seconds),
            text,
        })
    }

    /// Number of transcript lines in the segment.
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

/// Duration summary over a segment sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DurationStats {
    /// Number of segments.
    pub segments: usize,
    /// Sum of segment durations in seconds.
    pub total_seconds: u64,
    /// Mean segment duration; `None` when there are no segments.
    pub average_seconds: Option<f64>,
    /// Segments shorter than the minimum duration.
    pub short: usize,
    /// Segments within the minimum and maximum duration.
    pub optimal: usize,
    /// Segments longer than the maximum duration.
    pub long: usize,
}

impl DurationStats {
    /// Summarize `segments` against the `[min_duration, max_duration]` band.
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(segments: &[Segment], min_duration: u32, max_duration: u32) -> Self {
        let mut stats = Self {
            segments: segments.len(),
            ..Self::default()
        };

        for segment in segments {
            stats.total_seconds += u64::from(segment.duration);
            if segment.duration < min_duration {
                stats.short += 1;
            } else if segment.duration > max_duration {
                stats.long += 1;
            } else {
                stats.optimal += 1;
            }
        }

        if stats.segments > 0 {
            stats.average_seconds = Some(stats.total_seconds as f64 / stats.segments as f64);
        }

        stats
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn line(number: usize, seconds: u32, text: &str) -> TranscriptLine {
        TranscriptLine {
            line_number: number,
            timestamp: crate::transcript::format_time(seconds),
            seconds,
            text: text.to_string(),
        }
    }

    fn segment_of(duration: u32) -> Segment {
        Segment::spanning(&[line(1, 0, "a"), line(2, duration, "b")]).unwrap()
    }

    #[test]
    fn test_spanning_joins_text_and_times() {
        let lines = [line(3, 10, "hello"), line(4, 14, "big"), line(5, 22, "world")];
        let segment = Segment::spanning(&lines).unwrap();

        assert_eq!(segment.start_line, 3);
        assert_eq!(segment.end_line, 5);
        assert_eq!(segment.start_time, "0:10");
        assert_eq!(segment.end_time, "0:22");
        assert_eq!(segment.duration, 12);
        assert_eq!(segment.text, "hello big world");
        assert_eq!(segment.line_count(), 3);
    }

    #[test]
    fn test_spanning_empty_slice() {
        assert!(Segment::spanning(&[]).is_none());
    }

    #[test]
    fn test_duration_stats_buckets() {
        let segments = [segment_of(5), segment_of(18), segment_of(36), segment_of(50)];
        let stats = DurationStats::compute(&segments, 18, 36);

        assert_eq!(stats.segments, 4);
        assert_eq!(stats.total_seconds, 109);
        assert_eq!(stats.short, 1);
        assert_eq!(stats.optimal, 2);
        assert_eq!(stats.long, 1);
        assert_eq!(stats.average_seconds, Some(27.25));
    }

    #[test]
    fn test_duration_stats_empty() {
        let stats = DurationStats::compute(&[], 18, 36);
        assert_eq!(stats.segments, 0);
        assert!(stats.average_seconds.is_none());
    }
}
