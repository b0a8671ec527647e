//! Tiered highlight selection.

use serde::Serialize;
use tracing::debug;

use crate::config::{HighlightConfig, TierLimits, validate_highlights};
use crate::error::Result;
use crate::segmenter::Segment;

use super::importance::ImportanceScorer;
use super::timecode::format_timecodes;

/// The three highlight reels, from tightest to broadest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightTier {
    /// Short reel of the strongest moments.
    Quick,
    /// Medium-length reel.
    Extended,
    /// Longest reel.
    Comprehensive,
}

impl HighlightTier {
    /// All tiers in presentation order.
    pub const ALL: [Self; 3] = [Self::Quick, Self::Extended, Self::Comprehensive];

    /// Limits for this tier from `config`.
    pub fn limits(self, config: &HighlightConfig) -> TierLimits {
        match self {
            Self::Quick => config.quick,
            Self::Extended => config.extended,
            Self::Comprehensive => config.comprehensive,
        }
    }
}

impl std::fmt::Display for HighlightTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quick => write!(f, "quick"),
            Self::Extended => write!(f, "extended"),
            Self::Comprehensive => write!(f, "comprehensive"),
        }
    }
}

/// A selected segment with its position in the full sequence and its score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Highlight<'a> {
    /// Index into the segment sequence the highlight was selected from.
    pub index: usize,
    /// Importance score at selection time.
    pub score: f64,
    /// The selected segment.
    pub segment: &'a Segment,
}

/// Highlights for every tier, each ordered by start time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Highlights<'a> {
    /// Quick tier.
    pub quick: Vec<Highlight<'a>>,
    /// Extended tier.
    pub extended: Vec<Highlight<'a>>,
    /// Comprehensive tier.
    pub comprehensive: Vec<Highlight<'a>>,
}

impl<'a> Highlights<'a> {
    /// Selections for `tier`.
    pub fn tier(&self, tier: HighlightTier) -> &[Highlight<'a>] {
        match tier {
            HighlightTier::Quick => &self.quick,
            HighlightTier::Extended => &self.extended,
            HighlightTier::Comprehensive => &self.comprehensive,
        }
    }

    /// Compact `timestamp_duration` list for `tier`, e.g. `1:23_18,2:05_24`.
    pub fn timecodes(&self, tier: HighlightTier) -> String {
        format_timecodes(self.tier(tier).iter().map(|highlight| highlight.segment))
    }

    /// Total seconds selected for `tier`.
    pub fn total_seconds(&self, tier: HighlightTier) -> u32 {
        self.tier(tier)
            .iter()
            .map(|highlight| highlight.segment.duration)
            .sum()
    }
}

/// Ranks segments by importance and fills the three highlight tiers.
#[derive(Debug, Clone)]
pub struct HighlightSelector {
    config: HighlightConfig,
    scorer: ImportanceScorer,
}

impl HighlightSelector {
    /// Create a selector with the default keyword dictionaries.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ConfigValidation`] for an inverted usable band
    /// or unusable tier limits.
    pub fn new(config: HighlightConfig) -> Result<Self> {
        validate_highlights(&config)?;
        let scorer = ImportanceScorer::new(&config);
        Ok(Self { config, scorer })
    }

    /// Replace the importance scorer.
    #[must_use]
    pub fn with_scorer(mut self, scorer: ImportanceScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Select highlights for every tier.
    ///
    /// Segments are ranked once by descending score (ties keep sequence
    /// order); each tier then walks the ranking independently.
    pub fn select<'a>(&self, segments: &'a [Segment]) -> Highlights<'a> {
        let mut ranked: Vec<Highlight<'a>> = segments
            .iter()
            .enumerate()
            .map(|(index, segment)| Highlight {
                index,
                score: self.scorer.score(segment),
                segment,
            })
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        let highlights = Highlights {
            quick: fill_tier(&ranked, HighlightTier::Quick.limits(&self.config)),
            extended: fill_tier(&ranked, HighlightTier::Extended.limits(&self.config)),
            comprehensive: fill_tier(&ranked, HighlightTier::Comprehensive.limits(&self.config)),
        };

        for tier in HighlightTier::ALL {
            debug!(
                "{tier} tier: {} clips, {}s",
                highlights.tier(tier).len(),
                highlights.total_seconds(tier)
            );
        }

        highlights
    }
}

/// Greedily admit ranked highlights within `limits`, then order by start time.
fn fill_tier<'a>(ranked: &[Highlight<'a>], limits: TierLimits) -> Vec<Highlight<'a>> {
    let mut selected = Vec::new();
    let mut total_seconds = 0u32;

    for highlight in ranked {
        if selected.len() >= limits.max_items {
            break;
        }
        if highlight.score <= limits.min_score {
            continue;
        }
        let duration = highlight.segment.duration;
        if total_seconds.saturating_add(duration) > limits.max_seconds {
            continue;
        }

        total_seconds += duration;
        selected.push(*highlight);
    }

    selected.sort_by_key(|highlight| highlight.segment.start_seconds);
    selected
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn segment(start: u32, duration: u32, text: &str) -> Segment {
        Segment {
            start_line: 1,
            end_line: 1,
            start_time: crate::transcript::format_time(start),
            end_time: crate::transcript::format_time(start + duration),
            start_seconds: start,
            end_seconds: start + duration,
            duration,
            text: text.to_string(),
        }
    }

    fn ranked<'a>(entries: &[(f64, &'a Segment)]) -> Vec<Highlight<'a>> {
        entries
            .iter()
            .enumerate()
            .map(|(index, &(score, segment))| Highlight {
                index,
                score,
                segment,
            })
            .collect()
    }

    fn limits(max_items: usize, max_seconds: u32, min_score: f64) -> TierLimits {
        TierLimits {
            max_items,
            max_seconds,
            min_score,
        }
    }

    #[test]
    fn test_fill_tier_respects_item_cap() {
        let segments: Vec<Segment> = (0..5).map(|i| segment(i * 100, 10, "zzz")).collect();
        let entries: Vec<_> = segments.iter().map(|s| (2.0, s)).collect();

        let selected = fill_tier(&ranked(&entries), limits(3, 1000, 1.0));
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_fill_tier_skips_clips_that_overflow_duration() {
        let segments = [
            segment(0, 50, "zzz"),
            segment(100, 40, "zzz"),
            segment(200, 20, "zzz"),
        ];
        let entries = [(5.0, &segments[0]), (4.0, &segments[1]), (3.0, &segments[2])];

        let selected = fill_tier(&ranked(&entries), limits(10, 70, 0.0));
        let starts: Vec<_> = selected.iter().map(|h| h.segment.start_seconds).collect();
        assert_eq!(starts, vec![0, 200]);
    }

    #[test]
    fn test_fill_tier_threshold_is_exclusive() {
        let segments = [segment(0, 10, "zzz"), segment(50, 10, "zzz")];
        let entries = [(1.5, &segments[1]), (1.0, &segments[0])];

        let selected = fill_tier(&ranked(&entries), limits(10, 100, 1.0));
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].segment.start_seconds, 50);
    }

    #[test]
    fn test_fill_tier_orders_by_start_time() {
        let segments = [segment(300, 10, "zzz"), segment(30, 10, "zzz")];
        let entries = [(9.0, &segments[0]), (2.0, &segments[1])];

        let selected = fill_tier(&ranked(&entries), limits(10, 100, 0.0));
        assert_eq!(selected[0].segment.start_seconds, 30);
        assert_eq!(selected[1].segment.start_seconds, 300);
    }

    #[test]
    fn test_select_empty_input() {
        let selector = HighlightSelector::new(HighlightConfig::default()).unwrap();
        let highlights = selector.select(&[]);
        for tier in HighlightTier::ALL {
            assert!(highlights.tier(tier).is_empty());
            assert_eq!(highlights.timecodes(tier), "");
        }
    }

    #[test]
    fn test_equal_scores_keep_sequence_order() {
        let segments = vec![
            segment(600, 30, "biggest"),
            segment(700, 30, "biggest"),
            segment(800, 30, "biggest"),
        ];
        let mut config = HighlightConfig::default();
        config.quick.max_items = 2;

        let highlights = HighlightSelector::new(config).unwrap().select(&segments);
        let indices: Vec<_> = highlights.quick.iter().map(|h| h.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_new_rejects_invalid_limits() {
        let mut config = HighlightConfig::default();
        config.extended.max_items = 0;
        assert!(HighlightSelector::new(config).is_err());

        let inverted = HighlightConfig {
            usable_min: 30,
            usable_max: 10,
            ..HighlightConfig::default()
        };
        assert!(HighlightSelector::new(inverted).is_err());
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(HighlightTier::Quick.to_string(), "quick");
        assert_eq!(HighlightTier::Comprehensive.to_string(), "comprehensive");
    }
}
