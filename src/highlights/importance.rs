//! Standalone importance of a segment as a highlight clip.

use crate::config::HighlightConfig;
use crate::constants::importance;
use crate::segmenter::Segment;

use super::keywords::{IMPORTANCE_DICTIONARIES, ImportanceDictionaries};

/// Scores segments by keyword weight, position and duration.
#[derive(Debug, Clone)]
pub struct ImportanceScorer {
    dictionaries: &'static ImportanceDictionaries,
    usable_min: u32,
    usable_max: u32,
    too_short: u32,
}

impl ImportanceScorer {
    /// Create a scorer with the default dictionaries.
    pub fn new(config: &HighlightConfig) -> Self {
        Self::with_dictionaries(config, &IMPORTANCE_DICTIONARIES)
    }

    /// Create a scorer over custom dictionaries.
    pub fn with_dictionaries(
        config: &HighlightConfig,
        dictionaries: &'static ImportanceDictionaries,
    ) -> Self {
        Self {
            dictionaries,
            usable_min: config.usable_min,
            usable_max: config.usable_max,
            too_short: config.too_short,
        }
    }

    /// Importance of `segment`; unbounded, higher is better.
    pub fn score(&self, segment: &Segment) -> f64 {
        let text = segment.text.to_lowercase();

        let mut score: f64 = self
            .dictionaries
            .all()
            .iter()
            .flat_map(|dictionary| dictionary.iter())
            .filter(|(term, _)| text.contains(term))
            .map(|(_, weight)| weight)
            .sum();

        if segment.start_seconds < importance::OPENING_SECONDS {
            score += importance::OPENING_BONUS;
        } else if segment.start_seconds < importance::EARLY_SECONDS {
            score += importance::EARLY_BONUS;
        }

        if (self.usable_min..=self.usable_max).contains(&segment.duration) {
            score += importance::USABLE_BONUS;
        }
        if segment.duration < self.too_short {
            score -= importance::TOO_SHORT_PENALTY;
        }

        score
    }
}
