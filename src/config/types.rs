//! Configuration type definitions.

use crate::constants::{durations, importance, policy, tiers};
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Segmentation settings.
    #[serde(default)]
    pub segmenter: SegmenterConfig,

    /// Highlight ranking settings.
    #[serde(default)]
    pub highlights: HighlightConfig,
}

/// Settings consumed by the segment builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Lower bound of the medium window, in seconds.
    pub min_duration: u32,

    /// Upper bound of the medium window, in seconds.
    ///
    /// Segments longer than this count as long.
    pub max_duration: u32,

    /// Upper bound of the long window, in seconds.
    pub long_duration: u32,

    /// Desired share of long segments.
    pub target_long_ratio: f64,

    /// Probability of a short window when no long attempt is made.
    pub target_short_ratio: f64,

    /// Seed for the target-duration policy. Entropy is used when unset.
    pub random_seed: Option<u64>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            min_duration: durations::DEFAULT_MIN,
            max_duration: durations::DEFAULT_MAX,
            long_duration: durations::DEFAULT_LONG,
            target_long_ratio: policy::DEFAULT_TARGET_LONG_RATIO,
            target_short_ratio: policy::DEFAULT_TARGET_SHORT_RATIO,
            random_seed: None,
        }
    }
}

/// Settings consumed by the highlight selector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HighlightConfig {
    /// Shortest duration that earns the usable-band bonus.
    pub usable_min: u32,

    /// Longest duration that earns the usable-band bonus.
    pub usable_max: u32,

    /// Durations below this are penalized as unusable.
    pub too_short: u32,

    /// Quick tier limits.
    pub quick: TierLimits,

    /// Extended tier limits.
    pub extended: TierLimits,

    /// Comprehensive tier limits.
    pub comprehensive: TierLimits,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            usable_min: importance::DEFAULT_USABLE_MIN,
            usable_max: importance::DEFAULT_USABLE_MAX,
            too_short: importance::DEFAULT_TOO_SHORT,
            quick: TierLimits {
                max_items: tiers::QUICK_MAX_ITEMS,
                max_seconds: tiers::QUICK_MAX_SECONDS,
                min_score: tiers::QUICK_MIN_SCORE,
            },
            extended: TierLimits {
                max_items: tiers::EXTENDED_MAX_ITEMS,
                max_seconds: tiers::EXTENDED_MAX_SECONDS,
                min_score: tiers::EXTENDED_MIN_SCORE,
            },
            comprehensive: TierLimits {
                max_items: tiers::COMPREHENSIVE_MAX_ITEMS,
                max_seconds: tiers::COMPREHENSIVE_MAX_SECONDS,
                min_score: tiers::COMPREHENSIVE_MIN_SCORE,
            },
        }
    }
}

/// Caps and admission threshold for one highlight tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TierLimits {
    /// Maximum number of clips.
    pub max_items: usize,
    /// Maximum cumulative clip duration in seconds.
    pub max_seconds: u32,
    /// A clip is admitted only if its score is strictly above this.
    pub min_score: f64,
}

/// Report output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// JSON document with segments and highlights.
    Json,
    /// CSV table of segments.
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}
