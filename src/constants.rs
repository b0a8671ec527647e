//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "clipreel";

/// Segment duration defaults, in seconds.
pub mod durations {
    /// Default minimum segment duration.
    pub const DEFAULT_MIN: u32 = 18;

    /// Default maximum segment duration (upper bound of the medium window).
    pub const DEFAULT_MAX: u32 = 36;

    /// Default upper bound of the long window.
    pub const DEFAULT_LONG: u32 = 60;
}

/// Target-duration policy constants.
pub mod policy {
    /// Default share of built segments that should be long.
    pub const DEFAULT_TARGET_LONG_RATIO: f64 = 0.15;

    /// Default probability of a short window when no long attempt is made.
    pub const DEFAULT_TARGET_SHORT_RATIO: f64 = 0.25;

    /// Long-attempt probability once the long ratio has reached its target.
    pub const LONG_PROBABILITY_SATURATED: f64 = 0.1;

    /// Long-attempt probability while the long ratio is below half its target.
    pub const LONG_PROBABILITY_STARVED: f64 = 0.6;

    /// Long-attempt probability otherwise.
    pub const LONG_PROBABILITY_BALANCED: f64 = 0.3;
}

/// Break scoring weights.
pub mod break_weights {
    /// Per strong transition term present in the line.
    pub const STRONG: f64 = 3.0;
    /// Per medium transition term present in the line.
    pub const MEDIUM: f64 = 2.0;
    /// Per weak transition term the line starts with.
    pub const WEAK: f64 = 1.0;
    /// Per continuation phrase present in the line (subtracted).
    pub const CONTINUATION_PENALTY: f64 = 2.0;
    /// Line ends with a sentence-final filler word.
    pub const FILLER_ENDING: f64 = 1.5;
    /// The following line opens a new topic.
    pub const TOPIC_CHANGE: f64 = 1.0;
    /// Line ends with a completion word.
    pub const COMPLETION_ENDING: f64 = 0.5;
}

/// Long-segment suitability gate.
pub mod suitability {
    /// Distinct topic keywords needed for the full topic bonus.
    pub const RICH_TOPIC_COUNT: usize = 3;
    /// Bonus when the span covers many topics.
    pub const RICH_TOPIC_BONUS: f64 = 2.0;
    /// Bonus when the span covers at least one topic.
    pub const TOPIC_BONUS: f64 = 1.0;
    /// Bonus when the span contains an explanation pattern.
    pub const EXPLANATION_BONUS: f64 = 1.5;
    /// Distinct strong transitions above which the span is penalized.
    pub const MAX_STRONG_TRANSITIONS: usize = 4;
    /// Penalty for a span with too many hard cuts.
    pub const CHOPPY_PENALTY: f64 = 1.0;
    /// Minimum score for a long attempt to stand.
    pub const MIN_SCORE: f64 = 1.0;
}

/// Highlight importance scoring.
pub mod importance {
    /// Bonus for segments starting inside the first minute.
    pub const OPENING_BONUS: f64 = 1.0;
    /// Segments starting before this many seconds get the opening bonus.
    pub const OPENING_SECONDS: u32 = 60;
    /// Bonus for segments starting inside the first three minutes.
    pub const EARLY_BONUS: f64 = 0.5;
    /// Segments starting before this many seconds get the early bonus.
    pub const EARLY_SECONDS: u32 = 180;
    /// Bonus for a duration inside the usable band.
    pub const USABLE_BONUS: f64 = 0.5;
    /// Penalty for a duration below the unusably-short threshold.
    pub const TOO_SHORT_PENALTY: f64 = 1.0;
    /// Default lower bound of the usable duration band.
    pub const DEFAULT_USABLE_MIN: u32 = 10;
    /// Default upper bound of the usable duration band.
    pub const DEFAULT_USABLE_MAX: u32 = 25;
    /// Default unusably-short threshold.
    pub const DEFAULT_TOO_SHORT: u32 = 6;
}

/// Highlight tier defaults.
pub mod tiers {
    /// Quick tier: maximum number of clips.
    pub const QUICK_MAX_ITEMS: usize = 8;
    /// Quick tier: maximum cumulative seconds.
    pub const QUICK_MAX_SECONDS: u32 = 120;
    /// Quick tier: score a clip must exceed.
    pub const QUICK_MIN_SCORE: f64 = 1.0;

    /// Extended tier: maximum number of clips.
    pub const EXTENDED_MAX_ITEMS: usize = 12;
    /// Extended tier: maximum cumulative seconds.
    pub const EXTENDED_MAX_SECONDS: u32 = 180;
    /// Extended tier: score a clip must exceed.
    pub const EXTENDED_MIN_SCORE: f64 = 0.5;

    /// Comprehensive tier: maximum number of clips.
    pub const COMPREHENSIVE_MAX_ITEMS: usize = 20;
    /// Comprehensive tier: maximum cumulative seconds.
    pub const COMPREHENSIVE_MAX_SECONDS: u32 = 240;
    /// Comprehensive tier: score a clip must exceed.
    pub const COMPREHENSIVE_MIN_SCORE: f64 = 0.2;
}

/// Number of characters of segment text shown in text reports.
pub const REPORT_PREVIEW_CHARS: usize = 100;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "CLIPREEL_CONFIG";
