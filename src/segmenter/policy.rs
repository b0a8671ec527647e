//! Target-duration policy.
//!
//! Before each segment is built, a policy picks which duration window the
//! builder aims for. The default policy is randomized but steers the share
//! of long segments toward a configured target.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::trace;

use crate::config::SegmenterConfig;
use crate::constants::policy;

use super::BuildState;

/// Which target window the next segment aims for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    /// Shorter than the configured minimum.
    Short,
    /// The configured minimum to maximum.
    Medium,
    /// Beyond the configured maximum, up to the long duration.
    Long,
}

/// A `(min, max)` duration pair in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetWindow {
    /// Shortest acceptable duration.
    pub min: u32,
    /// Longest acceptable duration.
    pub max: u32,
}

impl WindowKind {
    /// Resolve this kind into concrete bounds.
    pub fn window(self, config: &SegmenterConfig) -> TargetWindow {
        match self {
            Self::Short => TargetWindow {
                min: config.min_duration / 2,
                max: config.min_duration,
            },
            Self::Medium => TargetWindow {
                min: config.min_duration,
                max: config.max_duration,
            },
            Self::Long => TargetWindow {
                min: config.max_duration,
                max: config.long_duration,
            },
        }
    }
}

/// Chooses the target window for the next segment from the build so far.
pub trait TargetPolicy {
    /// Pick the window kind for the segment starting at `state.cursor()`.
    fn choose(&mut self, state: &BuildState) -> WindowKind;
}

/// Always picks the same window.
#[derive(Debug, Clone, Copy)]
pub struct FixedPolicy(pub WindowKind);

impl TargetPolicy for FixedPolicy {
    fn choose(&mut self, _state: &BuildState) -> WindowKind {
        self.0
    }
}

/// Probability of attempting a long window given the current long ratio.
pub fn long_attempt_probability(long_ratio: f64, target_long_ratio: f64) -> f64 {
    if long_ratio >= target_long_ratio {
        policy::LONG_PROBABILITY_SATURATED
    } else if long_ratio < target_long_ratio / 2.0 {
        policy::LONG_PROBABILITY_STARVED
    } else {
        policy::LONG_PROBABILITY_BALANCED
    }
}

/// Randomized policy driven by a seedable generator.
///
/// Identical seeds over identical build states give identical choices.
#[derive(Debug, Clone)]
pub struct SeededPolicy {
    rng: StdRng,
    target_long_ratio: f64,
    target_short_ratio: f64,
}

impl SeededPolicy {
    /// Create a policy; `seed` of `None` draws one from the OS.
    pub fn new(seed: Option<u64>, target_long_ratio: f64, target_short_ratio: f64) -> Self {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self {
            rng,
            target_long_ratio,
            target_short_ratio,
        }
    }

    /// Create a policy from segmenter settings.
    pub fn from_config(config: &SegmenterConfig) -> Self {
        Self::new(
            config.random_seed,
            config.target_long_ratio,
            config.target_short_ratio,
        )
    }
}

impl TargetPolicy for SeededPolicy {
    fn choose(&mut self, state: &BuildState) -> WindowKind {
        let long_ratio = state.long_ratio();
        let long_probability = long_attempt_probability(long_ratio, self.target_long_ratio);

        let r: f64 = self.rng.gen_range(0.0..1.0);
        let kind = if r < long_probability {
            WindowKind::Long
        } else if self.rng.gen_range(0.0..1.0) < self.target_short_ratio {
            WindowKind::Short
        } else {
            WindowKind::Medium
        };

        trace!(
            "Window choice: {kind:?} (long ratio {long_ratio:.2}, p_long {long_probability:.1})"
        );
        kind
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_window_bounds_follow_config() {
        let config = SegmenterConfig::default();
        assert_eq!(
            WindowKind::Short.window(&config),
            TargetWindow { min: 9, max: 18 }
        );
        assert_eq!(
            WindowKind::Medium.window(&config),
            TargetWindow { min: 18, max: 36 }
        );
        assert_eq!(
            WindowKind::Long.window(&config),
            TargetWindow { min: 36, max: 60 }
        );
    }

    #[test]
    fn test_long_attempt_probability_bands() {
        assert_eq!(long_attempt_probability(0.15, 0.15), 0.1);
        assert_eq!(long_attempt_probability(0.5, 0.15), 0.1);
        assert_eq!(long_attempt_probability(0.0, 0.15), 0.6);
        assert_eq!(long_attempt_probability(0.07, 0.15), 0.6);
        assert_eq!(long_attempt_probability(0.1, 0.15), 0.3);
    }

    #[test]
    fn test_fixed_policy_never_varies() {
        let mut policy = FixedPolicy(WindowKind::Short);
        let state = BuildState::default();
        for _ in 0..5 {
            assert_eq!(policy.choose(&state), WindowKind::Short);
        }
    }

    #[test]
    fn test_seeded_policy_is_reproducible() {
        let state = BuildState::default();
        let mut first = SeededPolicy::new(Some(11), 0.15, 0.25);
        let mut second = SeededPolicy::new(Some(11), 0.15, 0.25);

        let a: Vec<_> = (0..32).map(|_| first.choose(&state)).collect();
        let b: Vec<_> = (0..32).map(|_| second.choose(&state)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_short_ratio_never_picks_short() {
        let state = BuildState::default();
        let mut policy = SeededPolicy::new(Some(3), 0.15, 0.0);
        assert!((0..200).all(|_| policy.choose(&state) != WindowKind::Short));
    }

    #[test]
    fn test_starved_policy_mostly_goes_long() {
        // An empty build has a long ratio of 0, so long attempts run at 60%.
        let state = BuildState::default();
        let mut policy = SeededPolicy::new(Some(5), 0.15, 0.25);
        let longs = (0..1000)
            .filter(|_| policy.choose(&state) == WindowKind::Long)
            .count();
        assert!((500..700).contains(&longs), "got {longs} long picks");
    }
}
