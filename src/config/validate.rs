//! Configuration validation.

use crate::config::{Config, HighlightConfig, SegmenterConfig, TierLimits};
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_segmenter(&config.segmenter)?;
    validate_highlights(&config.highlights)?;
    Ok(())
}

/// Validate segmentation settings.
pub fn validate_segmenter(config: &SegmenterConfig) -> Result<()> {
    if config.max_duration == 0 {
        return Err(invalid("max_duration must be at least 1 second".to_string()));
    }

    if config.min_duration > config.max_duration {
        return Err(invalid(format!(
            "min_duration ({}) must not exceed max_duration ({})",
            config.min_duration, config.max_duration
        )));
    }

    if config.max_duration > config.long_duration {
        return Err(invalid(format!(
            "max_duration ({}) must not exceed long_duration ({})",
            config.max_duration, config.long_duration
        )));
    }

    validate_ratio("target_long_ratio", config.target_long_ratio)?;
    validate_ratio("target_short_ratio", config.target_short_ratio)?;

    Ok(())
}

/// Validate highlight settings.
pub fn validate_highlights(config: &HighlightConfig) -> Result<()> {
    if config.usable_min > config.usable_max {
        return Err(invalid(format!(
            "usable_min ({}) must not exceed usable_max ({})",
            config.usable_min, config.usable_max
        )));
    }

    validate_tier("quick", &config.quick)?;
    validate_tier("extended", &config.extended)?;
    validate_tier("comprehensive", &config.comprehensive)?;

    Ok(())
}

fn validate_tier(name: &str, limits: &TierLimits) -> Result<()> {
    if limits.max_items == 0 {
        return Err(invalid(format!("{name}.max_items must be at least 1")));
    }

    if !limits.min_score.is_finite() {
        return Err(invalid(format!("{name}.min_score must be a finite number")));
    }

    Ok(())
}

fn validate_ratio(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(invalid(format!(
            "{name} must be between 0.0 and 1.0, got {value}"
        )));
    }
    Ok(())
}

fn invalid(message: String) -> Error {
    Error::ConfigValidation { message }
}
