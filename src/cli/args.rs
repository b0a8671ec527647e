//! CLI argument definitions.

use crate::cli::validators::parse_ratio;
use crate::config::{OutputFormat, SegmenterConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Segment timestamped transcripts into clips and rank highlight reels.
#[derive(Debug, Parser)]
#[command(name = "clipreel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Tab-separated transcript file (`<timestamp>\t<seconds>\t<text>` per line).
    pub transcript: Option<PathBuf>,

    /// Segmentation options.
    #[command(flatten)]
    pub segment: SegmentArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for segmenting a transcript.
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Minimum segment duration in seconds.
    #[arg(long, env = "CLIPREEL_MIN_DURATION")]
    pub min_duration: Option<u32>,

    /// Maximum segment duration in seconds.
    #[arg(long, env = "CLIPREEL_MAX_DURATION")]
    pub max_duration: Option<u32>,

    /// Upper bound for long segments in seconds.
    #[arg(long, env = "CLIPREEL_LONG_DURATION")]
    pub long_duration: Option<u32>,

    /// Target share of long segments (0.0-1.0).
    #[arg(long, value_parser = parse_ratio, env = "CLIPREEL_LONG_RATIO")]
    pub long_ratio: Option<f64>,

    /// Probability of aiming for a short segment (0.0-1.0).
    #[arg(long, value_parser = parse_ratio, env = "CLIPREEL_SHORT_RATIO")]
    pub short_ratio: Option<f64>,

    /// Random seed for reproducible segmentation.
    #[arg(long, env = "CLIPREEL_SEED")]
    pub seed: Option<u64>,

    /// Report format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, env = "CLIPREEL_FORMAT")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip malformed transcript records instead of failing.
    #[arg(long)]
    pub skip_malformed: bool,

    /// Only log warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SegmentArgs {
    /// Overlay command-line values onto configured settings.
    pub fn apply_to(&self, base: &SegmenterConfig) -> SegmenterConfig {
        SegmenterConfig {
            min_duration: self.min_duration.unwrap_or(base.min_duration),
            max_duration: self.max_duration.unwrap_or(base.max_duration),
            long_duration: self.long_duration.unwrap_or(base.long_duration),
            target_long_ratio: self.long_ratio.unwrap_or(base.target_long_ratio),
            target_short_ratio: self.short_ratio.unwrap_or(base.target_short_ratio),
            random_seed: self.seed.or(base.random_seed),
        }
    }
}
