//! Clipreel - transcript segmentation and highlight reel CLI tool.
//!
//! This crate splits timestamped transcripts into clip-sized segments and
//! ranks them into capped highlight tiers.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod highlights;
pub mod output;
pub mod segmenter;
pub mod transcript;

use clap::{CommandFactory, Parser};
use cli::{Cli, Command, SegmentArgs};
use config::{Config, config_file_path, load_default_config, save_default_config};
use highlights::HighlightSelector;
use output::{Report, writer_for};
use segmenter::{SeededPolicy, SegmentBuilder};
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};
use transcript::{ParseMode, read_transcript_file};

pub use error::{Error, Result};

/// Main entry point for clipreel CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.segment.verbose, cli.segment.quiet);

    if let Some(command) = cli.command {
        return handle_command(command);
    }

    let Some(transcript) = cli.transcript else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = load_default_config()?;
    segment_file(&transcript, &cli.segment, &config)
}

/// Segment one transcript file and write its report.
fn segment_file(path: &Path, args: &SegmentArgs, config: &Config) -> Result<()> {
    let started = Instant::now();

    // Settings are validated before the transcript is touched.
    let settings = args.apply_to(&config.segmenter);
    let builder = SegmentBuilder::new(settings.clone())?;
    let selector = HighlightSelector::new(config.highlights.clone())?;

    let mode = if args.skip_malformed {
        ParseMode::Lenient
    } else {
        ParseMode::Strict
    };
    let lines = read_transcript_file(path, mode)?;
    info!(
        "Loaded {} transcript lines from {}",
        lines.len(),
        path.display()
    );

    let mut policy = SeededPolicy::from_config(&settings);
    let segments = builder.build(&lines, &mut policy);
    let highlights = selector.select(&segments);

    let source = path.display().to_string();
    let report = Report {
        source: &source,
        line_count: lines.len(),
        settings: &settings,
        segments: &segments,
        highlights: &highlights,
    };

    let out: Box<dyn Write> = match &args.output {
        Some(output) => Box::new(std::fs::File::create(output)?),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut writer = writer_for(args.format, out);
    writer.write_report(&report)?;
    writer.finalize()?;

    if let Some(output) = &args.output {
        info!("Wrote {} report to {}", args.format, output.display());
    }
    debug!("Finished in {:.2}s", started.elapsed().as_secs_f64());
    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // Reports go to stdout, so logs stay on stderr.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_command(command: Command) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action),
    }
}

fn handle_config_command(action: cli::ConfigAction) -> Result<()> {
    use cli::ConfigAction;

    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
