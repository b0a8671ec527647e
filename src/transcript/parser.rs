//! Transcript record parsing.
//!
//! Each non-blank record must carry at least three tab-separated fields:
//! a display timestamp, the integer elapsed seconds, and the text. Any
//! tabs after the second field belong to the text.

use std::path::Path;

use tracing::{debug, warn};

use super::TranscriptLine;
use crate::error::{Error, Result};

/// How malformed records are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Fail on the first malformed record.
    #[default]
    Strict,
    /// Log and skip malformed records.
    Lenient,
}

/// Parse raw transcript records into lines.
///
/// Blank and whitespace-only records are skipped. Line numbers are assigned
/// sequentially from 1 over accepted records only.
///
/// # Errors
///
/// In [`ParseMode::Strict`], returns [`Error::MalformedRecord`] if a
/// non-blank record:
/// - has fewer than three tab-separated fields
/// - has a seconds field that is not a non-negative integer
/// - has seconds earlier than the previous accepted record
pub fn parse_records<'a, I>(records: I, mode: ParseMode) -> Result<Vec<TranscriptLine>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut lines: Vec<TranscriptLine> = Vec::new();
    let mut skipped = 0usize;

    for (index, raw) in records.into_iter().enumerate() {
        let record = raw.trim();
        if record.is_empty() {
            continue;
        }

        let previous = lines.last().map(|line| line.seconds);
        match parse_record(record, index + 1, lines.len() + 1, previous) {
            Ok(line) => lines.push(line),
            Err(e) if mode == ParseMode::Lenient => {
                warn!("Skipping {e}");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    debug!(
        "Parsed {} transcript lines ({skipped} records skipped)",
        lines.len()
    );
    Ok(lines)
}

/// Parse newline-delimited transcript content.
///
/// A leading UTF-8 BOM is ignored.
///
/// # Errors
///
/// See [`parse_records`].
pub fn parse_transcript(content: &str, mode: ParseMode) -> Result<Vec<TranscriptLine>> {
    parse_records(content.trim_start_matches('\u{feff}').lines(), mode)
}

/// Read and parse a transcript file.
///
/// # Errors
///
/// Returns [`Error::TranscriptNotFound`] if the file does not exist,
/// [`Error::TranscriptRead`] if it cannot be read, or a parse error.
pub fn read_transcript_file(path: &Path, mode: ParseMode) -> Result<Vec<TranscriptLine>> {
    if !path.exists() {
        return Err(Error::TranscriptNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| Error::TranscriptRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_transcript(&content, mode)
}

/// Parse one trimmed, non-blank record numbered `number` in the raw input.
fn parse_record(
    record: &str,
    number: usize,
    line_number: usize,
    previous_seconds: Option<u32>,
) -> Result<TranscriptLine> {
    let malformed = |reason: String| Error::MalformedRecord {
        record: number,
        reason,
    };

    let fields: Vec<&str> = record.splitn(3, '\t').collect();
    let [timestamp, seconds, text] = fields[..] else {
        return Err(malformed(
            "expected at least 3 tab-separated fields".to_string(),
        ));
    };

    let seconds_field = seconds.trim();
    let seconds: u32 = seconds_field.parse().map_err(|_| {
        malformed(format!(
            "seconds field '{seconds_field}' is not a non-negative integer"
        ))
    })?;

    if let Some(previous) = previous_seconds
        && seconds < previous
    {
        return Err(malformed(format!(
            "seconds ({seconds}) is earlier than the previous record ({previous})"
        )));
    }

    Ok(TranscriptLine {
        line_number,
        timestamp: timestamp.trim().to_string(),
        seconds,
        text: text.trim().to_string(),
    })
}
