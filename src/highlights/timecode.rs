//! Compact `timestamp_duration` highlight lists.
//!
//! A tier serializes as `1:23_18,2:05_24`: each clip's display start
//! timestamp and its duration in seconds.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::segmenter::Segment;

/// A clip start and duration parsed from a timecode list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timecode {
    /// Clip start in seconds.
    pub start_seconds: u32,
    /// Clip duration in seconds.
    pub duration: u32,
}

/// Join segments into a comma-separated `timestamp_duration` list.
pub fn format_timecodes<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = &'a Segment>,
{
    segments
        .into_iter()
        .map(|segment| format!("{}_{}", segment.start_time, segment.duration))
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse a comma-separated `timestamp_duration` list.
///
/// Timestamps may be `M:SS` or `H:MM:SS`; durations must be positive.
/// Empty input yields an empty list.
///
/// # Errors
///
/// Returns [`Error::InvalidTimecode`] for the first entry that does not parse.
pub fn parse_timecodes(list: &str) -> Result<Vec<Timecode>> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_timecode)
        .collect()
}

fn parse_timecode(entry: &str) -> Result<Timecode> {
    let invalid = |reason: &str| Error::InvalidTimecode {
        value: entry.to_string(),
        reason: reason.to_string(),
    };

    let (timestamp, duration) = entry
        .rsplit_once('_')
        .ok_or_else(|| invalid("expected <timestamp>_<duration>"))?;

    let duration: u32 = duration
        .parse()
        .map_err(|_| invalid("duration is not a whole number of seconds"))?;
    if duration == 0 {
        return Err(invalid("duration must be positive"));
    }

    let start_seconds =
        parse_clock(timestamp).ok_or_else(|| invalid("timestamp must be M:SS or H:MM:SS"))?;

    Ok(Timecode {
        start_seconds,
        duration,
    })
}

/// Parse `M:SS` or `H:MM:SS` into seconds.
fn parse_clock(timestamp: &str) -> Option<u32> {
    let parts = timestamp
        .split(':')
        .map(|part| part.parse::<u32>().ok())
        .collect::<Option<Vec<_>>>()?;

    let (hours, minutes, seconds) = match parts.as_slice() {
        [minutes, seconds] => (0, *minutes, *seconds),
        [hours, minutes, seconds] if *minutes < 60 => (*hours, *minutes, *seconds),
        _ => return None,
    };

    if seconds >= 60 {
        return None;
    }

    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}
