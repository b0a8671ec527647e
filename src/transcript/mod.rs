//! Timestamped transcript lines.
//!
//! A transcript is a tab-separated export with one utterance per record:
//! `<timestamp>\t<seconds>\t<text>`. This module turns those records into
//! an ordered sequence of [`TranscriptLine`]s for the segmenter.

mod parser;

pub use parser::{ParseMode, parse_records, parse_transcript, read_transcript_file};

use serde::Serialize;

/// One timestamped utterance from the source transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptLine {
    /// Sequential 1-based number, counting only accepted records.
    pub line_number: usize,
    /// Timestamp in its original display form (e.g. `1:23`).
    pub timestamp: String,
    /// Elapsed seconds; non-decreasing across a transcript.
    pub seconds: u32,
    /// Utterance text.
    pub text: String,
}

/// Format elapsed seconds as `M:SS`.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(83), "1:23");
        assert_eq!(format_time(3600), "60:00");
    }
}
