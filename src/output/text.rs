//! Human-readable report writer.

use std::io::{BufWriter, Write};

use crate::constants::REPORT_PREVIEW_CHARS;
use crate::error::Result;
use crate::highlights::HighlightTier;
use crate::output::{Report, ReportWriter};
use crate::transcript::format_time;

const RULE_WIDTH: usize = 80;

/// Plain-text segment listing with summary and highlight tiers.
pub struct TextWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> TextWriter<W> {
    /// Create a text writer over `out`.
    pub fn new(out: W) -> Self {
        Self {
            writer: BufWriter::new(out),
        }
    }

    fn heading(&mut self, title: &str) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.writer, "\n{rule}")?;
        writeln!(self.writer, "{title}")?;
        writeln!(self.writer, "{rule}")?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for TextWriter<W> {
    fn write_report(&mut self, report: &Report<'_>) -> Result<()> {
        writeln!(
            self.writer,
            "Loaded {} transcript lines from {}",
            report.line_count, report.source
        )?;

        self.heading(&format!(
            "TRANSCRIPT SEGMENTS ({} total)",
            report.segments.len()
        ))?;

        for (i, segment) in report.segments.iter().enumerate() {
            writeln!(self.writer, "\nSegment {}:", i + 1)?;
            writeln!(
                self.writer,
                "  Time: {} - {} ({}s)",
                segment.start_time, segment.end_time, segment.duration
            )?;
            writeln!(
                self.writer,
                "  Lines: {} - {}",
                segment.start_line, segment.end_line
            )?;
            writeln!(self.writer, "  Text: {}", preview(&segment.text))?;
        }

        let stats = report.stats();
        let min = report.settings.min_duration;
        let max = report.settings.max_duration;

        self.heading("SUMMARY")?;
        writeln!(self.writer, "Total segments: {}", stats.segments)?;
        let total = u32::try_from(stats.total_seconds).unwrap_or(u32::MAX);
        writeln!(
            self.writer,
            "Total duration: {} ({}s)",
            format_time(total),
            stats.total_seconds
        )?;
        match stats.average_seconds {
            Some(average) => writeln!(self.writer, "Average segment length: {average:.1}s")?,
            None => writeln!(self.writer, "Average segment length: N/A")?,
        }
        writeln!(self.writer, "Duration distribution:")?;
        writeln!(self.writer, "  Short (<{min}s): {}", stats.short)?;
        writeln!(self.writer, "  Optimal ({min}-{max}s): {}", stats.optimal)?;
        writeln!(self.writer, "  Long (>{max}s): {}", stats.long)?;

        self.heading("HIGHLIGHTS")?;
        for tier in HighlightTier::ALL {
            let clips = report.highlights.tier(tier);
            writeln!(
                self.writer,
                "{tier}: {} clips, {}s",
                clips.len(),
                report.highlights.total_seconds(tier)
            )?;
            writeln!(self.writer, "  {}", report.highlights.timecodes(tier))?;
        }

        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// First characters of `text`, with an ellipsis when truncated.
fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(REPORT_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let text = "x".repeat(REPORT_PREVIEW_CHARS + 5);
        let shown = preview(&text);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), REPORT_PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_preview_exact_length_not_truncated() {
        let text = "é".repeat(REPORT_PREVIEW_CHARS);
        assert_eq!(preview(&text), text);
    }
}
