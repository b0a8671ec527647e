//! Tests for transcript parsing.

use std::io::Write;

use clipreel::Error;
use clipreel::transcript::{ParseMode, format_time, parse_transcript, read_transcript_file};
use tempfile::NamedTempFile;

#[test]
fn test_parse_transcript_file() {
    let content = [
        "0:00\t0\tWelcome to the keynote",
        "0:05\t5\tToday we have a lot to cover",
        "",
        "0:12\t12\tLet's get started",
    ]
    .join("\n");

    let mut file = NamedTempFile::with_suffix(".codes").unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();

    let lines = read_transcript_file(file.path(), ParseMode::Strict).unwrap();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].line_number, 1);
    assert_eq!(lines[0].timestamp, "0:00");
    assert_eq!(lines[2].line_number, 3);
    assert_eq!(lines[2].seconds, 12);
    assert_eq!(lines[2].text, "Let's get started");
}

#[test]
fn test_parse_transcript_with_utf8_bom() {
    let content = "\u{FEFF}0:00\t0\tHello\n";
    let lines = parse_transcript(content, ParseMode::Strict).unwrap();

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].timestamp, "0:00");
}

#[test]
fn test_extra_tabs_belong_to_text() {
    let lines = parse_transcript("1:00\t60\tcolumns\tand\ttabs", ParseMode::Strict).unwrap();
    assert_eq!(lines[0].text, "columns\tand\ttabs");
}

#[test]
fn test_strict_mode_reports_record_number() {
    let content = "0:00\t0\tfine\n0:05\tfive\tbroken\n";
    let err = parse_transcript(content, ParseMode::Strict).unwrap_err();

    match err {
        Error::MalformedRecord { record, .. } => assert_eq!(record, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_lenient_mode_skips_and_renumbers() {
    let content = "0:00\t0\tfirst\nmissing fields\n0:09\t9\tsecond\n0:03\t3\tbackwards\n";
    let lines = parse_transcript(content, ParseMode::Lenient).unwrap();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].line_number, 2);
    assert_eq!(lines[1].text, "second");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.codes");

    let err = read_transcript_file(&path, ParseMode::Strict).unwrap_err();
    assert!(matches!(err, Error::TranscriptNotFound { .. }));
}

#[test]
fn test_format_time() {
    assert_eq!(format_time(0), "0:00");
    assert_eq!(format_time(65), "1:05");
    assert_eq!(format_time(3600), "60:00");
}
