//! Integration tests for the command-line interface.

use std::io::Write;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use clipreel::transcript::format_time;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::{NamedTempFile, TempDir};

fn transcript() -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".codes").unwrap();
    for i in 0..40u32 {
        let seconds = i * 4;
        let text = match i % 4 {
            0 => "welcome to the biggest update",
            1 => "let me show you the new camera",
            2 => "however battery life is amazing",
            _ => "and that is done",
        };
        let timestamp = format_time(seconds);
        writeln!(file, "{timestamp}\t{seconds}\t{text}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn clipreel(config_dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("clipreel");
    cmd.env("CLIPREEL_CONFIG", config_dir.join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_text_report() {
    let config = TempDir::new().unwrap();
    let input = transcript();

    clipreel(config.path())
        .arg(input.path())
        .args(["--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 40 transcript lines"))
        .stdout(predicate::str::contains("TRANSCRIPT SEGMENTS"))
        .stdout(predicate::str::contains("SUMMARY"))
        .stdout(predicate::str::contains("HIGHLIGHTS"));
}

#[test]
fn test_json_report() {
    let config = TempDir::new().unwrap();
    let input = transcript();

    let output = clipreel(config.path())
        .arg(input.path())
        .args(["--seed", "1", "--format", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let json: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["line_count"], 40);
    assert_eq!(json["settings"]["random_seed"], 1);
    let segments = json["segments"].as_array().unwrap();
    assert!(!segments.is_empty());
    assert_eq!(segments[0]["start_line"], 1);
    assert_eq!(json["summary"]["segments"], segments.len());
    assert!(json["highlights"]["quick"]["timecodes"].is_string());
    assert!(json["generated_at"].is_string());
}

#[test]
fn test_csv_report_to_file() {
    let config = TempDir::new().unwrap();
    let input = transcript();
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("segments.csv");

    clipreel(config.path())
        .arg(input.path())
        .args(["--seed", "1", "--format", "csv", "--output"])
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert!(contents.starts_with("Segment,Start line,End line"));
    assert!(contents.lines().count() > 1);
}

#[test]
fn test_same_seed_same_report() {
    let config = TempDir::new().unwrap();
    let input = transcript();

    let run = || {
        let output = clipreel(config.path())
            .arg(input.path())
            .args(["--seed", "9", "--format", "csv"])
            .assert()
            .success();
        output.get_output().stdout.clone()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_malformed_record_fails_unless_skipped() {
    let config = TempDir::new().unwrap();
    let mut input = NamedTempFile::with_suffix(".codes").unwrap();
    writeln!(input, "0:00\t0\tstart").unwrap();
    writeln!(input, "not a record").unwrap();
    writeln!(input, "0:20\t20\tend").unwrap();
    input.flush().unwrap();

    clipreel(config.path())
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("record 2"));

    clipreel(config.path())
        .arg(input.path())
        .arg("--skip-malformed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 2 transcript lines"));
}

#[test]
fn test_missing_transcript_fails() {
    let config = TempDir::new().unwrap();

    clipreel(config.path())
        .arg(config.path().join("missing.codes"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_invalid_durations_fail() {
    let config = TempDir::new().unwrap();
    let input = transcript();

    clipreel(config.path())
        .arg(input.path())
        .args(["--min-duration", "40", "--max-duration", "20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration validation failed"));
}

#[test]
fn test_config_init_and_path() {
    let config = TempDir::new().unwrap();
    let path = config.path().join("config.toml");

    clipreel(config.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    clipreel(config.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));
    assert!(path.exists());

    clipreel(config.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    clipreel(config.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("min_duration: 18"));
}

#[test]
fn test_config_file_settings_apply() {
    let config = TempDir::new().unwrap();
    std::fs::write(
        config.path().join("config.toml"),
        "[segmenter]\nmin_duration = 8\nmax_duration = 12\nlong_duration = 20\nrandom_seed = 4\n",
    )
    .unwrap();
    let input = transcript();

    let output = clipreel(config.path())
        .arg(input.path())
        .args(["--format", "json"])
        .assert()
        .success();
    let json: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();

    assert_eq!(json["settings"]["min_duration"], 8);
    assert_eq!(json["settings"]["random_seed"], 4);
}
