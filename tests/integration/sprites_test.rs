//! Integration tests for the `sprites` subcommand.

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{playhead, write_fixture};

const WELL_FORMED: &str = "WEBVTT\n\n\
    00:00:00.000 --> 00:00:05.000\n\
    scene_sprite.jpg#xywh=0,0,160,90\n\n\
    00:00:05.000 --> 00:00:10.000\n\
    scene_sprite.jpg#xywh=160,0,160,90\n";

/// One good cue, one payload missing its `#xywh=` fragment.
const PARTLY_MALFORMED: &str = "WEBVTT\n\n\
    00:00:00.000 --> 00:00:05.000\n\
    scene_sprite.jpg#xywh=0,0,160,90\n\n\
    00:00:05.000 --> 00:00:10.000\n\
    scene_sprite.jpg\n";

#[test]
fn sprites_help_shows_usage() {
    playhead()
        .args(["sprites", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sprite cue list"))
        .stdout(predicate::str::contains("<FILE>"));
}

#[test]
fn parses_a_cue_list_to_text() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "thumbs.vtt", WELL_FORMED);

    playhead()
        .arg("sprites")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 frames covering a 320px strip"))
        .stdout(predicate::str::contains("0:00 - 0:05"));
}

#[test]
fn malformed_payload_drops_only_its_cue() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "thumbs.vtt", PARTLY_MALFORMED);

    playhead()
        .arg("sprites")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 frames covering a 160px strip"));
}

#[test]
fn json_output_is_machine_readable() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "thumbs.vtt", WELL_FORMED);

    let output = playhead()
        .arg("sprites")
        .arg(&file)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let frames: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let frames = frames.as_array().unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1]["x"], 160.0);
    assert_eq!(frames[1]["start_seconds"], 5.0);
}

#[test]
fn missing_webvtt_header_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "thumbs.vtt", "not a cue list\n");

    playhead()
        .arg("sprites")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse sprite file"));
}

#[test]
fn missing_file_reports_the_path() {
    playhead()
        .args(["sprites", "/nonexistent/thumbs.vtt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/thumbs.vtt"));
}
