//! Integration tests for the `layout` subcommand.

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{playhead, write_fixture};

const SNAPSHOT: &str = r#"[
    {"id":"a","start_seconds":0.0,"end_seconds":10.0,"primary_tag":"intro"},
    {"id":"b","start_seconds":5.0,"end_seconds":15.0,"primary_tag":"action"},
    {"id":"c","start_seconds":20.0,"end_seconds":30.0,"primary_tag":"credits"}
]"#;

const SNAPSHOT_REVERSED: &str = r#"[
    {"id":"c","start_seconds":20.0,"end_seconds":30.0,"primary_tag":"credits"},
    {"id":"b","start_seconds":5.0,"end_seconds":15.0,"primary_tag":"action"},
    {"id":"a","start_seconds":0.0,"end_seconds":10.0,"primary_tag":"intro"}
]"#;

#[test]
fn layout_help_shows_usage() {
    playhead()
        .args(["layout", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marker snapshot"))
        .stdout(predicate::str::contains("<FILE>"));
}

#[test]
fn packs_markers_into_layers() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "markers.json", SNAPSHOT);

    playhead()
        .arg("layout")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("layer 0:"))
        .stdout(predicate::str::contains("layer 1:"))
        .stdout(predicate::str::contains("intro"));
}

#[test]
fn baseline_layer_takes_the_heavier_subset() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "markers.json", SNAPSHOT);

    let output = playhead()
        .arg("layout")
        .arg(&file)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let layers = value["layers"].as_array().unwrap();
    assert_eq!(layers.len(), 2);

    let baseline: Vec<&str> = layers[0]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    assert_eq!(baseline, vec!["b", "c"]);

    let upper: Vec<&str> = layers[1]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    assert_eq!(upper, vec!["a"]);
}

#[test]
fn colors_do_not_depend_on_snapshot_order() {
    let dir = TempDir::new().unwrap();
    let forward = write_fixture(&dir, "forward.json", SNAPSHOT);
    let reversed = write_fixture(&dir, "reversed.json", SNAPSHOT_REVERSED);

    let run = |path: &std::path::Path| {
        let output = playhead()
            .arg("layout")
            .arg(path)
            .arg("--json")
            .output()
            .unwrap();
        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        value["colors"].clone()
    };

    assert_eq!(run(&forward), run(&reversed));
}

#[test]
fn invalid_marker_is_dropped_but_reported() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(
        &dir,
        "markers.json",
        r#"[
            {"id":"ok","start_seconds":0.0,"end_seconds":10.0,"primary_tag":"intro"},
            {"id":"broken","start_seconds":5.0,"end_seconds":5.0,"primary_tag":"action"}
        ]"#,
    );

    playhead()
        .arg("layout")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("layer 0:"))
        .stderr(predicate::str::contains("broken"));
}

#[test]
fn garbage_json_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "markers.json", "{not json");

    playhead()
        .arg("layout")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse marker snapshot"));
}
