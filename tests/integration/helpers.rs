//! Shared helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Write a fixture file into a temp directory and return its path.
pub fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("failed to write fixture");
    path
}

/// Command handle for the playhead binary.
pub fn playhead() -> Command {
    Command::cargo_bin("playhead").expect("playhead binary builds")
}
