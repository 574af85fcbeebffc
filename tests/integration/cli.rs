//! The `ytmcp-demo` binary's non-interactive surface.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{NamedTempFile, TempDir};

use super::common::fixtures::TEST_SCRIPT;

fn ytmcp_demo(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ytmcp-demo").expect("binary built");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn test_list_bundled_scenarios() {
    let data_dir = TempDir::new().unwrap();
    let output = ytmcp_demo(&data_dir).arg("list").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let keys: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split('\t').next())
        .collect();
    assert_eq!(
        keys,
        vec![
            "channel_demo",
            "comments_demo",
            "playlist_demo",
            "quick_search_demo",
            "search_demo",
            "transcript_demo",
            "video_details_demo",
        ]
    );
    assert!(stdout.lines().all(|line| line.split('\t').count() == 3));
}

#[test]
fn test_list_custom_script() {
    let data_dir = TempDir::new().unwrap();
    let mut script = NamedTempFile::new().unwrap();
    script.write_all(TEST_SCRIPT.as_bytes()).unwrap();

    ytmcp_demo(&data_dir)
        .arg("list")
        .arg("--script")
        .arg(script.path())
        .assert()
        .success()
        .stdout(
            "search_demo\tSearch\tFind Rust talks\n\
             video_details_demo\tDetails\tLook up one video\n",
        );
}

#[test]
fn test_list_missing_script_fails() {
    let data_dir = TempDir::new().unwrap();
    let missing = data_dir.path().join("missing.json");

    ytmcp_demo(&data_dir)
        .arg("list")
        .arg("--script")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load script"));
}

#[test]
fn test_list_invalid_script_fails() {
    let data_dir = TempDir::new().unwrap();
    let mut script = NamedTempFile::new().unwrap();
    script.write_all(b"{ not json").unwrap();

    ytmcp_demo(&data_dir)
        .arg("list")
        .arg("--script")
        .arg(script.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse script"));
}

#[test]
fn test_help_mentions_subcommands() {
    let data_dir = TempDir::new().unwrap();
    ytmcp_demo(&data_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("--no-stars"));
}
