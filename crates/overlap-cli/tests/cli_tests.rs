//! Integration tests for the `overlap` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the conflicts,
//! layout, agenda and duration subcommands through the actual binary,
//! including stdin piping, file I/O, config loading and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Helper: path to the events.json fixture.
fn events_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/events.json")
}

/// Helper: path to the grid.toml config fixture.
fn config_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/grid.toml")
}

fn events_json() -> String {
    std::fs::read_to_string(events_path()).expect("events.json fixture must exist")
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout must be valid JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// conflicts
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn conflicts_from_stdin() {
    let assert = Command::cargo_bin("overlap")
        .unwrap()
        .arg("conflicts")
        .write_stdin(events_json())
        .assert()
        .success();

    let records = stdout_json(&assert.get_output().stdout);
    let records = records.as_array().expect("array");
    assert_eq!(records.len(), 2, "only the 09:00 and 09:30 events overlap");
    assert_eq!(records[0]["id"], 1);
    assert_eq!(records[0]["conflictCount"], 1);
    assert_eq!(records[0]["conflictIds"], serde_json::json!(["2"]));
    assert_eq!(records[1]["id"], 2);
    assert_eq!(records[1]["conflictIds"], serde_json::json!(["1"]));
}

#[test]
fn conflicts_file_to_file() {
    let output_path = std::env::temp_dir().join("overlap-test-conflicts.json");
    let _ = std::fs::remove_file(&output_path);

    Command::cargo_bin("overlap")
        .unwrap()
        .args(["conflicts", "-i", events_path(), "-o"])
        .arg(&output_path)
        .assert()
        .success();

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    let records: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(records.as_array().map(Vec::len), Some(2));

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn conflicts_empty_list() {
    Command::cargo_bin("overlap")
        .unwrap()
        .arg("conflicts")
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn conflicts_invalid_json_fails() {
    Command::cargo_bin("overlap")
        .unwrap()
        .arg("conflicts")
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse events JSON"));
}

#[test]
fn missing_input_file_fails() {
    Command::cargo_bin("overlap")
        .unwrap()
        .args(["conflicts", "-i", "/nonexistent/events.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// layout
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn layout_places_overlapping_events_side_by_side() {
    let assert = Command::cargo_bin("overlap")
        .unwrap()
        .args(["layout", "-i", events_path(), "--date", "2024-06-01"])
        .assert()
        .success();

    let placed = stdout_json(&assert.get_output().stdout);
    let placed = placed.as_array().expect("array");
    assert_eq!(placed.len(), 3, "the all-day event is not placed");

    assert_eq!(placed[0]["id"], 1);
    assert_eq!(placed[0]["topPx"], 432.0);
    assert_eq!(placed[0]["heightPx"], 48.0);
    assert_eq!(placed[0]["widthFraction"], 0.5);
    assert_eq!(placed[0]["leftOffsetFraction"], 0.0);

    assert_eq!(placed[1]["id"], 2);
    assert_eq!(placed[1]["leftOffsetFraction"], 0.5);

    assert_eq!(placed[2]["id"], 3);
    assert_eq!(placed[2]["widthFraction"], 1.0);
    assert_eq!(placed[2]["heightPx"], 24.0);
}

#[test]
fn layout_uses_config_file() {
    let assert = Command::cargo_bin("overlap")
        .unwrap()
        .args([
            "--config",
            config_path(),
            "layout",
            "-i",
            events_path(),
            "--date",
            "2024-06-01",
        ])
        .assert()
        .success();

    let placed = stdout_json(&assert.get_output().stdout);
    assert_eq!(placed[0]["topPx"], 540.0);
    assert_eq!(placed[0]["heightPx"], 60.0);
}

#[test]
fn layout_flag_overrides_config() {
    let assert = Command::cargo_bin("overlap")
        .unwrap()
        .args([
            "--config",
            config_path(),
            "layout",
            "-i",
            events_path(),
            "--date",
            "2024-06-01",
            "--hour-height",
            "24",
        ])
        .assert()
        .success();

    let placed = stdout_json(&assert.get_output().stdout);
    assert_eq!(placed[0]["topPx"], 216.0);
}

#[test]
fn layout_rejects_bad_date() {
    Command::cargo_bin("overlap")
        .unwrap()
        .args(["layout", "-i", events_path(), "--date", "June 1st"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn layout_rejects_bad_hour_height() {
    Command::cargo_bin("overlap")
        .unwrap()
        .args([
            "layout",
            "-i",
            events_path(),
            "--date",
            "2024-06-01",
            "--hour-height",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hour_height_px"));
}

#[test]
fn layout_unknown_column_order_fails() {
    Command::cargo_bin("overlap")
        .unwrap()
        .args([
            "layout",
            "-i",
            events_path(),
            "--date",
            "2024-06-01",
            "--column-order",
            "random",
        ])
        .assert()
        .failure();
}

// ─────────────────────────────────────────────────────────────────────────────
// agenda
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn agenda_groups_upcoming_days() {
    let assert = Command::cargo_bin("overlap")
        .unwrap()
        .args(["agenda", "-i", events_path(), "--from", "2024-06-01"])
        .assert()
        .success();

    let days = stdout_json(&assert.get_output().stdout);
    let days = days.as_array().expect("array");
    assert_eq!(days.len(), 2, "2024-06-20 is outside the 14-day window");
    assert_eq!(days[0]["date"], "2024-06-01");
    assert_eq!(days[0]["events"][0]["id"], 4, "all-day events come first");
    assert_eq!(days[0]["events"][1]["id"], 1);
    assert_eq!(days[1]["date"], "2024-06-03");
    assert_eq!(days[1]["events"][0]["id"], "dentist");
    assert_eq!(days[1]["events"][0]["completed"], true);
}

#[test]
fn agenda_custom_window() {
    let assert = Command::cargo_bin("overlap")
        .unwrap()
        .args(["agenda", "-i", events_path(), "--from", "2024-06-02", "--days", "30"])
        .assert()
        .success();

    let days = stdout_json(&assert.get_output().stdout);
    let dates: Vec<&str> = days
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2024-06-03", "2024-06-20"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// duration
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn duration_prints_hours() {
    Command::cargo_bin("overlap")
        .unwrap()
        .args(["duration", "1h30m"])
        .assert()
        .success()
        .stdout("1.5\n");
}

#[test]
fn duration_garbage_defaults_to_one_hour() {
    Command::cargo_bin("overlap")
        .unwrap()
        .args(["duration", "garbage"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn duration_strict_rejects_garbage() {
    Command::cargo_bin("overlap")
        .unwrap()
        .args(["duration", "--strict", "90min"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration"));
}

#[test]
fn duration_strict_accepts_canonical() {
    Command::cargo_bin("overlap")
        .unwrap()
        .args(["duration", "--strict", "45m"])
        .assert()
        .success()
        .stdout("0.75\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// help
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("overlap")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("conflicts"))
        .stdout(predicate::str::contains("layout"))
        .stdout(predicate::str::contains("agenda"))
        .stdout(predicate::str::contains("duration"));
}
