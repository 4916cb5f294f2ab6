//! Integration tests for the `find-slots` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the slots and
//! conflicts subcommands through the actual binary, including stdin piping,
//! file input, JSON output and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the day.json fixture.
fn day_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/day.json")
}

fn find_slots() -> Command {
    Command::cargo_bin("find-slots").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Slots subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn slots_stdin_to_stdout() {
    let input = r#"{
        "events": [{"attendees": ["A"], "start": "09:00", "end": "10:00"}],
        "request": {"duration": 30, "required": ["A"]}
    }"#;

    find_slots()
        .arg("slots")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("00:00-09:00\n10:00-24:00\n");
}

#[test]
fn slots_file_honours_optional_attendees() {
    // bob fits around alice, carol is away all day.
    find_slots()
        .args(["slots", "-i", day_json_path()])
        .assert()
        .success()
        .stdout("00:00-09:00\n10:00-13:00\n14:00-24:00\n");
}

#[test]
fn slots_json_output() {
    let output = find_slots()
        .args(["slots", "-i", day_json_path(), "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["optional_included"], serde_json::json!(["bob"]));

    let windows = value["windows"].as_array().unwrap();
    assert_eq!(windows.len(), 3);
    assert_eq!(windows[0]["start"], "00:00");
    assert_eq!(windows[0]["end"], "09:00");
    assert_eq!(windows[0]["duration_minutes"], 540);
    assert_eq!(windows[2]["end"], "24:00");
}

#[test]
fn slots_no_attendees_whole_day() {
    let input = r#"{"events": [], "request": {"duration": 60}}"#;

    find_slots()
        .arg("slots")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("00:00-24:00\n");
}

#[test]
fn slots_duration_longer_than_day_prints_nothing() {
    let input = r#"{"events": [], "request": {"duration": 1441, "required": ["A"]}}"#;

    find_slots()
        .arg("slots")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn slots_accepts_custom_quantum() {
    find_slots()
        .args(["slots", "-i", day_json_path(), "--quantum", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10:00-13:00"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Conflicts subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn conflicts_lists_clashing_events() {
    find_slots()
        .args(["conflicts", "-i", day_json_path(), "--window", "09:30-13:30"])
        .assert()
        .success()
        .stdout(
            "00:00-24:00 offsite (240 min): carol\n\
             09:00-10:00 standup (30 min): alice\n\
             13:00-14:00 1:1 (30 min): bob\n",
        );
}

#[test]
fn conflicts_ignores_uninvited_people() {
    find_slots()
        .args(["conflicts", "-i", day_json_path(), "--window", "07:00-08:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gym").not())
        .stdout(predicate::str::contains("offsite"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Error handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn invalid_json_fails() {
    find_slots()
        .arg("slots")
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse input JSON"));
}

#[test]
fn inverted_event_range_fails() {
    let input = r#"{
        "events": [{"attendees": ["A"], "start": "10:00", "end": "09:00"}],
        "request": {"duration": 30, "required": ["A"]}
    }"#;

    find_slots()
        .arg("slots")
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid event #1"));
}

#[test]
fn event_without_attendees_fails() {
    let input = r#"{
        "events": [{"title": "ghost", "attendees": [], "start": "09:00", "end": "10:00"}],
        "request": {"duration": 30, "required": ["A"]}
    }"#;

    find_slots()
        .arg("slots")
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid event #1"));
}

#[test]
fn non_positive_duration_fails() {
    let input = r#"{"events": [], "request": {"duration": 0, "required": ["A"]}}"#;

    find_slots()
        .arg("slots")
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid request"));
}

#[test]
fn quantum_not_dividing_day_fails() {
    find_slots()
        .args(["slots", "-i", day_json_path(), "--quantum", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not divide a day"));
}

#[test]
fn missing_file_fails() {
    find_slots()
        .args(["slots", "-i", "/nonexistent/day.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn malformed_window_fails() {
    find_slots()
        .args(["conflicts", "-i", day_json_path(), "--window", "nine-ten"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid window"));
}
