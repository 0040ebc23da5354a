//! End-to-end runs of the `autosuggest` binary.

use super::common::{CITIES_FIXTURE, CITIES_JSON_FIXTURE};
use std::io::Write;
use std::process::{Command, Stdio};

fn autosuggest() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_autosuggest"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_query_prints_ranked_terms() {
    let output = autosuggest()
        .args(["query", CITIES_FIXTURE, "Bo", "--limit", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].ends_with("Bombay, India"), "{}", stdout);
    assert!(lines[1].ends_with("Bogota, Colombia"), "{}", stdout);
    assert!(lines[2].contains("2 of 4 matches shown"), "{}", stdout);
}

#[test]
fn test_query_json_output() {
    let output = autosuggest()
        .args(["query", CITIES_JSON_FIXTURE, "Bo", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let terms: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["term"].as_str().unwrap())
        .collect();
    assert_eq!(terms, vec!["Bogota", "Boston", "Bombay"]);
}

#[test]
fn test_query_no_match() {
    let output = autosuggest()
        .args(["query", CITIES_FIXTURE, "Z"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("no matches"));
}

#[test]
fn test_missing_file_exits_nonzero() {
    let output = autosuggest()
        .args(["query", "tests/fixtures/does-not-exist.txt", "Bo"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load terms"));
}

#[test]
fn test_interactive_answers_each_line() {
    let mut child = autosuggest()
        .args(["interactive", CITIES_FIXTURE, "--limit", "1"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"Ca\nTo\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Cairo, Egypt"), "{}", stdout);
    assert!(stdout.contains("Tokyo, Japan"), "{}", stdout);
    assert!(!stdout.contains("Toronto"), "{}", stdout);
}

#[test]
fn test_inspect_summary() {
    let output = autosuggest()
        .args(["inspect", CITIES_FIXTURE])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("entries   12"), "{}", stdout);
    assert!(stdout.contains("sorted    yes"), "{}", stdout);
    assert!(stdout.contains("first     Bogota, Colombia"), "{}", stdout);
}
