//! Tests for the `jsonade` binary: pretty-printing, error reporting and exit
//! codes, exercised through the actual executable.

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn pretty_prints_a_json_file() {
    Command::cargo_bin("jsonade")
        .expect("binary should build")
        .arg(fixture("sample.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"John Doe\""))
        .stdout(predicate::str::contains("\"grades\": [\n"))
        .stdout(predicate::str::contains("    90,\n"));
}

#[test]
fn indent_width_is_configurable() {
    Command::cargo_bin("jsonade")
        .expect("binary should build")
        .arg(fixture("sample.json"))
        .env("JSONADE_INDENT_WIDTH", "4")
        .assert()
        .success()
        .stdout(predicate::str::contains("    \"name\": \"John Doe\""));
}

#[test]
fn broken_json_fails_with_a_report() {
    Command::cargo_bin("jsonade")
        .expect("binary should build")
        .arg(fixture("broken.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn trailing_input_after_the_value_is_rejected() {
    Command::cargo_bin("jsonade")
        .expect("binary should build")
        .arg(fixture("trailing.json"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("trailing input after the JSON value"))
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn missing_file_fails_with_context() {
    Command::cargo_bin("jsonade")
        .expect("binary should build")
        .arg(fixture("does-not-exist.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read file"));
}
