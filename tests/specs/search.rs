// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the `backscan search` command.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// Exit codes
// =============================================================================

/// A match exits 0 and reports the count
#[test]
fn match_exits_zero_with_count() {
    backscan_cmd()
        .arg("search")
        .arg("ERROR")
        .arg(fixture("logs/app.log"))
        .assert()
        .success()
        .stdout(predicates::str::contains("2 matches"));
}

/// No match exits 1, like grep
#[test]
fn no_match_exits_one() {
    backscan_cmd()
        .arg("search")
        .arg("FATAL")
        .arg(fixture("logs/app.log"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains("no matches"));
}

/// A missing file is a hard failure, exit 2
#[test]
fn missing_file_exits_two() {
    backscan_cmd()
        .arg("search")
        .arg("ERROR")
        .arg(fixture("logs/absent.log"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("cannot read"));
}

/// An invalid regex is a hard failure, exit 2
#[test]
fn invalid_regex_exits_two() {
    backscan_cmd()
        .arg("search")
        .arg("[unclosed")
        .arg(fixture("logs/app.log"))
        .args(["--mode", "regex"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid pattern"));
}

// =============================================================================
// Directions and bounds
// =============================================================================

/// The default direction visits the last match first
#[test]
fn backward_reports_last_match_first() {
    backscan_cmd()
        .arg("search")
        .arg(r"09:\d\d:\d\d ERROR")
        .arg(fixture("logs/app.log"))
        .args(["--mode", "regex", "--max-matches", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("09:04:02 ERROR"));
}

/// --direction forward visits the first match first
#[test]
fn forward_reports_first_match_first() {
    backscan_cmd()
        .arg("search")
        .arg(r"09:\d\d:\d\d ERROR")
        .arg(fixture("logs/app.log"))
        .args(["--mode", "regex", "--direction", "forward", "--max-matches", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("09:03:17 ERROR"));
}

/// Literal matches report the matched text
#[test]
fn literal_match_reports_the_pattern() {
    backscan_cmd()
        .arg("search")
        .arg("connection refused")
        .arg(fixture("logs/app.log"))
        .args(["--max-matches", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("connection refused"));
}

// =============================================================================
// JSON output
// =============================================================================

/// --output json produces valid JSON with count and matches
#[test]
fn json_output_is_valid() {
    let output = backscan_cmd()
        .arg("search")
        .arg("ERROR")
        .arg(fixture("logs/app.log"))
        .args(["--output", "json"])
        .output()
        .expect("command should run");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("should be valid JSON");
    assert_eq!(json["count"], 2);
    assert_eq!(json["matches"][0], "ERROR");
    assert_eq!(json["pattern"], "ERROR");
}

/// JSON for a miss still parses, with an empty match list
#[test]
fn json_miss_has_zero_count() {
    let output = backscan_cmd()
        .arg("search")
        .arg("FATAL")
        .arg(fixture("logs/app.log"))
        .args(["--output", "json"])
        .output()
        .expect("command should run");

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("should be valid JSON");
    assert_eq!(json["count"], 0);
    assert!(json["matches"].as_array().expect("array").is_empty());
}
