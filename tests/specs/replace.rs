// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the `backscan replace` command.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// Literal replacement
// =============================================================================

/// Matching lines are rewritten and their count goes to stdout
#[test]
fn replaces_and_reports_the_line_count() {
    let dir = temp_tree(&[("pets.txt", "cat\ndog\ncat\n")]);
    let path = dir.path().join("pets.txt");

    backscan_cmd()
        .arg("replace")
        .args(["cat", "fox"])
        .arg(&path)
        .assert()
        .success()
        .stdout("2\n");

    let rewritten = std::fs::read_to_string(&path).expect("file should remain");
    assert_eq!(rewritten, "fox\ndog\nfox\n");
}

/// No match leaves the file byte-identical and reports zero
#[test]
fn no_match_reports_zero() {
    let dir = temp_tree(&[("pets.txt", "cat\ndog\n")]);
    let path = dir.path().join("pets.txt");

    backscan_cmd()
        .arg("replace")
        .args(["bird", "fox"])
        .arg(&path)
        .assert()
        .success()
        .stdout("0\n");

    let rewritten = std::fs::read_to_string(&path).expect("file should remain");
    assert_eq!(rewritten, "cat\ndog\n");
}

// =============================================================================
// Backups
// =============================================================================

/// --keep-original leaves the pre-rewrite file next to the result
#[test]
fn keep_original_preserves_a_backup() {
    let dir = temp_tree(&[("pets.txt", "cat\n")]);
    let path = dir.path().join("pets.txt");

    backscan_cmd()
        .arg("replace")
        .args(["cat", "fox"])
        .arg(&path)
        .arg("--keep-original")
        .assert()
        .success();

    let backup = dir.path().join("pets.txt.orig");
    let original = std::fs::read_to_string(&backup).expect("backup should exist");
    assert_eq!(original, "cat\n");
    let rewritten = std::fs::read_to_string(&path).expect("file should remain");
    assert_eq!(rewritten, "fox\n");
}

/// The backup disappears by default
#[test]
fn backup_is_gone_by_default() {
    let dir = temp_tree(&[("pets.txt", "cat\n")]);
    let path = dir.path().join("pets.txt");

    backscan_cmd().arg("replace").args(["cat", "fox"]).arg(&path).assert().success();

    assert!(!dir.path().join("pets.txt.orig").exists());
}

// =============================================================================
// Regex replacement
// =============================================================================

/// --mode regex substitutes with capture groups
#[test]
fn regex_mode_expands_captures() {
    let dir = temp_tree(&[("ids.txt", "id=42\n")]);
    let path = dir.path().join("ids.txt");

    backscan_cmd()
        .arg("replace")
        .args([r"id=(\d+)", "num=$1"])
        .arg(&path)
        .args(["--mode", "regex"])
        .assert()
        .success()
        .stdout("1\n");

    let rewritten = std::fs::read_to_string(&path).expect("file should remain");
    assert_eq!(rewritten, "num=42\n");
}

/// An invalid regex fails before touching the file
#[test]
fn invalid_regex_leaves_the_file_alone() {
    let dir = temp_tree(&[("pets.txt", "cat\n")]);
    let path = dir.path().join("pets.txt");

    backscan_cmd()
        .arg("replace")
        .args(["[unclosed", "fox"])
        .arg(&path)
        .args(["--mode", "regex"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid pattern"));

    let content = std::fs::read_to_string(&path).expect("file should remain");
    assert_eq!(content, "cat\n");
    assert!(!dir.path().join("pets.txt.orig").exists());
}
