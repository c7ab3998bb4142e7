//! Behavioral specs for the `backscan find` and `backscan sanitize` commands.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// Finding files
// =============================================================================

/// The first match in name order is printed
#[test]
fn find_prints_the_first_match() {
    let dir = temp_tree(&[("beta/target.txt", "b"), ("alpha/target.txt", "a")]);

    backscan_cmd()
        .arg("find")
        .arg("target.txt")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("alpha"));
}

/// --all prints every match, one per line
#[test]
fn find_all_prints_every_match() {
    let dir = temp_tree(&[("beta/target.txt", "b"), ("alpha/target.txt", "a")]);

    let output = backscan_cmd()
        .arg("find")
        .arg("target.txt")
        .arg(dir.path())
        .arg("--all")
        .output()
        .expect("command should run");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    assert_eq!(stdout.lines().count(), 2);
}

/// No match exits 1
#[test]
fn find_miss_exits_one() {
    let dir = temp_tree(&[("alpha/other.txt", "a")]);

    backscan_cmd()
        .arg("find")
        .arg("target.txt")
        .arg(dir.path())
        .assert()
        .code(1);
}

/// --partial matches substrings of file names
#[test]
fn find_partial_matches_substrings() {
    let dir = temp_tree(&[("logs/app-2026.log", "x")]);

    backscan_cmd()
        .arg("find")
        .arg("app")
        .arg(dir.path())
        .arg("--partial")
        .assert()
        .success()
        .stdout(predicates::str::contains("app-2026.log"));
}

/// --dirs prints the containing directory instead of the file
#[test]
fn find_dirs_prints_the_directory() {
    let dir = temp_tree(&[("logs/app.log", "x")]);

    backscan_cmd()
        .arg("find")
        .arg("app.log")
        .arg(dir.path())
        .arg("--dirs")
        .assert()
        .success()
        .stdout(predicates::str::contains("logs").and(predicates::str::contains("app.log").not()));
}

// =============================================================================
// Sanitizing names
// =============================================================================

/// Hostile ASCII is swapped for full-width lookalikes
#[test]
fn sanitize_swaps_hostile_characters() {
    backscan_cmd()
        .arg("sanitize")
        .arg("a/b:c?")
        .assert()
        .success()
        .stdout("a╱b：c？\n");
}

/// Double quotes alternate between opening and closing
#[test]
fn sanitize_pairs_quotes() {
    backscan_cmd()
        .arg("sanitize")
        .arg("say \"hi\" now")
        .assert()
        .success()
        .stdout("say “hi” now\n");
}

/// --keep-right leaves trailing whitespace in place
#[test]
fn sanitize_keep_right_preserves_trailing_space() {
    backscan_cmd()
        .arg("sanitize")
        .arg(" name ")
        .arg("--keep-right")
        .assert()
        .success()
        .stdout("name \n");
}
