//! Behavioral specs for configuration loading and discovery.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// Discovery
// =============================================================================

/// backscan.toml in the working directory shapes defaults
#[test]
fn discovers_config_in_the_working_directory() {
    let dir = temp_tree(&[
        (".git/keep", ""),
        ("backscan.toml", "[search]\nmax_matches = 1\n"),
        ("app.log", "hit\nhit\nhit\n"),
    ]);

    backscan_cmd()
        .current_dir(dir.path())
        .args(["search", "hit", "app.log"])
        .assert()
        .success()
        .stdout(predicates::str::contains("1 match"));
}

/// -C loads an explicit config over a discoverable one
#[test]
fn explicit_config_beats_discovery() {
    let dir = temp_tree(&[
        (".git/keep", ""),
        ("backscan.toml", "[search]\nmax_matches = 1\n"),
        ("custom.toml", "[search]\nmax_matches = 2\n"),
        ("app.log", "hit\nhit\nhit\n"),
    ]);

    backscan_cmd()
        .current_dir(dir.path())
        .args(["-C", "custom.toml", "search", "hit", "app.log"])
        .assert()
        .success()
        .stdout(predicates::str::contains("2 matches"));
}

/// BACKSCAN_CONFIG points at a config like -C does
#[test]
fn config_env_var_is_honored() {
    let dir = temp_tree(&[
        (".git/keep", ""),
        ("custom.toml", "[search]\nmax_matches = 2\n"),
        ("app.log", "hit\nhit\nhit\n"),
    ]);

    backscan_cmd()
        .current_dir(dir.path())
        .env("BACKSCAN_CONFIG", "custom.toml")
        .args(["search", "hit", "app.log"])
        .assert()
        .success()
        .stdout(predicates::str::contains("2 matches"));
}

// =============================================================================
// Precedence and failure
// =============================================================================

/// A flag on the command line overrides the config value
#[test]
fn flags_override_config_values() {
    let dir = temp_tree(&[
        (".git/keep", ""),
        ("backscan.toml", "[search]\nmax_matches = 1\n"),
        ("app.log", "hit\nhit\nhit\n"),
    ]);

    backscan_cmd()
        .current_dir(dir.path())
        .args(["search", "hit", "app.log", "--max-matches", "0"])
        .assert()
        .success()
        .stdout(predicates::str::contains("3 matches"));
}

/// A malformed config fails every command
#[test]
fn invalid_config_is_a_hard_failure() {
    let dir = temp_tree(&[
        (".git/keep", ""),
        ("backscan.toml", "window_size = \"big\"\n"),
    ]);

    backscan_cmd()
        .current_dir(dir.path())
        .args(["sanitize", "name"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid config"));
}
