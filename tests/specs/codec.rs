// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the `backscan hash`, `encode`, and `decode` commands.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// Salted hashing
// =============================================================================

/// Prefix and suffix wrap the text before hashing
#[test]
fn hash_concatenates_prefix_text_suffix() {
    backscan_cmd()
        .arg("hash")
        .arg("b")
        .args(["--prefix", "a", "--suffix", "c"])
        .assert()
        .success()
        .stdout("900150983cd24fb0d6963f7d28e17f72\n");
}

/// --double re-hashes the digest and produces a different one
#[test]
fn hash_double_differs_from_single() {
    let single = backscan_cmd()
        .arg("hash")
        .arg("b")
        .args(["--prefix", "a", "--suffix", "c"])
        .output()
        .expect("command should run");
    let double = backscan_cmd()
        .arg("hash")
        .arg("b")
        .args(["--prefix", "a", "--suffix", "c", "--double"])
        .output()
        .expect("command should run");

    assert!(double.status.success());
    assert_ne!(single.stdout, double.stdout);
    let digest = String::from_utf8(double.stdout).expect("utf-8 output");
    let digest = digest.trim_end();
    assert_eq!(digest.len(), 32);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
}

// =============================================================================
// Base64 files
// =============================================================================

/// Encoding a file writes padded standard base64
#[test]
fn encode_writes_standard_base64() {
    let dir = temp_tree(&[("plain.txt", "hello base64\n")]);
    let encoded = dir.path().join("plain.b64");

    backscan_cmd()
        .arg("encode")
        .arg(dir.path().join("plain.txt"))
        .arg(&encoded)
        .assert()
        .success();

    let content = std::fs::read_to_string(&encoded).expect("encoded file should exist");
    assert_eq!(content, "aGVsbG8gYmFzZTY0Cg==");
}

/// Decoding restores the original bytes
#[test]
fn decode_round_trips() {
    let dir = temp_tree(&[("plain.txt", "hello base64\n")]);
    let encoded = dir.path().join("plain.b64");
    let restored = dir.path().join("restored.txt");

    backscan_cmd()
        .arg("encode")
        .arg(dir.path().join("plain.txt"))
        .arg(&encoded)
        .assert()
        .success();
    backscan_cmd().arg("decode").arg(&encoded).arg(&restored).assert().success();

    let content = std::fs::read_to_string(&restored).expect("restored file should exist");
    assert_eq!(content, "hello base64\n");
}

/// The RFC 3501 alphabet writes no padding
#[test]
fn rfc3501_output_is_unpadded() {
    let dir = temp_tree(&[("plain.txt", "hello base64\n")]);
    let encoded = dir.path().join("plain.b64");

    backscan_cmd()
        .arg("encode")
        .arg(dir.path().join("plain.txt"))
        .arg(&encoded)
        .args(["--alphabet", "rfc3501"])
        .assert()
        .success();

    let content = std::fs::read_to_string(&encoded).expect("encoded file should exist");
    assert_eq!(content, "aGVsbG8gYmFzZTY0Cg");
}

/// Malformed input is a hard failure
#[test]
fn decode_rejects_malformed_input() {
    let dir = temp_tree(&[("bad.b64", "not valid!")]);

    backscan_cmd()
        .arg("decode")
        .arg(dir.path().join("bad.b64"))
        .arg(dir.path().join("out.txt"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid base64"));
}
