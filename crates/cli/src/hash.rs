// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Salted MD5 digests.
//!
//! These exist for talking to services that key on legacy MD5 schemes;
//! they are not a password store and make no security claims.

use md5::{Digest, Md5};

const HEX: &[u8; 16] = b"0123456789abcdef";

/// MD5 of `prefix` + `data` + `suffix`, as lowercase hex.
pub fn md5_salted(
    data: impl AsRef<[u8]>,
    prefix: impl AsRef<[u8]>,
    suffix: impl AsRef<[u8]>,
) -> String {
    let mut hasher = Md5::new();
    hasher.update(prefix.as_ref());
    hasher.update(data.as_ref());
    hasher.update(suffix.as_ref());
    hex_digest(&hasher.finalize())
}

/// Like [`md5_salted`], then hashes the hex digest again with the same
/// salts.
pub fn md5_salted_double(
    data: impl AsRef<[u8]>,
    prefix: impl AsRef<[u8]>,
    suffix: impl AsRef<[u8]>,
) -> String {
    let first = md5_salted(data, prefix.as_ref(), suffix.as_ref());
    md5_salted(first, prefix, suffix)
}

fn hex_digest(digest: &[u8]) -> String {
    let mut out = String::with_capacity(digest.len() * 2);
    for &byte in digest {
        out.push(char::from(HEX[usize::from(byte >> 4)]));
        out.push(char::from(HEX[usize::from(byte & 0x0f)]));
    }
    out
}

#[cfg(test)]
#[path = "hash_tests.rs"]
mod tests;
