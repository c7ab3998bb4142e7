// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Base64 with a fixed set of alphabets.
//!
//! Three variants cover the wire formats in the wild: the classic
//! `+/=` alphabet, RFC 3501's unpadded `+,` form for IMAP mailbox
//! names, and RFC 4648's URL-safe `-_` form. Decoding is strict about
//! symbols and keeps NUL bytes intact.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const STANDARD: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const RFC3501: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+,";
const RFC4648: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// File streaming chunk, a multiple of 3 so blocks never pad mid-file.
const FILE_CHUNK: u64 = 3 * 1024;

/// The symbol set and padding policy for encoding and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
pub enum Alphabet {
    /// `+` and `/`, `=`-padded.
    #[default]
    #[value(name = "standard")]
    #[serde(rename = "standard")]
    Standard,
    /// `+` and `,`, unpadded (IMAP mailbox names).
    #[value(name = "rfc3501")]
    #[serde(rename = "rfc3501")]
    Rfc3501,
    /// `-` and `_`, `=`-padded (URL-safe).
    #[value(name = "rfc4648")]
    #[serde(rename = "rfc4648")]
    Rfc4648,
}

impl Alphabet {
    fn table(self) -> &'static [u8; 64] {
        match self {
            Alphabet::Standard => STANDARD,
            Alphabet::Rfc3501 => RFC3501,
            Alphabet::Rfc4648 => RFC4648,
        }
    }

    fn padded(self) -> bool {
        !matches!(self, Alphabet::Rfc3501)
    }
}

/// Encodes `data` with the given alphabet.
pub fn encode(data: &[u8], alphabet: Alphabet) -> String {
    let table = alphabet.table();
    let mut out = String::with_capacity(data.len().div_ceil(3) * 4);

    let mut blocks = data.chunks_exact(3);
    for block in &mut blocks {
        let acc = u32::from(block[0]) << 16 | u32::from(block[1]) << 8 | u32::from(block[2]);
        out.push(char::from(table[(acc >> 18) as usize]));
        out.push(char::from(table[(acc >> 12 & 0x3f) as usize]));
        out.push(char::from(table[(acc >> 6 & 0x3f) as usize]));
        out.push(char::from(table[(acc & 0x3f) as usize]));
    }
    match blocks.remainder() {
        [a] => {
            let acc = u32::from(*a) << 4;
            out.push(char::from(table[(acc >> 6) as usize]));
            out.push(char::from(table[(acc & 0x3f) as usize]));
            if alphabet.padded() {
                out.push_str("==");
            }
        }
        [a, b] => {
            let acc = u32::from(*a) << 10 | u32::from(*b) << 2;
            out.push(char::from(table[(acc >> 12) as usize]));
            out.push(char::from(table[(acc >> 6 & 0x3f) as usize]));
            out.push(char::from(table[(acc & 0x3f) as usize]));
            if alphabet.padded() {
                out.push('=');
            }
        }
        _ => {}
    }
    out
}

/// Decodes `text` with the given alphabet.
///
/// Surrounding whitespace is ignored. Padded alphabets require a
/// length that is a multiple of four; the unpadded RFC 3501 form (and
/// RFC 4648 input that lost its `=`) is completed from the length.
/// Unknown symbols, `=` anywhere but the tail, and impossible lengths
/// are errors.
pub fn decode(text: &str, alphabet: Alphabet) -> Result<Vec<u8>> {
    let text = text.trim();
    let content = text.trim_end_matches('=');
    if alphabet == Alphabet::Standard && text.len() % 4 != 0 {
        return Err(Error::Base64("length is not a multiple of 4".to_string()));
    }
    if content.len() % 4 == 1 {
        return Err(Error::Base64("truncated final group".to_string()));
    }

    let table = alphabet.table();
    let mut out = Vec::with_capacity(content.len() / 4 * 3 + 2);
    for (group_index, group) in content.as_bytes().chunks(4).enumerate() {
        let mut acc = 0u32;
        for (offset, &symbol) in group.iter().enumerate() {
            let value = table.iter().position(|&b| b == symbol).ok_or_else(|| {
                Error::Base64(format!(
                    "invalid symbol {:?} at offset {}",
                    char::from(symbol),
                    group_index * 4 + offset
                ))
            })?;
            acc = acc << 6 | value as u32;
        }
        match group.len() {
            4 => {
                out.push((acc >> 16) as u8);
                out.push((acc >> 8) as u8);
                out.push(acc as u8);
            }
            3 => {
                out.push((acc >> 10) as u8);
                out.push((acc >> 2) as u8);
            }
            _ => out.push((acc >> 4) as u8),
        }
    }
    Ok(out)
}

/// Encodes `src` into `dst` as one unwrapped base64 line.
///
/// Streams in fixed chunks, so the source never has to fit in memory.
pub fn encode_file(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    alphabet: Alphabet,
) -> Result<()> {
    let src = src.as_ref();
    let dst = dst.as_ref();
    let mut reader = File::open(src).map_err(|e| Error::read(src, e))?;
    let mut writer =
        BufWriter::new(File::create(dst).map_err(|e| Error::write(dst, e))?);

    loop {
        let mut chunk = Vec::with_capacity(FILE_CHUNK as usize);
        let n = Read::by_ref(&mut reader)
            .take(FILE_CHUNK)
            .read_to_end(&mut chunk)
            .map_err(|e| Error::read(src, e))?;
        if n == 0 {
            break;
        }
        writer
            .write_all(encode(&chunk, alphabet).as_bytes())
            .map_err(|e| Error::write(dst, e))?;
    }
    writer.flush().map_err(|e| Error::write(dst, e))
}

/// Decodes the base64 text in `src` into `dst`.
///
/// Unlike [`encode_file`] this reads the whole source up front: how
/// the tail decodes depends on total length, so the text cannot be
/// decoded chunkwise without tracking padding across chunks.
pub fn decode_file(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    alphabet: Alphabet,
) -> Result<()> {
    let src = src.as_ref();
    let dst = dst.as_ref();
    let text = fs::read_to_string(src).map_err(|e| Error::read(src, e))?;
    let decoded = decode(&text, alphabet)?;
    fs::write(dst, decoded).map_err(|e| Error::write(dst, e))
}

#[cfg(test)]
#[path = "base64_tests.rs"]
mod tests;
