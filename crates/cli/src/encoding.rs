// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text encodings for line decoding and separator encoding.
//!
//! A small fixed set, no charset detection. Decoding is strict: any
//! malformed sequence is an error, never a replacement character.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Supported text encodings.
///
/// The automatic separator set (CR, LF, CRLF) scans raw bytes and is
/// only meaningful for ASCII-compatible encodings; UTF-16 sources need
/// an explicit separator string, which is encoded with the stream's
/// encoding before splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
pub enum Encoding {
    /// UTF-8 (default).
    #[default]
    #[value(name = "utf-8", alias = "utf8")]
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    /// UTF-16, little-endian, no BOM handling.
    #[value(name = "utf-16le", alias = "utf16le")]
    #[serde(rename = "utf-16le", alias = "utf16le")]
    Utf16Le,
    /// UTF-16, big-endian, no BOM handling.
    #[value(name = "utf-16be", alias = "utf16be")]
    #[serde(rename = "utf-16be", alias = "utf16be")]
    Utf16Be,
    /// ISO-8859-1.
    #[value(name = "latin-1", alias = "latin1", alias = "iso-8859-1")]
    #[serde(rename = "latin-1", alias = "latin1", alias = "iso-8859-1")]
    Latin1,
}

impl Encoding {
    /// Canonical lowercase label.
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf16Le => "utf-16le",
            Encoding::Utf16Be => "utf-16be",
            Encoding::Latin1 => "latin-1",
        }
    }

    /// Decodes `bytes` strictly.
    ///
    /// The offset in [`Error::Decode`] is a byte offset into `bytes`.
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self {
            Encoding::Utf8 => match std::str::from_utf8(bytes) {
                Ok(text) => Ok(text.to_string()),
                Err(e) => Err(Error::Decode { encoding: *self, offset: e.valid_up_to() }),
            },
            Encoding::Utf16Le | Encoding::Utf16Be => self.decode_utf16(bytes),
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }

    /// Encodes `text`, failing on characters the encoding cannot hold.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        match self {
            Encoding::Utf8 => Ok(text.as_bytes().to_vec()),
            Encoding::Utf16Le => {
                Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect())
            }
            Encoding::Utf16Be => {
                Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect())
            }
            Encoding::Latin1 => {
                let mut out = Vec::with_capacity(text.len());
                for ch in text.chars() {
                    match u8::try_from(u32::from(ch)) {
                        Ok(b) => out.push(b),
                        Err(_) => return Err(Error::Encode { encoding: *self, ch }),
                    }
                }
                Ok(out)
            }
        }
    }

    fn decode_utf16(&self, bytes: &[u8]) -> Result<String> {
        if bytes.len() % 2 != 0 {
            return Err(Error::Decode {
                encoding: *self,
                offset: bytes.len().saturating_sub(1),
            });
        }
        let units = bytes.chunks_exact(2).map(|pair| match self {
            Encoding::Utf16Be => u16::from_be_bytes([pair[0], pair[1]]),
            _ => u16::from_le_bytes([pair[0], pair[1]]),
        });
        let mut out = String::with_capacity(bytes.len() / 2);
        let mut unit_offset = 0;
        for decoded in char::decode_utf16(units) {
            match decoded {
                Ok(ch) => {
                    out.push(ch);
                    unit_offset += ch.len_utf16();
                }
                Err(_) => {
                    return Err(Error::Decode { encoding: *self, offset: unit_offset * 2 });
                }
            }
        }
        Ok(out)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "encoding_tests.rs"]
mod tests;
