// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Crate-wide error and result types.

use std::io;
use std::path::PathBuf;

use crate::encoding::Encoding;

/// A type alias for `Result<T, backscan::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while streaming, searching, or transforming files.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The source could not be opened, seeked, or read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination could not be created, written, or replaced.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Bytes that are not valid in the configured encoding.
    ///
    /// Decoding is strict: malformed input is reported here, never
    /// replaced with substitution characters.
    #[error("invalid {encoding} byte sequence at offset {offset}")]
    Decode { encoding: Encoding, offset: usize },

    /// A character with no representation in the target encoding.
    #[error("cannot encode {ch:?} as {encoding}")]
    Encode { encoding: Encoding, ch: char },

    /// The search pattern failed to compile as a regular expression.
    ///
    /// Distinct from "no match": searching for an empty pattern yields
    /// `Ok(None)`, never an error.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Base64 input that cannot be decoded.
    #[error("invalid base64: {0}")]
    Base64(String),

    /// A directory operation was pointed at something else.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

impl Error {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Read { path: path.into(), source }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Write { path: path.into(), source }
    }
}
