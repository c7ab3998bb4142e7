// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Decoded text layer over the byte-level stream machines.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::encoding::Encoding;
use crate::error::{Error, Result};

use super::{ForwardLineStream, ReverseLineStream, Separator, StreamOptions};

/// Options for reading a file as decoded text lines.
#[derive(Debug, Clone)]
pub struct TextOptions {
    /// Bytes per window; `None` reads the whole file in one window.
    pub window_size: Option<u64>,
    /// Custom line separator. `None` (or an empty string) recognizes
    /// CR, LF, and CRLF. The string is encoded with `encoding` before
    /// byte-level splitting, which is what makes custom separators work
    /// on UTF-16 sources.
    pub separator: Option<String>,
    /// Re-terminate every yielded line with the separator (the custom
    /// one, or `"\n"` when automatic), after right-trimming. Lines are
    /// uniform regardless of which terminator the source used.
    pub keep_separator: bool,
    pub encoding: Encoding,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            window_size: None,
            separator: None,
            keep_separator: true,
            encoding: Encoding::default(),
        }
    }
}

#[derive(Debug)]
enum Machine {
    Forward(ForwardLineStream<File>),
    Reverse(ReverseLineStream<File>),
}

/// Decoded line iterator over a file, in either direction.
///
/// Each raw line is decoded strictly with the configured encoding,
/// right-trimmed, and optionally re-terminated. Yields
/// `Result<String>`; the first error fuses the iterator.
#[derive(Debug)]
pub struct TextLines {
    machine: Machine,
    path: PathBuf,
    encoding: Encoding,
    keep_separator: bool,
    terminator: String,
    done: bool,
}

impl TextLines {
    /// Opens `path` and streams its lines last to first.
    pub fn reverse(path: impl AsRef<Path>, options: &TextOptions) -> Result<Self> {
        let path = path.as_ref();
        let (file, stream_options) = Self::open(path, options)?;
        let machine = ReverseLineStream::with_options(file, stream_options)
            .map_err(|e| Error::read(path, e))
            .map(Machine::Reverse)?;
        Ok(Self::wrap(machine, path, options))
    }

    /// Opens `path` and streams its lines first to last.
    pub fn forward(path: impl AsRef<Path>, options: &TextOptions) -> Result<Self> {
        let path = path.as_ref();
        let (file, stream_options) = Self::open(path, options)?;
        let machine = Machine::Forward(ForwardLineStream::with_options(file, stream_options));
        Ok(Self::wrap(machine, path, options))
    }

    fn open(path: &Path, options: &TextOptions) -> Result<(File, StreamOptions)> {
        let file = File::open(path).map_err(|e| Error::read(path, e))?;
        let separator = match options.separator.as_deref() {
            Some(s) if !s.is_empty() => Separator::Bytes(options.encoding.encode(s)?),
            _ => Separator::Auto,
        };
        let stream_options = StreamOptions {
            window_size: options.window_size,
            separator,
            // terminators are stripped at byte level and re-attached
            // uniformly after trimming
            keep_separator: false,
        };
        Ok((file, stream_options))
    }

    fn wrap(machine: Machine, path: &Path, options: &TextOptions) -> Self {
        let terminator = match options.separator.as_deref() {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => "\n".to_string(),
        };
        Self {
            machine,
            path: path.to_path_buf(),
            encoding: options.encoding,
            keep_separator: options.keep_separator,
            terminator,
            done: false,
        }
    }
}

impl Iterator for TextLines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let raw = match &mut self.machine {
            Machine::Forward(stream) => stream.next(),
            Machine::Reverse(stream) => stream.next(),
        }?;
        let raw = match raw {
            Ok(bytes) => bytes,
            Err(e) => {
                self.done = true;
                return Some(Err(Error::read(&self.path, e)));
            }
        };
        let text = match self.encoding.decode(&raw) {
            Ok(text) => text,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };
        let trimmed = text.trim_end();
        let line = if self.keep_separator {
            format!("{trimmed}{}", self.terminator)
        } else {
            trimmed.to_string()
        };
        Some(Ok(line))
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
