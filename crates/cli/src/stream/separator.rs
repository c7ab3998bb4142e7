// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line separator model shared by both stream directions.

use memchr::{memchr2, memmem};

/// What ends a line.
///
/// `Auto` recognizes CR, LF, and CRLF, with CRLF matched greedily as a
/// single terminator. `Bytes` is an explicit byte sequence and must be
/// non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Separator {
    /// Any of CR, LF, or CRLF.
    #[default]
    Auto,
    /// A fixed byte sequence, e.g. `b"\x00"` or a multi-byte marker.
    Bytes(Vec<u8>),
}

impl Separator {
    /// Splits `buf` into line pieces.
    ///
    /// Empty pieces between adjacent separators are preserved; a
    /// trailing separator does not open a trailing empty piece. With
    /// `keep` set, each terminated piece retains its separator bytes;
    /// the final piece of an unterminated buffer is returned as-is
    /// either way. An empty buffer has no pieces.
    pub fn split(&self, buf: &[u8], keep: bool) -> Vec<Vec<u8>> {
        let mut pieces = Vec::new();
        let mut at = 0;
        for (start, end) in self.occurrences(buf) {
            let cut = if keep { end } else { start };
            pieces.push(buf[at..cut].to_vec());
            at = end;
        }
        if at < buf.len() {
            pieces.push(buf[at..].to_vec());
        }
        pieces
    }

    /// Non-overlapping separator occurrences as `(start, end)` byte
    /// ranges, scanned left to right.
    fn occurrences(&self, buf: &[u8]) -> Vec<(usize, usize)> {
        let mut found = Vec::new();
        match self {
            Separator::Auto => {
                let mut at = 0;
                while let Some(i) = memchr2(b'\r', b'\n', &buf[at..]) {
                    let start = at + i;
                    let end = if buf[start] == b'\r' && buf.get(start + 1) == Some(&b'\n') {
                        start + 2
                    } else {
                        start + 1
                    };
                    found.push((start, end));
                    at = end;
                }
            }
            Separator::Bytes(sep) => {
                if sep.is_empty() {
                    return found;
                }
                for start in memmem::find_iter(buf, sep) {
                    found.push((start, start + sep.len()));
                }
            }
        }
        found
    }

    /// Whether `buf` begins on bytes that may belong to a separator
    /// continuing from earlier in the source.
    ///
    /// For `Auto` this is any member byte (a leading LF may be the tail
    /// of a CRLF). For `Bytes` it is the full separator or any proper
    /// non-empty suffix of it, which covers a multi-byte separator split
    /// across a window boundary at any point.
    pub(crate) fn straddles_start(&self, buf: &[u8]) -> bool {
        match self {
            Separator::Auto => matches!(buf.first(), Some(&b'\r' | &b'\n')),
            Separator::Bytes(sep) => {
                (1..=sep.len()).any(|n| buf.starts_with(&sep[sep.len() - n..]))
            }
        }
    }

    /// Whether `buf` ends exactly on a separator occurrence.
    pub(crate) fn ends_with_separator(&self, buf: &[u8]) -> bool {
        match self {
            Separator::Auto => matches!(buf.last(), Some(&b'\r' | &b'\n')),
            Separator::Bytes(sep) => !sep.is_empty() && buf.ends_with(sep),
        }
    }

    /// End offset of the last separator occurrence that is known
    /// complete, on the same non-overlapping grid as [`Self::split`].
    ///
    /// A lone CR at the very end of `buf` is not known complete under
    /// `Auto`: the next window may begin with the LF half of a CRLF.
    pub(crate) fn last_complete_end(&self, buf: &[u8]) -> Option<usize> {
        let occurrences = self.occurrences(buf);
        let mut backwards = occurrences.iter().rev();
        let &(start, end) = backwards.next()?;
        if matches!(self, Separator::Auto)
            && end == buf.len()
            && end - start == 1
            && buf[start] == b'\r'
        {
            return backwards.next().map(|&(_, e)| e);
        }
        Some(end)
    }
}

#[cfg(test)]
#[path = "separator_tests.rs"]
mod tests;
