// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Backward line streaming over a seekable byte source.

use std::collections::VecDeque;
use std::io::{self, Read, Seek, SeekFrom};

use super::{Separator, StreamOptions};

/// Streams the lines of a byte source from the last to the first,
/// reading backward in fixed-size windows.
///
/// Works on any `Read + Seek` source. Only the current window plus any
/// straddle extension is held in memory, so a bounded `window_size`
/// gives bounded memory on arbitrarily large sources; the default is a
/// single window covering the whole source. The source length is fixed
/// at construction: appending during iteration is ignored, truncation
/// below the read cursor surfaces as a read error.
///
/// # Example
///
/// ```no_run
/// use std::fs::File;
/// use backscan::stream::{ReverseLineStream, StreamOptions};
///
/// # fn main() -> std::io::Result<()> {
/// let file = File::open("app.log")?;
/// let options = StreamOptions { window_size: Some(8192), ..Default::default() };
/// for line in ReverseLineStream::with_options(file, options)? {
///     let line = line?;
///     // last line first
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ReverseLineStream<R> {
    source: R,
    /// Byte offset below which nothing has been windowed yet. Windows
    /// walk it from the source length down to zero.
    remaining: u64,
    window: Option<u64>,
    separator: Separator,
    keep_separator: bool,
    /// Head piece of the last split. Its start may still be completed
    /// by earlier windows, so it is withheld until the window below it
    /// proves it whole.
    carry: Option<Vec<u8>>,
    /// Split lines not yet yielded, front is next.
    pending: VecDeque<Vec<u8>>,
    phase: Phase,
}

/// Explicit machine state: reading windows, emitting the final carry,
/// or exhausted (also after an error, which fuses the iterator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Reading,
    FinalCarry,
    Done,
}

impl<R: Read + Seek> ReverseLineStream<R> {
    /// Creates a stream with default options: whole-source window,
    /// automatic separators, terminators stripped.
    pub fn new(source: R) -> io::Result<Self> {
        Self::with_options(source, StreamOptions::default())
    }

    /// Creates a stream with explicit options.
    ///
    /// Seeks to the end once to learn the source length; an empty
    /// source yields no lines at all.
    pub fn with_options(mut source: R, options: StreamOptions) -> io::Result<Self> {
        let len = source.seek(SeekFrom::End(0))?;
        Ok(Self {
            source,
            remaining: len,
            window: options.window_size.filter(|&w| w > 0),
            separator: options.separator,
            keep_separator: options.keep_separator,
            carry: None,
            pending: VecDeque::new(),
            phase: if len == 0 { Phase::Done } else { Phase::Reading },
        })
    }

    /// Byte offset of the read cursor: everything at or above it has
    /// already been windowed.
    pub fn checkpoint(&self) -> u64 {
        self.remaining
    }

    /// Consumes the stream and returns the source.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Reads the next window plus any straddle extension, splits it,
    /// and settles the previous carry.
    fn advance(&mut self) -> io::Result<()> {
        let batch = self.read_window()?;
        let ends_on_separator = self.separator.ends_with_separator(&batch);
        let mut pieces = self.separator.split(&batch, self.keep_separator);

        // The old carry is later text than this whole window: it is a
        // complete line exactly when the window ends on a separator,
        // otherwise it continues the window's last piece.
        if let Some(prev) = self.carry.take() {
            if ends_on_separator {
                self.pending.push_back(prev);
            } else {
                match pieces.last_mut() {
                    Some(last) => last.extend_from_slice(&prev),
                    None => pieces.push(prev),
                }
            }
        }

        let carry = if pieces.is_empty() { Vec::new() } else { pieces.remove(0) };
        for piece in pieces.into_iter().rev() {
            self.pending.push_back(piece);
        }
        self.carry = Some(carry);
        self.phase = if self.remaining == 0 { Phase::FinalCarry } else { Phase::Reading };
        Ok(())
    }

    /// One checkpoint window, extended backward while its start may sit
    /// inside a separator straddling the window boundary.
    fn read_window(&mut self) -> io::Result<Vec<u8>> {
        let mut batch = self.read_back()?;
        while self.remaining > 0 && self.separator.straddles_start(&batch) {
            let mut earlier = self.read_back()?;
            earlier.append(&mut batch);
            batch = earlier;
        }
        Ok(batch)
    }

    /// Reads the window ending at the current checkpoint and moves the
    /// checkpoint to its start.
    fn read_back(&mut self) -> io::Result<Vec<u8>> {
        let take = match self.window {
            Some(w) => w.min(self.remaining),
            None => self.remaining,
        };
        let start = self.remaining - take;
        self.source.seek(SeekFrom::Start(start))?;
        let mut buf = vec![0; take as usize];
        self.source.read_exact(&mut buf)?;
        self.remaining = start;
        Ok(buf)
    }
}

impl<R: Read + Seek> Iterator for ReverseLineStream<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }
            match self.phase {
                Phase::Done => return None,
                Phase::FinalCarry => {
                    // The first logical line of the source. It may be
                    // empty when the source starts with a separator.
                    self.phase = Phase::Done;
                    return Some(Ok(self.carry.take().unwrap_or_default()));
                }
                Phase::Reading => {
                    if let Err(e) = self.advance() {
                        self.phase = Phase::Done;
                        return Some(Err(e));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "reverse_tests.rs"]
mod tests;
