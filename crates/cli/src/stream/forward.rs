// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Forward line streaming, the front-to-back mirror of the backward
//! machine.

use std::collections::VecDeque;
use std::io::{self, Read};

use super::{Separator, StreamOptions};

/// Streams the lines of a byte source first to last, reading forward in
/// fixed-size windows.
///
/// Shares the separator model of [`super::ReverseLineStream`] exactly,
/// so reversing this stream's output equals the backward stream's
/// output for any window size. Needs only `Read`: the trailing
/// unterminated tail is carried across windows, and a window ending in
/// a lone CR withholds it until the next window rules out a straddling
/// CRLF.
#[derive(Debug)]
pub struct ForwardLineStream<R> {
    source: R,
    window: Option<u64>,
    separator: Separator,
    keep_separator: bool,
    /// Bytes after the last complete terminator seen so far.
    carry: Vec<u8>,
    /// Split lines not yet yielded, front is next.
    pending: VecDeque<Vec<u8>>,
    eof: bool,
    done: bool,
}

impl<R: Read> ForwardLineStream<R> {
    /// Creates a stream with default options: whole-source window,
    /// automatic separators, terminators stripped.
    pub fn new(source: R) -> Self {
        Self::with_options(source, StreamOptions::default())
    }

    /// Creates a stream with explicit options.
    pub fn with_options(source: R, options: StreamOptions) -> Self {
        Self {
            source,
            window: options.window_size.filter(|&w| w > 0),
            separator: options.separator,
            keep_separator: options.keep_separator,
            carry: Vec::new(),
            pending: VecDeque::new(),
            eof: false,
            done: false,
        }
    }

    /// Consumes the stream and returns the source.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Reads one window and splits everything up to the last complete
    /// terminator; the rest stays carried.
    fn advance(&mut self) -> io::Result<()> {
        let chunk = self.read_window()?;
        if chunk.is_empty() {
            self.eof = true;
            return Ok(());
        }
        self.carry.extend_from_slice(&chunk);
        if let Some(cut) = self.separator.last_complete_end(&self.carry) {
            let rest = self.carry.split_off(cut);
            let head = std::mem::replace(&mut self.carry, rest);
            for piece in self.separator.split(&head, self.keep_separator) {
                self.pending.push_back(piece);
            }
        }
        Ok(())
    }

    fn read_window(&mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        match self.window {
            Some(w) => {
                self.source.by_ref().take(w).read_to_end(&mut buf)?;
            }
            None => {
                self.source.read_to_end(&mut buf)?;
            }
        }
        Ok(buf)
    }
}

impl<R: Read> Iterator for ForwardLineStream<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }
            if self.done {
                return None;
            }
            if self.eof {
                self.done = true;
                if self.carry.is_empty() {
                    return None;
                }
                // A held trailing CR is a real lone-CR terminator now.
                let tail = std::mem::take(&mut self.carry);
                for piece in self.separator.split(&tail, self.keep_separator) {
                    self.pending.push_back(piece);
                }
                continue;
            }
            if let Err(e) = self.advance() {
                self.done = true;
                return Some(Err(e));
            }
        }
    }
}

#[cfg(test)]
#[path = "forward_tests.rs"]
mod tests;
