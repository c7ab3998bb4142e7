// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bidirectional text search over files.
//!
//! Matching hierarchy: literal patterns use memchr::memmem, anything
//! more goes through the regex crate. Lines come from the stream layer
//! with terminators stripped, so `^`/`$` anchors see bare line content.

use std::path::Path;

use memchr::memmem;
use regex::Regex;

use crate::encoding::Encoding;
use crate::error::Result;
use crate::stream::{TextLines, TextOptions};

/// Which end of the file to search from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Direction {
    /// First line toward the last.
    Forward,
    /// Last line toward the first (the default: recent entries first in
    /// append-style files).
    #[default]
    Backward,
}

/// How the pattern string is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PatternMode {
    /// Exact substring.
    #[default]
    Literal,
    /// Regular expression, first match per line.
    Regex,
}

/// Options for [`search_file`] and [`search_first`].
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub direction: Direction,
    pub mode: PatternMode,
    /// Stop after this many matches; `0` collects them all.
    pub max_matches: usize,
    pub encoding: Encoding,
}

/// Searches `path` line by line and collects the matched text, in
/// visit order (back to front for [`Direction::Backward`]).
///
/// Returns `Ok(None)` when nothing matched — including for an empty
/// pattern, which by definition matches nothing. `Err` means the
/// search could not be performed at all: unreadable file, undecodable
/// bytes, or a pattern that fails to compile.
pub fn search_file(
    path: impl AsRef<Path>,
    pattern: &str,
    options: &SearchOptions,
) -> Result<Option<Vec<String>>> {
    let path = path.as_ref();
    if pattern.is_empty() {
        return Ok(None);
    }
    let matcher = Matcher::new(pattern, options.mode)?;
    tracing::debug!(
        "searching {} {:?} for {:?}",
        path.display(),
        options.direction,
        pattern
    );

    let text_options = TextOptions {
        keep_separator: false,
        encoding: options.encoding,
        ..Default::default()
    };
    let lines = match options.direction {
        Direction::Forward => TextLines::forward(path, &text_options)?,
        Direction::Backward => TextLines::reverse(path, &text_options)?,
    };

    let mut found = Vec::new();
    for line in lines {
        let line = line?;
        if let Some(text) = matcher.find(&line) {
            found.push(text.to_string());
            if options.max_matches > 0 && found.len() == options.max_matches {
                break;
            }
        }
    }
    if found.is_empty() { Ok(None) } else { Ok(Some(found)) }
}

/// Searches for the first match only.
pub fn search_first(
    path: impl AsRef<Path>,
    pattern: &str,
    options: &SearchOptions,
) -> Result<Option<String>> {
    let bounded = SearchOptions { max_matches: 1, ..options.clone() };
    Ok(search_file(path, pattern, &bounded)?.and_then(|matches| matches.into_iter().next()))
}

/// A pattern compiled once per search call.
enum Matcher<'p> {
    Literal { finder: memmem::Finder<'p>, pattern: &'p str },
    Regex(Regex),
}

impl<'p> Matcher<'p> {
    fn new(pattern: &'p str, mode: PatternMode) -> Result<Self> {
        match mode {
            PatternMode::Literal => Ok(Matcher::Literal {
                finder: memmem::Finder::new(pattern.as_bytes()),
                pattern,
            }),
            PatternMode::Regex => Ok(Matcher::Regex(Regex::new(pattern)?)),
        }
    }

    /// The matched text within `line`, if any.
    fn find<'t>(&self, line: &'t str) -> Option<&'t str> {
        match self {
            Matcher::Literal { finder, pattern } => {
                let start = finder.find(line.as_bytes())?;
                line.get(start..start + pattern.len())
            }
            Matcher::Regex(re) => re.find(line).map(|m| m.as_str()),
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
