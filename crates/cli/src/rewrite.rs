// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-place find/replace over text files.
//!
//! The target is renamed to `<name>.orig`, streamed back line by line,
//! and rewritten to the original path; the backup is removed on success
//! unless the caller keeps it. Line endings pass through byte-exact,
//! only matched text changes.

use std::borrow::Cow;
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::encoding::Encoding;
use crate::error::{Error, Result};
use crate::search::PatternMode;
use crate::stream::{ForwardLineStream, Separator, StreamOptions};

/// Read window for streaming the backup file back in.
const WINDOW_SIZE: u64 = 64 * 1024;

/// Options for [`replace_in_file`].
#[derive(Debug, Clone, Default)]
pub struct ReplaceOptions {
    /// Treat the search text as a literal or as a regular expression.
    pub mode: PatternMode,
    /// Encoding of the file.
    pub encoding: Encoding,
    /// Line separator override; `None` splits on LF, CRLF, and lone CR.
    /// Multi-byte encodings need an explicit separator.
    pub separator: Option<String>,
    /// Keep the `<name>.orig` backup after a successful rewrite.
    pub keep_original: bool,
}

/// Replaces `search` with `replace` on every line of `path`.
///
/// Returns the number of lines the search matched on. The file is renamed to
/// `<name>.orig` before rewriting; on success the backup is removed
/// unless [`ReplaceOptions::keep_original`] is set, on error it stays
/// behind as the recovery copy. An empty `search` leaves the file
/// untouched.
///
/// In regex mode the replacement text may reference capture groups
/// (`$1`, `$name`).
pub fn replace_in_file(
    path: impl AsRef<Path>,
    search: &str,
    replace: &str,
    options: &ReplaceOptions,
) -> Result<u64> {
    let path = path.as_ref();
    if search.is_empty() {
        return Ok(0);
    }

    // Everything fallible that does not need the file happens before
    // the rename, so a bad pattern cannot leave a half-moved file.
    let replacer = match options.mode {
        PatternMode::Literal => Replacer::Literal { search, replace },
        PatternMode::Regex => Replacer::Regex { re: Regex::new(search)?, replace },
    };
    let separator = match options.separator.as_deref() {
        Some(s) if !s.is_empty() => Separator::Bytes(options.encoding.encode(s)?),
        _ => Separator::Auto,
    };

    let backup = backup_path(path);
    fs::rename(path, &backup).map_err(|e| Error::read(path, e))?;

    let source = File::open(&backup).map_err(|e| Error::read(&backup, e))?;
    let lines = ForwardLineStream::with_options(
        source,
        StreamOptions { window_size: Some(WINDOW_SIZE), separator, keep_separator: true },
    );
    let target = File::create(path).map_err(|e| Error::write(path, e))?;
    let mut writer = BufWriter::new(target);

    let mut changed = 0u64;
    for piece in lines {
        let piece = piece.map_err(|e| Error::read(&backup, e))?;
        let line = options.encoding.decode(&piece)?;
        let rewritten = replacer.apply(&line);
        if matches!(rewritten, Cow::Owned(_)) {
            changed += 1;
        }
        let encoded = options.encoding.encode(&rewritten)?;
        writer.write_all(&encoded).map_err(|e| Error::write(path, e))?;
    }
    writer.flush().map_err(|e| Error::write(path, e))?;

    if !options.keep_original {
        fs::remove_file(&backup).map_err(|e| Error::write(&backup, e))?;
    }
    Ok(changed)
}

fn backup_path(path: &Path) -> PathBuf {
    let mut backup = path.as_os_str().to_owned();
    backup.push(".orig");
    PathBuf::from(backup)
}

enum Replacer<'p> {
    Literal { search: &'p str, replace: &'p str },
    Regex { re: Regex, replace: &'p str },
}

impl Replacer<'_> {
    fn apply<'t>(&self, line: &'t str) -> Cow<'t, str> {
        match self {
            Replacer::Literal { search, replace } => {
                if line.contains(search) {
                    Cow::Owned(line.replace(search, replace))
                } else {
                    Cow::Borrowed(line)
                }
            }
            Replacer::Regex { re, replace } => re.replace_all(line, *replace),
        }
    }
}

#[cfg(test)]
#[path = "rewrite_tests.rs"]
mod tests;
