// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filename sanitization.
//!
//! Replaces filesystem-hostile ASCII with full-width lookalikes so the
//! name stays readable, instead of stripping characters.

/// Options for [`sanitize_file_name`].
#[derive(Debug, Clone)]
pub struct SanitizeOptions {
    /// Trim leading whitespace after substitution.
    pub trim_start: bool,
    /// Trim trailing whitespace after substitution.
    pub trim_end: bool,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self { trim_start: true, trim_end: true }
    }
}

/// Rewrites `name` into a string every filesystem accepts.
///
/// Substitutions: `|` becomes `-`; `?` `*` `:` `>` `<` `/` `\` become
/// their full-width lookalikes; CR and LF become `_`; the HTML entity
/// `&nbsp;` becomes a plain space. Double quotes alternate between
/// `“` and `”`, the first one opening. Whitespace trimming runs last,
/// so it also catches whitespace produced by the substitutions.
pub fn sanitize_file_name(name: &str, options: &SanitizeOptions) -> String {
    let spaced = name.replace("&nbsp;", " ");
    let mut out = String::with_capacity(spaced.len());
    let mut quote_closes = false;
    for ch in spaced.chars() {
        match ch {
            '|' => out.push('-'),
            '?' => out.push('？'),
            '*' => out.push('×'),
            '/' => out.push('╱'),
            '\\' => out.push('╲'),
            '\n' | '\r' => out.push('_'),
            ':' => out.push('：'),
            '>' => out.push('〉'),
            '<' => out.push('〈'),
            '"' => {
                out.push(if quote_closes { '”' } else { '“' });
                quote_closes = !quote_closes;
            }
            other => out.push(other),
        }
    }
    let trimmed = match (options.trim_start, options.trim_end) {
        (true, true) => out.trim(),
        (true, false) => out.trim_start(),
        (false, true) => out.trim_end(),
        (false, false) => out.as_str(),
    };
    trimmed.to_string()
}

#[cfg(test)]
#[path = "sanitize_tests.rs"]
mod tests;
