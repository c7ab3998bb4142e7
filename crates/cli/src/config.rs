// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading.
//!
//! Settings come from backscan.toml, found next to the project or
//! given explicitly; command-line flags override whatever is loaded
//! here, and everything has a built-in default.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::base64::Alphabet;
use crate::discovery::find_config;
use crate::encoding::Encoding;

/// Root configuration from backscan.toml.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text encoding for all file operations.
    pub encoding: Encoding,

    /// Read window in bytes; unset reads sources whole.
    pub window_size: Option<u64>,

    /// Line separator override; unset splits on LF, CRLF, and CR.
    pub separator: Option<String>,

    /// `[search]` section.
    pub search: SearchSection,

    /// `[base64]` section.
    pub base64: Base64Section,
}

/// Search defaults.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// Stop after this many matches; 0 keeps searching to the end.
    pub max_matches: usize,
}

/// Base64 defaults.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Base64Section {
    /// Symbol set used when none is given on the command line.
    pub alphabet: Alphabet,
}

impl Config {
    /// Loads configuration.
    ///
    /// An explicit path must exist and parse; otherwise backscan.toml
    /// is discovered from the working directory, and no file at all
    /// means built-in defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let discovered = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => std::env::current_dir().ok().and_then(|dir| find_config(&dir)),
        };
        let Some(path) = discovered else {
            return Ok(Config::default());
        };
        let text = fs::read_to_string(&path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
