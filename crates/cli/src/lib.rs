// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Streaming line tools for large text files.
//!
//! The core is a pair of windowed line streams: [`stream::ReverseLineStream`]
//! walks a seekable source back to front without loading it whole, and
//! [`stream::ForwardLineStream`] is its front-to-back twin. On top of the
//! raw byte layer sit [`stream::TextLines`] (decoding and re-termination)
//! and [`search`] (literal and regex matching in either direction). Around
//! them are the file utilities the same workflows keep needing: name
//! sanitizing, walking directories for files, in-place replace, salted MD5,
//! and base64 codecs.
//!
//! ```no_run
//! use backscan::search::{search_first, SearchOptions};
//!
//! // last occurrence first: scans the log from the end
//! let hit = search_first("app.log", "ERROR", &SearchOptions::default())?;
//! # Ok::<(), backscan::Error>(())
//! ```

pub mod base64;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod rewrite;
pub mod sanitize;
pub mod search;
pub mod stream;
pub mod walk;


pub use encoding::Encoding;
pub use error::{Error, Result};
pub use stream::{
    ForwardLineStream, ReverseLineStream, Separator, StreamOptions, TextLines, TextOptions,
};
