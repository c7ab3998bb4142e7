// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Windowed line streaming over byte sources.
//!
//! Two machines share one separator model: [`ReverseLineStream`] walks a
//! seekable source back to front in fixed-size windows, and
//! [`ForwardLineStream`] is its front-to-back mirror, so that the forward
//! lines reversed equal the reverse stream's output for any window size.
//! [`TextLines`] wraps either machine in a decoding text layer.

mod forward;
mod reverse;
mod separator;
mod text;

pub use forward::ForwardLineStream;
pub use reverse::ReverseLineStream;
pub use separator::Separator;
pub use text::{TextLines, TextOptions};

/// Options shared by both stream directions.
#[derive(Debug, Clone, Default)]
pub struct StreamOptions {
    /// Bytes read per window. `None` (or zero) uses a single window
    /// covering the whole remaining source, which trades memory for
    /// fewer seeks; pass an explicit bound to cap memory.
    pub window_size: Option<u64>,
    /// What ends a line.
    pub separator: Separator,
    /// Yield lines with their terminator bytes attached.
    pub keep_separator: bool,
}
