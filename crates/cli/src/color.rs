//! Terminal color resolution and the search output scheme.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// Color output mode from the command line.
#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    /// Always emit color escapes.
    Always,
    /// Never emit color escapes.
    Never,
}

/// Resolves the effective color choice for stdout.
///
/// `no_color` wins over the mode; `Auto` falls back to terminal
/// detection.
pub fn resolve_color(mode: ColorMode, no_color: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto => {
            if std::io::stdout().is_terminal() {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            }
        }
    }
}

/// Color scheme for search output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Matched text: red, bold.
    pub fn matched() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// File paths: cyan.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Match counters: yellow.
    pub fn count() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
