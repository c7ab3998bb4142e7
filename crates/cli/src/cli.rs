//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::base64::Alphabet;
use crate::color::ColorMode;
use crate::encoding::Encoding;
use crate::search::{Direction, PatternMode};

/// Streaming line tools for large text files, back to front
#[derive(Parser)]
#[command(name = "backscan")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "BACKSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search a file for text, from the end by default
    Search(SearchArgs),
    /// Print a file's lines last to first
    Reverse(ReverseArgs),
    /// Find files by name under a directory
    Find(FindArgs),
    /// Rewrite a file name using filesystem-safe characters
    Sanitize(SanitizeArgs),
    /// Search and replace text inside a file
    Replace(ReplaceArgs),
    /// Salted MD5 digest of a string
    Hash(HashArgs),
    /// Base64-encode a file
    Encode(CodecArgs),
    /// Base64-decode a file
    Decode(CodecArgs),
}

#[derive(clap::Args)]
pub struct SearchArgs {
    /// Text or regex to look for
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// File to search
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Search direction
    #[arg(long, default_value = "backward", value_name = "DIR")]
    pub direction: Direction,

    /// How to interpret the pattern
    #[arg(long, default_value = "literal", value_name = "MODE")]
    pub mode: PatternMode,

    /// Stop after N matches (0 searches the whole file)
    #[arg(long, value_name = "N")]
    pub max_matches: Option<usize>,

    /// Text encoding of the file
    #[arg(long, value_name = "ENCODING")]
    pub encoding: Option<Encoding>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct ReverseArgs {
    /// File to print
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Read window in bytes (default: whole file)
    #[arg(long, value_name = "BYTES")]
    pub window: Option<u64>,

    /// Line separator (default: LF, CRLF, or lone CR)
    #[arg(long, value_name = "SEP")]
    pub separator: Option<String>,

    /// Text encoding of the file
    #[arg(long, value_name = "ENCODING")]
    pub encoding: Option<Encoding>,
}

#[derive(clap::Args)]
pub struct FindArgs {
    /// File name to look for
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Directory to search under
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Match any file whose name contains NAME
    #[arg(long)]
    pub partial: bool,

    /// Print the containing directory instead of the file
    #[arg(long)]
    pub dirs: bool,

    /// Print every match instead of the first
    #[arg(long)]
    pub all: bool,

    /// Honor .gitignore and friends while walking
    #[arg(long)]
    pub respect_ignores: bool,
}

#[derive(clap::Args)]
pub struct SanitizeArgs {
    /// Candidate file name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Keep leading whitespace
    #[arg(long)]
    pub keep_left: bool,

    /// Keep trailing whitespace
    #[arg(long)]
    pub keep_right: bool,
}

#[derive(clap::Args)]
pub struct ReplaceArgs {
    /// Text or regex to search for
    #[arg(value_name = "SEARCH")]
    pub search: String,

    /// Replacement text
    #[arg(value_name = "REPLACE")]
    pub replace: String,

    /// File to rewrite
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// How to interpret the search text
    #[arg(long, default_value = "literal", value_name = "MODE")]
    pub mode: PatternMode,

    /// Text encoding of the file
    #[arg(long, value_name = "ENCODING")]
    pub encoding: Option<Encoding>,

    /// Line separator (default: LF, CRLF, or lone CR)
    #[arg(long, value_name = "SEP")]
    pub separator: Option<String>,

    /// Keep the .orig backup after rewriting
    #[arg(long)]
    pub keep_original: bool,
}

#[derive(clap::Args)]
pub struct HashArgs {
    /// Text to digest
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Salt prepended before hashing
    #[arg(long, default_value = "", value_name = "SALT")]
    pub prefix: String,

    /// Salt appended before hashing
    #[arg(long, default_value = "", value_name = "SALT")]
    pub suffix: String,

    /// Hash the hex digest a second time
    #[arg(long)]
    pub double: bool,
}

#[derive(clap::Args)]
pub struct CodecArgs {
    /// Source file
    #[arg(value_name = "SRC")]
    pub src: PathBuf,

    /// Destination file
    #[arg(value_name = "DST")]
    pub dst: PathBuf,

    /// Base64 symbol set
    #[arg(long, value_name = "ALPHABET")]
    pub alphabet: Option<Alphabet>,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
