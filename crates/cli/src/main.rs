use std::io::{BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use termcolor::{StandardStream, WriteColor};

use backscan::base64;
use backscan::cli::{
    Cli, CodecArgs, Command, FindArgs, HashArgs, OutputFormat, ReplaceArgs, ReverseArgs,
    SanitizeArgs, SearchArgs,
};
use backscan::color::{resolve_color, scheme};
use backscan::config::Config;
use backscan::hash::{md5_salted, md5_salted_double};
use backscan::rewrite::{ReplaceOptions, replace_in_file};
use backscan::sanitize::{SanitizeOptions, sanitize_file_name};
use backscan::search::{SearchOptions, search_file};
use backscan::stream::{TextLines, TextOptions};
use backscan::walk::{FindOptions, find_all_by_name, find_file_by_name};

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("backscan: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("BACKSCAN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Search(args) => cmd_search(&args, &config),
        Command::Reverse(args) => cmd_reverse(&args, &config),
        Command::Find(args) => cmd_find(&args),
        Command::Sanitize(args) => cmd_sanitize(&args),
        Command::Replace(args) => cmd_replace(&args, &config),
        Command::Hash(args) => cmd_hash(&args),
        Command::Encode(args) => {
            base64::encode_file(&args.src, &args.dst, alphabet_for(&args, &config))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Decode(args) => {
            base64::decode_file(&args.src, &args.dst, alphabet_for(&args, &config))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn alphabet_for(args: &CodecArgs, config: &Config) -> base64::Alphabet {
    args.alphabet.unwrap_or(config.base64.alphabet)
}

// Exit codes follow grep: 0 found, 1 nothing found, 2 failure.
fn cmd_search(args: &SearchArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let options = SearchOptions {
        direction: args.direction,
        mode: args.mode,
        max_matches: args.max_matches.unwrap_or(config.search.max_matches),
        encoding: args.encoding.unwrap_or(config.encoding),
    };
    let matches = search_file(&args.file, &args.pattern, &options)?;

    match args.output {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "file": args.file,
                "pattern": args.pattern,
                "count": matches.as_ref().map_or(0, Vec::len),
                "matches": matches.as_deref().unwrap_or_default(),
            });
            println!("{}", serde_json::to_string(&payload)?);
        }
        OutputFormat::Text => print_matches(args, matches.as_deref())?,
    }
    Ok(if matches.is_some() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn print_matches(args: &SearchArgs, matches: Option<&[String]>) -> anyhow::Result<()> {
    let mut stdout = StandardStream::stdout(resolve_color(args.color, args.no_color));

    stdout.set_color(&scheme::path())?;
    write!(stdout, "{}", args.file.display())?;
    stdout.reset()?;
    let Some(matches) = matches else {
        writeln!(stdout, ": no matches")?;
        return Ok(());
    };
    write!(stdout, ": ")?;
    stdout.set_color(&scheme::count())?;
    write!(stdout, "{}", matches.len())?;
    stdout.reset()?;
    writeln!(stdout, " {}", if matches.len() == 1 { "match" } else { "matches" })?;

    for text in matches {
        stdout.set_color(&scheme::matched())?;
        write!(stdout, "{text}")?;
        stdout.reset()?;
        writeln!(stdout)?;
    }
    Ok(())
}

fn cmd_reverse(args: &ReverseArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let options = TextOptions {
        window_size: args.window.or(config.window_size),
        separator: args.separator.clone().or_else(|| config.separator.clone()),
        keep_separator: false,
        encoding: args.encoding.unwrap_or(config.encoding),
    };
    let lines = TextLines::reverse(&args.file, &options)?;

    let mut out = BufWriter::new(std::io::stdout().lock());
    for line in lines {
        writeln!(out, "{}", line?)?;
    }
    out.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_find(args: &FindArgs) -> anyhow::Result<ExitCode> {
    let options = FindOptions {
        partial: args.partial,
        dirs_only: args.dirs,
        respect_ignore_files: args.respect_ignores,
    };
    if args.all {
        let found = find_all_by_name(&args.name, &args.root, &options);
        for path in &found {
            println!("{}", path.display());
        }
        return Ok(if found.is_empty() { ExitCode::FAILURE } else { ExitCode::SUCCESS });
    }
    match find_file_by_name(&args.name, &args.root, &options) {
        Some(path) => {
            println!("{}", path.display());
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}

fn cmd_sanitize(args: &SanitizeArgs) -> anyhow::Result<ExitCode> {
    let options =
        SanitizeOptions { trim_start: !args.keep_left, trim_end: !args.keep_right };
    println!("{}", sanitize_file_name(&args.name, &options));
    Ok(ExitCode::SUCCESS)
}

fn cmd_replace(args: &ReplaceArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let options = ReplaceOptions {
        mode: args.mode,
        encoding: args.encoding.unwrap_or(config.encoding),
        separator: args.separator.clone().or_else(|| config.separator.clone()),
        keep_original: args.keep_original,
    };
    let changed = replace_in_file(&args.file, &args.search, &args.replace, &options)?;
    println!("{changed}");
    Ok(ExitCode::SUCCESS)
}

fn cmd_hash(args: &HashArgs) -> anyhow::Result<ExitCode> {
    let digest = if args.double {
        md5_salted_double(&args.text, &args.prefix, &args.suffix)
    } else {
        md5_salted(&args.text, &args.prefix, &args.suffix)
    };
    println!("{digest}");
    Ok(ExitCode::SUCCESS)
}
