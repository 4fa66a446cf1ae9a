//! gamerls-parse
//!
//! Parses release names given as arguments, or one per line on stdin, and
//! prints one JSON object per name.

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use gamerls_core::{GameParser, ParseMode, ParsedGameInfo, ParserConfig};
use serde::Serialize;
use tracing::{Level, debug};

/// CLI arguments
#[derive(Parser)]
#[command(name = "gamerls-parse")]
#[command(about = "Parse game release names into JSON")]
#[command(version)]
struct Cli {
    /// Release names to parse; read from stdin when none are given
    titles: Vec<String>,

    /// Split AKA-separated names into alternate titles
    #[arg(short, long)]
    alternate_titles: bool,

    /// Parse mode: light (titles only) or full
    #[arg(short, long, env = "GAMERLS_MODE", default_value = "full")]
    mode: ParseMode,

    /// Treat inputs as file paths and fall back to the parent folder
    #[arg(long)]
    path: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct ParseOutput<'a> {
    input: &'a str,
    #[serde(flatten)]
    info: ParsedGameInfo,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn write_one(
    out: &mut impl Write,
    parser: &GameParser,
    input: &str,
    as_path: bool,
    pretty: bool,
) -> Result<()> {
    let info = if as_path {
        parser.parse_path(input)
    } else {
        parser.parse_title(input)
    };
    let output = ParseOutput { input, info };

    if pretty {
        serde_json::to_writer_pretty(&mut *out, &output)
    } else {
        serde_json::to_writer(&mut *out, &output)
    }
    .with_context(|| format!("failed to serialize result for {input:?}"))?;
    writeln!(out).context("failed to write output")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ParserConfig::new()
        .with_mode(cli.mode)
        .with_alternate_titles(cli.alternate_titles);
    let parser = GameParser::new(config).context("failed to build parser")?;
    debug!(mode = %cli.mode, alternate_titles = cli.alternate_titles, "parser ready");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.titles.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            write_one(&mut out, &parser, line, cli.path, cli.pretty)?;
        }
    } else {
        for title in &cli.titles {
            write_one(&mut out, &parser, title, cli.path, cli.pretty)?;
        }
    }

    out.flush().context("failed to flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "gamerls-parse",
            "--mode",
            "light",
            "-vv",
            "--pretty",
            "Half-Life.2-RELOADED",
        ])
        .unwrap();
        assert_eq!(cli.mode, ParseMode::Light);
        assert_eq!(cli.verbose, 2);
        assert!(cli.pretty);
        assert_eq!(cli.titles, vec!["Half-Life.2-RELOADED"]);
    }

    #[test]
    fn writes_one_json_line() {
        let parser = GameParser::new(ParserConfig::default()).unwrap();
        let mut buf = Vec::new();
        write_one(&mut buf, &parser, "Cyberpunk.2077.v2.1-CODEX", false, false).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["input"], "Cyberpunk.2077.v2.1-CODEX");
        assert_eq!(value["game_titles"][0], "Cyberpunk 2077");
        assert_eq!(value["release_group"], "CODEX");
    }
}
