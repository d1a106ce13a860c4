//! # letterfreq
//!
//! A CLI tool that counts the letters in a text and charts the most common ones.
//!
//! ## Overview
//!
//! letterfreq is built on top of letterfreqlib. The library does the counting,
//! ranking and rendering; this binary only obtains the text and prints the
//! result.
//!
//! ## Usage
//!
//! ```bash
//! # Prompt for a line of text
//! letterfreq
//!
//! # Pass the text directly
//! letterfreq "The quick brown fox"
//!
//! # Read the text from a file, show the top 5 with 40-wide bars
//! letterfreq --file book.txt -n 5 -w 40
//!
//! # Break ties alphabetically and emit JSON
//! letterfreq "Hi! Hi?" --tie-break asc --output json
//! ```

use std::io::{BufRead, Write};
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::{style, Term};
use letterfreqlib::{LetterAnalysis, RankedList, RawReportConfig, Report, ReportConfig, TieBreak};
use log::debug;
use serde::Serialize;

/// Prompt shown when the text is read interactively
const INPUT_PROMPT: &str = "Please enter some text: ";

/// JSON output document
#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    letters_total: u64,
    distinct_letters: usize,
    ranked: &'a RankedList,
    report: Report,
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("letterfreq")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Count the letters in a text and chart the most common ones")
        .arg(
            Arg::new("text")
                .help("Text to analyze (prompted for on stdin if omitted)")
                .conflicts_with("file"),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .help("Read the text from a file"),
        )
        .arg(
            Arg::new("max-entries")
                .short('n')
                .long("max-entries")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .help("Number of letters to show [default: 20]"),
        )
        .arg(
            Arg::new("bar-width")
                .short('w')
                .long("bar-width")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .help("Bar length of the most common letter [default: 20]"),
        )
        .arg(
            Arg::new("bar-symbol")
                .long("bar-symbol")
                .help("Character used to draw bars [default: #]"),
        )
        .arg(
            Arg::new("padding-symbol")
                .long("padding-symbol")
                .help("Character used to align counts [default: space]"),
        )
        .arg(
            Arg::new("tie-break")
                .long("tie-break")
                .value_parser(["desc", "asc"])
                .help("Order of letters with equal counts [default: desc]"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log pipeline details to stderr"),
        )
}

/// Parse a single-character symbol option
fn parse_symbol(name: &str, value: &str) -> Result<char, anyhow::Error> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(anyhow!(
            "--{} expects exactly one character, got {:?}",
            name,
            value
        )),
    }
}

/// Build the validated report configuration from matches
fn build_config(matches: &ArgMatches) -> Result<ReportConfig, anyhow::Error> {
    let symbol = |name: &str| -> Result<Option<char>, anyhow::Error> {
        matches
            .get_one::<String>(name)
            .map(|v| parse_symbol(name, v))
            .transpose()
    };

    let tie_break = matches
        .get_one::<String>("tie-break")
        .map(|s| s.parse::<TieBreak>())
        .transpose()
        .map_err(|e| anyhow!(e))?;

    let raw = RawReportConfig {
        max_entries: matches.get_one::<i64>("max-entries").copied(),
        bar_width: matches.get_one::<i64>("bar-width").copied(),
        bar_symbol: symbol("bar-symbol")?,
        padding_symbol: symbol("padding-symbol")?,
        tie_break,
    };

    Ok(ReportConfig::try_from(raw)?)
}

/// Obtain the text: argument, file, or one line from stdin
fn read_input(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    if let Some(text) = matches.get_one::<String>("text") {
        return Ok(text.clone());
    }

    if let Some(path) = matches.get_one::<String>("file") {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read file '{}'", path));
    }

    if console::user_attended() {
        let mut term = Term::stdout();
        write!(term, "{}", style(INPUT_PROMPT).bold())?;
        term.flush()?;
    }

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);

    Ok(line)
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let config = build_config(matches)?;
    let text = read_input(matches)?;
    debug!("read {} bytes of input", text.len());

    let analysis = LetterAnalysis::with_tie_break(text, config.tie_break);
    let report = analysis.report(&config)?;

    let json = matches
        .get_one::<String>("output")
        .is_some_and(|mode| mode == "json");

    if json {
        let output = JsonOutput {
            letters_total: analysis.letters_total(),
            distinct_letters: analysis.table().len(),
            ranked: analysis.ranked(),
            report,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    } else {
        Ok(report.to_string())
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["letterfreq"];
        argv.extend(args);
        build_command().try_get_matches_from(argv).unwrap()
    }

    #[test]
    fn test_parse_symbol() {
        assert_eq!(parse_symbol("bar-symbol", "*").unwrap(), '*');
        assert_eq!(parse_symbol("bar-symbol", "é").unwrap(), 'é');
        assert!(parse_symbol("bar-symbol", "").is_err());
        assert!(parse_symbol("bar-symbol", "**").is_err());
    }

    #[test]
    fn test_build_config_defaults() {
        let config = build_config(&matches(&["abc"])).unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_build_config_from_flags() {
        let config = build_config(&matches(&[
            "abc",
            "-n",
            "3",
            "--bar-width",
            "10",
            "--bar-symbol",
            "=",
            "--tie-break",
            "asc",
        ]))
        .unwrap();
        assert_eq!(config.max_entries, 3);
        assert_eq!(config.bar_width, 10);
        assert_eq!(config.bar_symbol, '=');
        assert_eq!(config.tie_break, TieBreak::LetterAscending);
    }

    #[test]
    fn test_build_config_rejects_negative() {
        let err = build_config(&matches(&["abc", "--max-entries", "-2"])).unwrap_err();
        assert!(err.to_string().contains("max_entries"));
    }

    #[test]
    fn test_text_conflicts_with_file() {
        let result = build_command().try_get_matches_from(["letterfreq", "abc", "-f", "x.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_with_text_argument() {
        let output = run(&matches(&["aabbbcccc", "-w", "4"])).unwrap();
        assert_eq!(output, "\nMost common letters:\n\nC: 4 ####\nB: 3 ###\nA: 2 ##");
    }
}
