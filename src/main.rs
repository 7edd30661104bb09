mod debug_report;

use kstem::{Dictionary, Options, RuleSet, Stemmer};
use std::io::{self, BufWriter, IsTerminal, Read, Write};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("{0} expects a value")]
    MissingValue(&'static str),
    #[error("input provided multiple times")]
    DuplicateInput,
    #[error("no input provided")]
    NoInput,
    #[error("unknown rule '{0}' (see --list-rules)")]
    UnknownRule(String),
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Io(_) => 1,
            _ => 2,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        if matches!(err, CliError::NoInput) {
            eprintln!("\n{}", help_text());
        }
        std::process::exit(err.exit_code());
    }
}

enum Mode {
    Stem,
    Trace,
    Stats,
    ListRules,
}

struct CliConfig {
    input: Option<String>,
    mode: Mode,
    rules: RuleSet,
    color: bool,
}

fn run() -> Result<(), CliError> {
    let config = parse_args()?;

    match config.mode {
        Mode::Stats => {
            print_stats();
            return Ok(());
        }
        Mode::ListRules => {
            print_rules(config.rules);
            return Ok(());
        }
        Mode::Stem | Mode::Trace => {}
    }

    let input = match config.input {
        Some(value) => value,
        None => read_stdin_input()?,
    };
    if input.trim().is_empty() {
        return Err(CliError::NoInput);
    }

    let stemmer = Stemmer::new(Dictionary::shared()).with_options(Options { rules: config.rules });
    let mut out = BufWriter::new(io::stdout().lock());

    for line in input.lines() {
        let words = tokens(line);
        match config.mode {
            Mode::Trace => {
                for token in words {
                    debug_report::write_trace(&mut out, &stemmer.stem_verbose(token), config.color)?;
                }
            }
            _ => {
                let stems: Vec<String> = words.map(|token| stemmer.stem(token)).collect();
                writeln!(out, "{}", stems.join(" "))?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn parse_args() -> Result<CliConfig, CliError> {
    let mut input: Option<String> = None;
    let mut mode = Mode::Stem;
    let mut rules = RuleSet::all();
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    let set_input = |input: &mut Option<String>, value: String| {
        if input.is_some() {
            return Err(CliError::DuplicateInput);
        }
        *input = Some(value);
        Ok(())
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("kstem {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--trace" => mode = Mode::Trace,
            "--stats" => mode = Mode::Stats,
            "--list-rules" => mode = Mode::ListRules,
            "--rules" => {
                let value = args.next().ok_or(CliError::MissingValue("--rules"))?;
                rules = parse_rules(&value)?;
            }
            "--disable" => {
                let value = args.next().ok_or(CliError::MissingValue("--disable"))?;
                rules -= parse_rules(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or(CliError::MissingValue("--input"))?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--rules=") => {
                rules = parse_rules(arg.trim_start_matches("--rules="))?;
            }
            _ if arg.starts_with("--disable=") => {
                rules -= parse_rules(arg.trim_start_matches("--disable="))?;
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            _ if arg.starts_with('-') => {
                return Err(CliError::UnknownOption(arg));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    Ok(CliConfig { input, mode, rules, color })
}

/// Letter/digit runs; everything else separates tokens.
fn tokens(line: &str) -> impl Iterator<Item = &str> {
    kstem::regex!(r"[\p{L}\p{N}]+").find_iter(line).map(|m| m.as_str())
}

fn parse_rules(list: &str) -> Result<RuleSet, CliError> {
    RuleSet::from_names(list).map_err(CliError::UnknownRule)
}

fn read_stdin_input() -> Result<String, CliError> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn print_stats() {
    let (dictionary, report) = Dictionary::build_with_report();
    println!("entries:    {}", dictionary.len());
    println!("collisions: {}", report.collisions.len());
    for collision in &report.collisions {
        println!("  {collision}");
    }
}

fn print_rules(rules: RuleSet) {
    for (name, suffixes) in rules.stages() {
        println!("{name:<12} -{}", suffixes.join(" -"));
    }
}

fn help_text() -> String {
    format!(
        "kstem {version}

Dictionary-validated English stemmer.

Usage:
  kstem [OPTIONS] [--] <words...>
  kstem [OPTIONS] --input <text>

Input is split into letter/digit tokens and every token is stemmed. Output
has one line per input line, stems separated by single spaces.

Options:
  -i, --input <text>     Text to stem. If omitted, reads remaining args
                         or stdin when no args are provided.
  --rules <a,b,..>       Run only the named cascade stages.
  --disable <a,b,..>     Skip the named cascade stages.
  --trace                Print the cascade report for every token.
  --list-rules           List enabled stages and their suffixes, then exit.
  --stats                Print dictionary size and source overlaps, then exit.
  --color                Force ANSI color output.
  --no-color             Disable ANSI color output.
  -h, --help             Show this help message.
  -V, --version          Print version information.

Environment:
  RUST_LOG               Log filter for stderr diagnostics. Default: warn

Exit codes:
  0  Success.
  1  I/O error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_split_on_punctuation_and_space() {
        let found: Vec<&str> = tokens("The ponies' owner, aged 42, re-entered.").collect();
        assert_eq!(found, vec!["The", "ponies", "owner", "aged", "42", "re", "entered"]);
        assert_eq!(tokens("  --  ").count(), 0);
    }

    #[test]
    fn rule_lists_map_to_cli_errors() {
        assert_eq!(parse_rules("plural,ness").ok(), Some(RuleSet::PLURAL | RuleSet::NESS));
        let err = parse_rules("plural,nope").unwrap_err();
        assert!(matches!(&err, CliError::UnknownRule(name) if name == "nope"));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(CliError::Io(io::Error::other("closed")).exit_code(), 1);
    }
}
