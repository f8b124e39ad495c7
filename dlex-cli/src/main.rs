//! dlex CLI - Command line interface
//!
//! Tokenizes a file (or stdin) and prints one token per line, or JSON.
//! Settings come from an optional `dlex.json`; flags override it.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use tracing::{debug, warn};

mod config;
mod logging;
mod platform;

use crate::config::LogConfig;
use crate::platform::{print_error_with_source, print_invalid_tokens};
use dlex_api::{
    parse_range, tokenize_source, DlexConfig, DlexError, GrammarKind, LogFormat, LogLevel,
    OutputFormat, RunConfig, TokenizeOutput,
};

const DEFAULT_CONFIG: &str = "dlex.json";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum GrammarArg {
    Source,
    Project,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "dlex", about = "Tokenize source and project files", version)]
struct Cli {
    /// File to tokenize (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Grammar to tokenize with
    #[arg(short, long, value_enum)]
    grammar: Option<GrammarArg>,

    /// Byte range to tokenize, e.g. 10..42, ..42 or 10..
    #[arg(short, long, value_name = "START..END")]
    range: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Drop whitespace, newline and comment tokens
    #[arg(long)]
    skip_trivia: bool,

    /// Print line:column next to byte offsets
    #[arg(long)]
    positions: bool,

    /// Report invalid characters and exit with status 1 if any
    #[arg(long)]
    check: bool,

    /// Configuration file (default: ./dlex.json when present)
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log format
    #[arg(long, value_enum)]
    log_format: Option<LogFormatArg>,

    /// Also append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.to_report());
            process::exit(1);
        }
    };

    let log_config = LogConfig::from(&config.logging);
    if let Err(e) = logging::init_with_file(&log_config, config.logging.format, cli.log_file.as_deref()) {
        eprintln!("warning: logging disabled: {}", e);
    }
    debug!(target: "dlex::cli", ?config, "Loaded configuration");

    let source = match read_source(cli.file.as_deref()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}", e.to_report());
            process::exit(1);
        }
    };

    let output = match tokenize(&cli, &config, &source) {
        Ok(output) => output,
        Err(e) => {
            print_error_with_source(&e, &source);
            process::exit(1);
        }
    };

    match config.output.format {
        OutputFormat::Text => print!("{}", render_text(&output, config.output.show_positions)),
        OutputFormat::Json => match output.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: cannot serialize tokens: {}", e);
                process::exit(1);
            }
        },
    }

    if cli.check && output.has_invalid() {
        warn!(target: "dlex::cli", "Input contains invalid characters");
        print_invalid_tokens(&output, &source);
        process::exit(1);
    }
}

/// Read the configuration file and apply command line overrides
fn load_config(cli: &Cli) -> Result<DlexConfig, DlexError> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => read_config(Path::new(DEFAULT_CONFIG))?,
        None => DlexConfig::default(),
    };
    apply_overrides(cli, &mut config)?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<DlexConfig, DlexError> {
    let content = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    DlexConfig::from_json_str(&content)
        .map_err(|e| DlexError::Config(format!("{}: {}", path.display(), e)))
}

fn apply_overrides(cli: &Cli, config: &mut DlexConfig) -> Result<(), DlexError> {
    if let Some(grammar) = cli.grammar {
        config.lexer.grammar = match grammar {
            GrammarArg::Source => GrammarKind::Source,
            GrammarArg::Project => GrammarKind::Project,
        };
    }
    if cli.skip_trivia {
        config.lexer.skip_trivia = true;
    }
    if let Some(format) = cli.format {
        config.output.format = match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        };
    }
    if cli.positions {
        config.output.show_positions = true;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = LogLevel::parse(level)
            .ok_or_else(|| DlexError::Config(format!("unknown log level '{}'", level)))?;
    }
    if let Some(format) = cli.log_format {
        config.logging.format = match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
    }
    Ok(())
}

fn read_source(file: Option<&Path>) -> Result<String, DlexError> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| io_error(path, e)),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| io_error(Path::new("<stdin>"), e))?;
            Ok(source)
        }
    }
}

fn io_error(path: &Path, e: std::io::Error) -> DlexError {
    DlexError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

fn tokenize(cli: &Cli, config: &DlexConfig, source: &str) -> Result<TokenizeOutput, DlexError> {
    let range = cli
        .range
        .as_deref()
        .map(|spec| parse_range(spec, source.len()))
        .transpose()?;
    tokenize_source(source, range, &RunConfig::from(config))
}

/// One line per token: `start..end kind "text"`
fn render_text(output: &TokenizeOutput, show_positions: bool) -> String {
    output
        .tokens
        .iter()
        .map(|token| {
            let position = if show_positions {
                format!("{}:{} ", token.line, token.column)
            } else {
                String::new()
            };
            format!(
                "{}{}..{} {} {:?}\n",
                position, token.start, token.end, token.kind, token.text
            )
        })
        .collect()
}
