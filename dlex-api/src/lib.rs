//! dlex API - Tokenization orchestration layer
//!
//! Provides the unified tokenization interface, including:
//! - Grammar selection from configuration (RunConfig)
//! - Range handling and token records with line/column positions
//! - Unified error handling (DlexError)
//!
//! Every call takes its configuration explicitly; there is no global state.

use std::ops::Range;

use tracing::{debug, info};

use dlex_core::grammars::{build_grammar, is_valid_identifier, HighlightCategory, TokenKind};
use dlex_core::kit::lexer::{check_coverage, Grammar, LineIndex, Token};

pub mod config;
pub use config::RunConfig;

// Re-export config types from dlex_config
pub use dlex_config::{
    DlexConfig, GrammarKind, LexerConfig, LogFormat, LogLevel, LogTarget, LoggingConfig,
    OutputConfig, OutputFormat,
};

pub mod error;
pub mod types;
pub use error::{CoverageError, DlexError, ErrorReport, GrammarError, TokenizeError};
pub use types::{TokenRecord, TokenizeOutput};

// Re-export core crate
pub use dlex_core;

/// Tokenize `source` (or the byte `range` of it) with explicit configuration
///
/// This is the recommended API for library users.
pub fn tokenize_source(
    source: &str,
    range: Option<Range<usize>>,
    config: &RunConfig,
) -> Result<TokenizeOutput, DlexError> {
    let grammar = build_grammar(config.grammar)?;
    tokenize_with_grammar(&grammar, source, range, config)
}

/// Tokenize with an already built grammar
///
/// Useful when the same grammar serves many calls.
pub fn tokenize_with_grammar(
    grammar: &Grammar<TokenKind>,
    source: &str,
    range: Option<Range<usize>>,
    config: &RunConfig,
) -> Result<TokenizeOutput, DlexError> {
    let Range { start, end } = range.unwrap_or(0..source.len());
    info!(
        target: "dlex::api",
        grammar = grammar.name(),
        start,
        end,
        "Starting tokenization"
    );

    let tokens: Vec<Token<TokenKind>> = grammar.tokenize(source, start, end)?.collect();
    if config.verify_coverage {
        check_coverage(&tokens, start, end)?;
    }

    let index = LineIndex::new(source);
    let total = tokens.len();
    let records: Vec<TokenRecord> = tokens
        .into_iter()
        .filter(|token| !(config.skip_trivia && token.kind.is_trivia()))
        .map(|token| token_record(&index, source, &token))
        .collect();
    let skipped = total - records.len();

    debug!(
        target: "dlex::api",
        tokens = records.len(),
        skipped,
        "Tokenization completed"
    );

    Ok(TokenizeOutput {
        grammar: config.grammar.as_str(),
        start,
        end,
        tokens: records,
        skipped,
    })
}

fn token_record(index: &LineIndex, source: &str, token: &Token<TokenKind>) -> TokenRecord {
    let span = index.span(source, token);
    TokenRecord {
        kind: format!("{:?}", token.kind),
        code: token.kind.into(),
        start: token.start,
        end: token.end,
        line: span.start.line,
        column: span.start.column,
        end_line: span.end.line,
        end_column: span.end.column,
        text: token.text(source).to_string(),
        category: HighlightCategory::of(token.kind).as_str(),
    }
}

/// Whether `text` is one identifier (not a reserved word) under `grammar`
pub fn validate_identifier(text: &str, grammar: GrammarKind) -> Result<bool, DlexError> {
    let grammar = build_grammar(grammar)?;
    Ok(is_valid_identifier(&grammar, text))
}

/// Parse `START..END` (either bound may be omitted) against a text of `len` bytes
pub fn parse_range(spec: &str, len: usize) -> Result<Range<usize>, DlexError> {
    let invalid = || DlexError::Range(spec.to_string());
    let (start, end) = spec.trim().split_once("..").ok_or_else(invalid)?;
    let bound = |text: &str, default: usize| -> Result<usize, DlexError> {
        if text.is_empty() {
            Ok(default)
        } else {
            text.parse().map_err(|_| invalid())
        }
    };
    Ok(bound(start, 0)?..bound(end, len)?)
}
