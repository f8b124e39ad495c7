//! dlex Core - tokenizer engine and shipped grammars (pure logic, no IO)
//!
//! `kit::lexer` is the grammar-agnostic engine: derivative-based combinators,
//! root tables, grammars and the tokenizing driver. `grammars` holds the token
//! kinds and the concrete grammars built on top of it.
//!
//! Grammars are passed explicitly, never held in global state.

pub mod grammars;
pub mod kit;

// Re-export common types
pub use grammars::{build_grammar, HighlightCategory, TokenKind};
pub use kit::lexer::{
    check_coverage, tokenize, Combinator, Grammar, GrammarError, LineIndex, SourcePosition,
    Token, TokenizeError, Tokenizer,
};

// Re-export config types from dlex-config
pub use dlex_config::GrammarKind;
