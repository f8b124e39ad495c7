//! dlex - incremental tokenizer built from derivative-based regex combinators
//!
//! # Architecture
//!
//! ```text
//! dlex-config/  - Configuration data (serde, no logic)
//! dlex-core/    - Combinators, grammars and the tokenizing driver (no IO)
//! dlex-api/     - Orchestration: config -> grammar -> token records
//! dlex-cli/     - The `dlex` binary
//! ```
//!
//! # Quick Start
//!
//! ```
//! use dlex_workspace::{tokenize_source, RunConfig};
//!
//! let output = tokenize_source("Count := 1;", None, &RunConfig::default()).unwrap();
//! assert_eq!(output.tokens[0].kind, "Identifier");
//! ```

// 重导出常用类型
pub use dlex_api::{
    parse_range, tokenize_source, tokenize_with_grammar, validate_identifier, DlexConfig,
    DlexError, ErrorReport, GrammarKind, RunConfig, TokenRecord, TokenizeOutput,
};
pub use dlex_core::grammars::{build_grammar, HighlightCategory, TokenKind};
pub use dlex_core::kit::lexer::{
    tokenize, CharClass, Combinator, Grammar, GrammarBuilder, Token, TokenKindTrait, Tokenizer,
};
