//! API 层配置
//!
//! RunConfig 是一次分词调用所需的全部选项，由调用方显式传入。

use dlex_config::{DlexConfig, GrammarKind};

/// Tokenization configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Grammar to tokenize with
    pub grammar: GrammarKind,
    /// Drop whitespace, newline and comment tokens from the output
    pub skip_trivia: bool,
    /// Verify that tokens cover the requested range before returning them
    pub verify_coverage: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            grammar: GrammarKind::default(),
            skip_trivia: false,
            verify_coverage: cfg!(debug_assertions),
        }
    }
}

impl RunConfig {
    pub fn with_grammar(grammar: GrammarKind) -> Self {
        Self {
            grammar,
            ..Self::default()
        }
    }
}

impl From<&DlexConfig> for RunConfig {
    fn from(config: &DlexConfig) -> Self {
        Self {
            grammar: config.lexer.grammar,
            skip_trivia: config.lexer.skip_trivia,
            ..Self::default()
        }
    }
}
