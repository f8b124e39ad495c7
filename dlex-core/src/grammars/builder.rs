//! 语法构建器

use dlex_config::GrammarKind;

use crate::kit::lexer::{Grammar, GrammarError};

use super::project::build_project_grammar;
use super::source::build_source_grammar;
use super::token_kind::TokenKind;

/// 按配置构建语法
pub fn build_grammar(kind: GrammarKind) -> Result<Grammar<TokenKind>, GrammarError> {
    match kind {
        GrammarKind::Source => build_source_grammar(),
        GrammarKind::Project => build_project_grammar(),
    }
}
