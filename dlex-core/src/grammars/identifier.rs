//! 标识符校验

use crate::kit::lexer::Grammar;

use super::token_kind::TokenKind;

/// Whether all of `text` lexes as exactly one identifier under `grammar`
///
/// Reserved words are not identifiers.
pub fn is_valid_identifier(grammar: &Grammar<TokenKind>, text: &str) -> bool {
    let mut tokens = grammar.tokenize_all(text);
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => token.kind == TokenKind::Identifier,
        _ => false,
    }
}
