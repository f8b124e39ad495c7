//! 项目文件语法
//!
//! Project files use a strict subset of the source tokens: no character
//! literals and no based numbers, so `'` is always a tick.

use crate::kit::lexer::{Grammar, GrammarError};

use super::source::{
    comment, decimal_literal, delimiter_roots, identifier, keyword_roots, newline, string_literal,
    whitespace,
};
use super::token_kind::TokenKind;

pub const PROJECT_GRAMMAR_NAME: &str = "project";

/// Reserved words of project files
pub const PROJECT_KEYWORDS: &[TokenKind] = &[
    TokenKind::Abstract,
    TokenKind::All,
    TokenKind::Case,
    TokenKind::End,
    TokenKind::For,
    TokenKind::Is,
    TokenKind::Limited,
    TokenKind::Null,
    TokenKind::Others,
    TokenKind::Package,
    TokenKind::Renames,
    TokenKind::Type,
    TokenKind::Use,
    TokenKind::When,
    TokenKind::With,
];

pub const PROJECT_DELIMITERS: &[TokenKind] = &[
    TokenKind::Arrow,
    TokenKind::Assign,
    TokenKind::Ampersand,
    TokenKind::Tick,
    TokenKind::LeftParen,
    TokenKind::RightParen,
    TokenKind::Comma,
    TokenKind::Dot,
    TokenKind::Colon,
    TokenKind::Semicolon,
    TokenKind::Bar,
];

/// 构建项目文件语法
pub fn build_project_grammar() -> Result<Grammar<TokenKind>, GrammarError> {
    let builder = Grammar::builder(PROJECT_GRAMMAR_NAME, TokenKind::Invalid);
    let builder = keyword_roots(builder, |kind| PROJECT_KEYWORDS.contains(&kind))
        .root(TokenKind::Identifier, identifier())
        .root(TokenKind::NumericLiteral, decimal_literal())
        .root(TokenKind::StringLiteral, string_literal()?)
        .root(TokenKind::Comment, comment()?);

    delimiter_roots(builder, |kind| PROJECT_DELIMITERS.contains(&kind))
        .root(TokenKind::Whitespace, whitespace()?)
        .root(TokenKind::Newline, newline())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammars::source::build_source_grammar;

    #[test]
    fn test_build_project_grammar() {
        let grammar = build_project_grammar().unwrap();
        assert_eq!(grammar.name(), PROJECT_GRAMMAR_NAME);
        assert_eq!(
            grammar.roots().len(),
            PROJECT_KEYWORDS.len() + PROJECT_DELIMITERS.len() + 6
        );
        assert!(!grammar.has_kind(TokenKind::CharacterLiteral));
        assert!(!grammar.has_kind(TokenKind::Begin));
    }

    #[test]
    fn test_project_kinds_are_subset_of_source() {
        let project = build_project_grammar().unwrap();
        let source = build_source_grammar().unwrap();
        for kind in project.roots().kinds() {
            assert!(source.has_kind(kind), "{kind:?} missing from source grammar");
        }
    }
}
