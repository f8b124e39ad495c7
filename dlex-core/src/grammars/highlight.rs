//! 语法高亮分类

use super::token_kind::TokenKind;

/// Coarse category of a token kind, for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightCategory {
    Keyword,
    Identifier,
    Number,
    Character,
    String,
    Comment,
    Operator,
    Whitespace,
    Invalid,
}

impl HighlightCategory {
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Invalid => HighlightCategory::Invalid,
            TokenKind::Whitespace | TokenKind::Newline => HighlightCategory::Whitespace,
            TokenKind::Comment => HighlightCategory::Comment,
            TokenKind::Identifier => HighlightCategory::Identifier,
            TokenKind::NumericLiteral => HighlightCategory::Number,
            TokenKind::CharacterLiteral => HighlightCategory::Character,
            TokenKind::StringLiteral => HighlightCategory::String,
            kind if kind.is_keyword() => HighlightCategory::Keyword,
            _ => HighlightCategory::Operator,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HighlightCategory::Keyword => "keyword",
            HighlightCategory::Identifier => "identifier",
            HighlightCategory::Number => "number",
            HighlightCategory::Character => "character",
            HighlightCategory::String => "string",
            HighlightCategory::Comment => "comment",
            HighlightCategory::Operator => "operator",
            HighlightCategory::Whitespace => "whitespace",
            HighlightCategory::Invalid => "invalid",
        }
    }
}

impl From<TokenKind> for HighlightCategory {
    fn from(kind: TokenKind) -> Self {
        HighlightCategory::of(kind)
    }
}
