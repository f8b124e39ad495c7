//! 源代码语法
//!
//! Lexical rules of the source language. The fragment builders are shared with
//! the project-file grammar, which recognizes a subset of the same tokens.

use crate::kit::lexer::combinator::builder::{
    alternation, any_of, except, keyword, one_of, separated,
};
use crate::kit::lexer::{CharClass, Combinator, Grammar, GrammarBuilder, GrammarError, Priority};

use super::token_kind::{TokenKind, DELIMITERS, KEYWORDS};

/// Keywords beat identifiers of the same length
pub const KEYWORD_PRIORITY: Priority = 1;

pub const SOURCE_GRAMMAR_NAME: &str = "source";

/// letter { [_] (letter | digit) }
pub(crate) fn identifier() -> Combinator {
    let letter_or_digit = Combinator::union(
        one_of(CharClass::Letter),
        one_of(CharClass::Digit),
    );
    Combinator::concat(
        one_of(CharClass::Letter),
        Combinator::zero_or_more(Combinator::concat(
            Combinator::zero_or_one(Combinator::unit("_")),
            letter_or_digit,
        )),
    )
}

/// digit { [_] digit }
fn numeral(digit: CharClass) -> Combinator {
    separated(one_of(digit), Combinator::zero_or_one(Combinator::unit("_")))
}

/// E [+|-] numeral
fn exponent() -> Combinator {
    Combinator::concat(
        any_of("eE"),
        Combinator::concat(
            Combinator::zero_or_one(any_of("+-")),
            numeral(CharClass::Digit),
        ),
    )
}

/// numeral [. numeral] [exponent]
pub(crate) fn decimal_literal() -> Combinator {
    let fraction = Combinator::concat(Combinator::unit("."), numeral(CharClass::Digit));
    Combinator::concat(
        numeral(CharClass::Digit),
        Combinator::concat(
            Combinator::zero_or_one(fraction),
            Combinator::zero_or_one(exponent()),
        ),
    )
}

/// numeral # based_numeral [. based_numeral] # [exponent]
fn based_literal() -> Combinator {
    let based = numeral(CharClass::HexDigit);
    let fraction = Combinator::concat(Combinator::unit("."), based.clone());
    let body = Combinator::concat(based, Combinator::zero_or_one(fraction));
    Combinator::concat(
        numeral(CharClass::Digit),
        Combinator::concat(
            Combinator::unit("#"),
            Combinator::concat(
                body,
                Combinator::concat(Combinator::unit("#"), Combinator::zero_or_one(exponent())),
            ),
        ),
    )
}

fn numeric_literal() -> Combinator {
    Combinator::union(decimal_literal(), based_literal())
}

/// ' graphic '
fn character_literal() -> Combinator {
    Combinator::concat(
        Combinator::unit("'"),
        Combinator::concat(one_of(CharClass::Graphic), Combinator::unit("'")),
    )
}

/// " { graphic except quote | "" } "
pub(crate) fn string_literal() -> Result<Combinator, GrammarError> {
    let element = alternation([
        except(CharClass::Graphic, Combinator::unit("\""))?,
        Combinator::unit("\"\""),
    ])?;
    Ok(Combinator::concat(
        Combinator::unit("\""),
        Combinator::concat(Combinator::zero_or_more(element), Combinator::unit("\"")),
    ))
}

/// -- up to the end of the line
pub(crate) fn comment() -> Result<Combinator, GrammarError> {
    let rest = except(CharClass::Any, one_of(CharClass::LineBreak))?;
    Ok(Combinator::concat(
        Combinator::unit("--"),
        Combinator::zero_or_more(rest),
    ))
}

/// White space other than line breaks
pub(crate) fn whitespace() -> Result<Combinator, GrammarError> {
    Ok(Combinator::one_or_more(except(
        CharClass::Whitespace,
        one_of(CharClass::LineBreak),
    )?))
}

/// `\r\n` or one line break
pub(crate) fn newline() -> Combinator {
    Combinator::union(Combinator::unit("\r\n"), one_of(CharClass::LineBreak))
}

/// Roots for the `kinds` keywords, in table order
pub(crate) fn keyword_roots(
    mut builder: GrammarBuilder<TokenKind>,
    kinds: impl Fn(TokenKind) -> bool,
) -> GrammarBuilder<TokenKind> {
    for &(text, kind) in KEYWORDS.iter().filter(|(_, kind)| kinds(*kind)) {
        builder = builder.root(kind, keyword(text, KEYWORD_PRIORITY));
    }
    builder
}

/// Roots for the `kinds` delimiters, in table order
pub(crate) fn delimiter_roots(
    mut builder: GrammarBuilder<TokenKind>,
    kinds: impl Fn(TokenKind) -> bool,
) -> GrammarBuilder<TokenKind> {
    for &(text, kind) in DELIMITERS.iter().filter(|(_, kind)| kinds(*kind)) {
        builder = builder.root(kind, Combinator::unit(text));
    }
    builder
}

/// 构建源代码语法
///
/// `'` after an identifier, `)` or `all` is the tick delimiter (attribute or
/// qualified expression), never the start of a character literal.
pub fn build_source_grammar() -> Result<Grammar<TokenKind>, GrammarError> {
    let builder = Grammar::builder(SOURCE_GRAMMAR_NAME, TokenKind::Invalid);
    let builder = keyword_roots(builder, |_| true)
        .root(TokenKind::Identifier, identifier())
        .root(TokenKind::NumericLiteral, numeric_literal())
        .root(TokenKind::CharacterLiteral, character_literal())
        .root(TokenKind::StringLiteral, string_literal()?)
        .root(TokenKind::Comment, comment()?);

    delimiter_roots(builder, |_| true)
        .root(TokenKind::Whitespace, whitespace()?)
        .root(TokenKind::Newline, newline())
        .narrow_after(TokenKind::Identifier, &[TokenKind::CharacterLiteral])
        .narrow_after(TokenKind::RightParen, &[TokenKind::CharacterLiteral])
        .narrow_after(TokenKind::All, &[TokenKind::CharacterLiteral])
        .build()
}
