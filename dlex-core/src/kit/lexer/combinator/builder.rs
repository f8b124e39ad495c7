//! 组合子构建辅助函数
//!
//! Shorthands used by grammar definitions on top of the primitive
//! constructors in [`Combinator`].

use super::{CharClass, Combinator, Priority};
use crate::kit::lexer::error::GrammarError;

/// `items[0] items[1] ...`; an empty sequence is the empty literal
pub fn sequence<I>(items: I) -> Combinator
where
    I: IntoIterator<Item = Combinator>,
{
    items
        .into_iter()
        .reduce(Combinator::concat)
        .unwrap_or_else(Combinator::empty)
}

/// `items[0] | items[1] | ...`
pub fn alternation<I>(items: I) -> Result<Combinator, GrammarError>
where
    I: IntoIterator<Item = Combinator>,
{
    items
        .into_iter()
        .reduce(Combinator::union)
        .ok_or(GrammarError::EmptyAlternation)
}

/// One character of `class`
pub fn one_of(class: CharClass) -> Combinator {
    Combinator::class(class)
}

/// One character from the literal set `chars`
pub fn any_of(chars: &str) -> Combinator {
    Combinator::class(CharClass::set(chars))
}

/// One character of `class` that is not accepted by `excluded`
///
/// `excluded` must match exactly one character.
pub fn except(class: CharClass, excluded: Combinator) -> Result<Combinator, GrammarError> {
    Ok(Combinator::intersect(
        Combinator::class(class),
        Combinator::complement(excluded)?,
    ))
}

/// Literal matched without regard to ASCII case
pub fn caseless(text: &str) -> Combinator {
    sequence(text.chars().map(|c| {
        let lower = c.to_ascii_lowercase();
        let upper = c.to_ascii_uppercase();
        if lower == upper {
            Combinator::unit(c.encode_utf8(&mut [0; 4]))
        } else {
            Combinator::class(CharClass::Set(vec![lower, upper].into()))
        }
    }))
}

/// Case-insensitive keyword at `priority`
pub fn keyword(text: &str, priority: Priority) -> Combinator {
    caseless(text).with_priority(priority)
}

/// `item (separator item)*`
pub fn separated(item: Combinator, separator: Combinator) -> Combinator {
    let rest = Combinator::zero_or_more(Combinator::concat(separator, item.clone()));
    Combinator::concat(item, rest)
}
