//! 分词驱动
//!
//! Each call to [`Iterator::next`] runs one round:
//!
//! 1. The live set starts as the grammar's roots (narrowed by the previous
//!    token's kind), each recorded as its own lineage.
//! 2. Every character replaces each live combinator by its derivative; dead ones
//!    drop out, survivors keep the root they descend from.
//! 3. A live set holding a nullable member becomes the frontier, the newest
//!    legal stopping point. Characters consumed past it are counted as the
//!    rollback distance.
//! 4. When the live set empties or the range ends, the best nullable member of
//!    the frontier (highest priority, then earliest root) names the token, and
//!    the cursor moves back to the frontier.
//! 5. With no frontier at all, one character becomes an invalid token.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::combinator::Combinator;
use super::error::TokenizeError;
use super::grammar::Grammar;
use super::root_table::RootId;
use super::token::{Token, TokenKindTrait};

/// 驱动状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Inside a round, consuming characters
    Scanning,
    /// Last round ended on a frontier
    Matched,
    /// Last round emitted an invalid token
    BadCharacter,
    /// Range exhausted; the iterator is done
    EndOfInput,
}

/// A live combinator and the root it descends from
#[derive(Clone)]
struct Lineage {
    matcher: Combinator,
    root: RootId,
}

/// Lazy token sequence over one range of one text
///
/// Not restartable: create a new tokenizer to scan again.
pub struct Tokenizer<'a, K> {
    grammar: &'a Grammar<K>,
    text: &'a str,
    cursor: usize,
    end: usize,
    previous: Option<K>,
    state: DriverState,
}

/// Tokenize `text[start..end]` with `grammar`
///
/// The returned tokens cover the range exactly: no gaps, no overlaps.
pub fn tokenize<'a, K>(
    grammar: &'a Grammar<K>,
    text: &'a str,
    start: usize,
    end: usize,
) -> Result<Tokenizer<'a, K>, TokenizeError>
where
    K: TokenKindTrait,
{
    Tokenizer::new(grammar, text, start, end)
}

impl<'a, K> Tokenizer<'a, K>
where
    K: TokenKindTrait,
{
    pub fn new(
        grammar: &'a Grammar<K>,
        text: &'a str,
        start: usize,
        end: usize,
    ) -> Result<Self, TokenizeError> {
        validate_range(text, start, end)?;
        Ok(Self::over(grammar, text, start, end))
    }

    pub(crate) fn whole(grammar: &'a Grammar<K>, text: &'a str) -> Self {
        Self::over(grammar, text, 0, text.len())
    }

    fn over(grammar: &'a Grammar<K>, text: &'a str, start: usize, end: usize) -> Self {
        trace!(
            target: "dlex::lexer",
            grammar = grammar.name(),
            start,
            end,
            "Creating tokenizer"
        );
        Self {
            grammar,
            text,
            cursor: start,
            end,
            previous: None,
            state: DriverState::Scanning,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Offset where the next round starts
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text not yet tokenized
    pub fn remaining(&self) -> &'a str {
        &self.text[self.cursor..self.end]
    }

    fn scan_round(&mut self) -> Token<K> {
        self.state = DriverState::Scanning;
        let round_start = self.cursor;
        let roots = self.grammar.roots();

        let mut live: Vec<Lineage> = self
            .grammar
            .initial_roots(self.previous)
            .map(|root| Lineage {
                matcher: roots.matcher(root).clone(),
                root,
            })
            .collect();
        let mut frontier: Vec<Lineage> = Vec::new();
        let mut rollback = 0;

        trace!(
            target: "dlex::lexer",
            start = round_start,
            live = live.len(),
            "Starting round"
        );

        for c in self.text[round_start..self.end].chars() {
            let next: Vec<Lineage> = live
                .iter()
                .filter_map(|lineage| {
                    lineage.matcher.derivative(c).map(|matcher| Lineage {
                        matcher,
                        root: lineage.root,
                    })
                })
                .collect();
            if next.is_empty() {
                break;
            }

            self.cursor += c.len_utf8();
            if next.iter().any(|lineage| lineage.matcher.is_nullable()) {
                frontier = next.clone();
                rollback = 0;
            } else {
                rollback += c.len_utf8();
            }
            live = next;
        }

        let token = match select(&frontier) {
            Some(chosen) => {
                self.cursor -= rollback;
                self.state = DriverState::Matched;
                Token::new(roots.kind(chosen.root), round_start, self.cursor)
            }
            None => {
                let width = self.text[round_start..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                self.cursor = round_start + width;
                self.state = DriverState::BadCharacter;
                Token::new(self.grammar.invalid_kind(), round_start, self.cursor)
            }
        };

        debug!(
            target: "dlex::lexer",
            kind = ?token.kind,
            start = token.start,
            end = token.end,
            rollback,
            "Produced token"
        );
        self.previous = Some(token.kind);
        token
    }
}

impl<K> Iterator for Tokenizer<'_, K>
where
    K: TokenKindTrait,
{
    type Item = Token<K>;

    fn next(&mut self) -> Option<Token<K>> {
        if self.state == DriverState::EndOfInput {
            return None;
        }
        if self.cursor >= self.end {
            trace!(target: "dlex::lexer", end = self.end, "Reached end of range");
            self.state = DriverState::EndOfInput;
            return None;
        }
        Some(self.scan_round())
    }
}

impl<K> FusedIterator for Tokenizer<'_, K> where K: TokenKindTrait {}

/// Highest-priority nullable member; equal priorities go to the earliest root
fn select(frontier: &[Lineage]) -> Option<&Lineage> {
    frontier
        .iter()
        .filter(|lineage| lineage.matcher.is_nullable())
        .max_by(|a, b| {
            a.matcher
                .priority()
                .cmp(&b.matcher.priority())
                .then_with(|| b.root.cmp(&a.root))
        })
}

fn validate_range(text: &str, start: usize, end: usize) -> Result<(), TokenizeError> {
    if start > end {
        return Err(TokenizeError::InvalidRange { start, end });
    }
    if end > text.len() {
        return Err(TokenizeError::OutOfBounds {
            end,
            len: text.len(),
        });
    }
    for offset in [start, end] {
        if !text.is_char_boundary(offset) {
            return Err(TokenizeError::NotCharBoundary(offset));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::lexer::combinator::{builder, CharClass};
    use crate::kit::lexer::token::check_coverage;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[repr(u8)]
    enum Kind {
        Bad = 0,
        KeywordEnd,
        Identifier,
        Numeric,
        Delimiter,
        Space,
        Tick,
        CharLit,
    }

    impl From<Kind> for u8 {
        fn from(kind: Kind) -> u8 {
            kind as u8
        }
    }

    impl TokenKindTrait for Kind {}

    fn lower_word() -> Combinator {
        Combinator::one_or_more(Combinator::class(CharClass::Range('a', 'z')))
    }

    /// keyword "end" (priority 1), identifier [a-z]+ (priority 0)
    fn keyword_grammar() -> Grammar<Kind> {
        Grammar::builder("keywords", Kind::Bad)
            .root(Kind::KeywordEnd, Combinator::unit("end").with_priority(1))
            .root(Kind::Identifier, lower_word())
            .root(Kind::Space, Combinator::one_or_more(Combinator::unit(" ")))
            .build()
            .unwrap()
    }

    /// numeric digit+('.' digit+)? and the '.' delimiter
    fn numeric_grammar() -> Grammar<Kind> {
        let digits = Combinator::one_or_more(Combinator::class(CharClass::Digit));
        let fraction = Combinator::zero_or_one(Combinator::concat(Combinator::unit("."), digits.clone()));
        Grammar::builder("numeric", Kind::Bad)
            .root(Kind::Numeric, Combinator::concat(digits, fraction))
            .root(Kind::Delimiter, Combinator::unit("."))
            .build()
            .unwrap()
    }

    fn lex(grammar: &Grammar<Kind>, text: &str) -> Vec<(Kind, usize, usize)> {
        grammar
            .tokenize_all(text)
            .map(|token| (token.kind, token.start, token.end))
            .collect()
    }

    #[test]
    fn test_keyword_wins_equal_length() {
        let tokens = lex(&keyword_grammar(), "end");
        assert_eq!(tokens, vec![(Kind::KeywordEnd, 0, 3)]);
    }

    #[test]
    fn test_longer_identifier_beats_keyword() {
        let tokens = lex(&keyword_grammar(), "endian");
        assert_eq!(tokens, vec![(Kind::Identifier, 0, 6)]);
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let tokens = lex(&keyword_grammar(), "en end");
        assert_eq!(
            tokens,
            vec![
                (Kind::Identifier, 0, 2),
                (Kind::Space, 2, 3),
                (Kind::KeywordEnd, 3, 6)
            ]
        );
    }

    #[test]
    fn test_numeric_fraction() {
        assert_eq!(lex(&numeric_grammar(), "3.14"), vec![(Kind::Numeric, 0, 4)]);
    }

    #[test]
    fn test_numeric_rollback_to_frontier() {
        assert_eq!(
            lex(&numeric_grammar(), "3."),
            vec![(Kind::Numeric, 0, 1), (Kind::Delimiter, 1, 2)]
        );
    }

    #[test]
    fn test_multi_character_rollback() {
        // "a" matches, "abcd" never completes: roll back over "bc"
        let grammar = Grammar::builder("rollback", Kind::Bad)
            .root(Kind::Identifier, Combinator::unit("a"))
            .root(Kind::KeywordEnd, Combinator::unit("abcd"))
            .root(Kind::Delimiter, Combinator::class(CharClass::Range('b', 'z')))
            .build()
            .unwrap();
        assert_eq!(
            lex(&grammar, "abcx"),
            vec![
                (Kind::Identifier, 0, 1),
                (Kind::Delimiter, 1, 2),
                (Kind::Delimiter, 2, 3),
                (Kind::Delimiter, 3, 4)
            ]
        );
        assert_eq!(lex(&grammar, "abcd"), vec![(Kind::KeywordEnd, 0, 4)]);
    }

    #[test]
    fn test_bad_character() {
        let grammar = keyword_grammar();
        assert_eq!(lex(&grammar, "@"), vec![(Kind::Bad, 0, 1)]);

        let text = "ab@cd";
        let mut tokens = grammar.tokenize(text, 2, 3).unwrap();
        assert_eq!(tokens.next(), Some(Token::new(Kind::Bad, 2, 3)));
        assert_eq!(tokens.state(), DriverState::BadCharacter);
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.state(), DriverState::EndOfInput);
    }

    #[test]
    fn test_bad_character_is_one_char_wide() {
        let grammar = keyword_grammar();
        assert_eq!(
            lex(&grammar, "é x"),
            vec![(Kind::Bad, 0, 2), (Kind::Space, 2, 3), (Kind::Identifier, 3, 4)]
        );
    }

    #[test]
    fn test_never_completed_root_falls_back_to_bad_character() {
        // the only root needs "ab"; "a" alone never reaches a nullable state
        let grammar = Grammar::builder("pair", Kind::Bad)
            .root(Kind::Identifier, Combinator::unit("ab"))
            .build()
            .unwrap();
        assert_eq!(lex(&grammar, "aab"), vec![(Kind::Bad, 0, 1), (Kind::Identifier, 1, 3)]);
        assert_eq!(lex(&grammar, "a"), vec![(Kind::Bad, 0, 1)]);
    }

    #[test]
    fn test_empty_range() {
        let grammar = keyword_grammar();
        let text = "end";
        for n in 0..=text.len() {
            assert_eq!(grammar.tokenize(text, n, n).unwrap().count(), 0);
        }
        assert_eq!(lex(&grammar, ""), vec![]);
    }

    #[test]
    fn test_sub_range_is_independent() {
        let grammar = keyword_grammar();
        let text = "xendx";
        let tokens: Vec<_> = grammar.tokenize(text, 1, 4).unwrap().collect();
        assert_eq!(tokens, vec![Token::new(Kind::KeywordEnd, 1, 4)]);
    }

    #[test]
    fn test_equal_priority_prefers_earlier_root() {
        let grammar = Grammar::builder("tie", Kind::Bad)
            .root(Kind::Delimiter, Combinator::unit("x"))
            .root(Kind::Identifier, lower_word())
            .build()
            .unwrap();
        assert_eq!(lex(&grammar, "x"), vec![(Kind::Delimiter, 0, 1)]);

        let swapped = Grammar::builder("tie", Kind::Bad)
            .root(Kind::Identifier, lower_word())
            .root(Kind::Delimiter, Combinator::unit("x"))
            .build()
            .unwrap();
        assert_eq!(lex(&swapped, "x"), vec![(Kind::Identifier, 0, 1)]);
    }

    #[test]
    fn test_narrowing_after_previous_kind() {
        let char_lit = builder::sequence([
            Combinator::unit("'"),
            Combinator::class(CharClass::Graphic),
            Combinator::unit("'"),
        ]);
        let grammar = Grammar::builder("ticks", Kind::Bad)
            .root(Kind::Identifier, lower_word())
            .root(Kind::Tick, Combinator::unit("'"))
            .root(Kind::CharLit, char_lit)
            .root(Kind::Delimiter, Combinator::unit("("))
            .narrow_after(Kind::Identifier, &[Kind::CharLit])
            .build()
            .unwrap();

        assert_eq!(lex(&grammar, "'a'"), vec![(Kind::CharLit, 0, 3)]);
        assert_eq!(
            lex(&grammar, "x'a'"),
            vec![
                (Kind::Identifier, 0, 1),
                (Kind::Tick, 1, 2),
                (Kind::Identifier, 2, 3),
                (Kind::Tick, 3, 4)
            ]
        );
        assert_eq!(
            lex(&grammar, "x'('a'"),
            vec![
                (Kind::Identifier, 0, 1),
                (Kind::Tick, 1, 2),
                (Kind::Delimiter, 2, 3),
                (Kind::CharLit, 3, 6)
            ]
        );
    }

    #[test]
    fn test_invalid_parameters() {
        let grammar = keyword_grammar();
        let text = "héllo";
        assert_eq!(
            grammar.tokenize(text, 3, 1).err(),
            Some(TokenizeError::InvalidRange { start: 3, end: 1 })
        );
        assert_eq!(
            grammar.tokenize(text, 0, 99).err(),
            Some(TokenizeError::OutOfBounds { end: 99, len: 6 })
        );
        assert_eq!(
            grammar.tokenize(text, 2, 4).err(),
            Some(TokenizeError::NotCharBoundary(2))
        );
    }

    #[test]
    fn test_coverage_and_idempotence() {
        let grammar = keyword_grammar();
        let text = "end endian @ en  d";
        let first: Vec<_> = grammar.tokenize_all(text).collect();
        let second: Vec<_> = tokenize(&grammar, text, 0, text.len()).unwrap().collect();
        assert_eq!(first, second);
        assert_eq!(check_coverage(&first, 0, text.len()), Ok(()));
    }

    #[test]
    fn test_iterator_is_fused() {
        let grammar = keyword_grammar();
        let mut tokens = grammar.tokenize_all("end");
        assert!(tokens.next().is_some());
        assert_eq!(tokens.state(), DriverState::Matched);
        assert_eq!(tokens.remaining(), "");
        assert!(tokens.next().is_none());
        assert!(tokens.next().is_none());
    }

    #[test]
    fn test_tracing_does_not_change_tokens() {
        let grammar = keyword_grammar();
        let quiet: Vec<_> = grammar.tokenize_all("end @x").collect();

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        let traced: Vec<_> = tracing::subscriber::with_default(subscriber, || {
            grammar.tokenize_all("end @x").collect()
        });
        assert_eq!(quiet, traced);
    }
}
