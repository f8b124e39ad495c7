//! 语法定义
//!
//! A [`Grammar`] bundles a frozen [`RootTable`], the token kind used for
//! characters no root can start with, and optional narrowing rules that drop
//! roots from the initial live set depending on the previous token.
//!
//! Grammars are plain values: build one, share it by reference (or `Arc`)
//! between as many tokenizers and threads as needed.

use std::collections::HashMap;

use tracing::debug;

use super::combinator::Combinator;
use super::driver::Tokenizer;
use super::error::{GrammarError, TokenizeError};
use super::root_table::{RootId, RootTable};
use super::token::TokenKindTrait;

#[derive(Debug, Clone)]
pub struct Grammar<K> {
    name: String,
    roots: RootTable<K>,
    invalid: K,
    /// previous kind -> roots not live at the start of the next round
    narrowing: HashMap<K, Vec<RootId>>,
}

impl<K> Grammar<K>
where
    K: TokenKindTrait,
{
    /// Start a grammar; `invalid` is the kind emitted for bad characters
    pub fn builder(name: impl Into<String>, invalid: K) -> GrammarBuilder<K> {
        GrammarBuilder {
            name: name.into(),
            invalid,
            roots: Vec::new(),
            narrowing: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roots(&self) -> &RootTable<K> {
        &self.roots
    }

    pub fn invalid_kind(&self) -> K {
        self.invalid
    }

    /// Whether `kind` has a root in this grammar
    pub fn has_kind(&self, kind: K) -> bool {
        self.roots.find(kind).is_some()
    }

    /// Roots live at the start of a round that follows a `previous` token
    pub fn initial_roots(&self, previous: Option<K>) -> impl Iterator<Item = RootId> + '_ {
        let excluded = previous
            .and_then(|kind| self.narrowing.get(&kind))
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        self.roots.ids().filter(move |id| !excluded.contains(id))
    }

    /// Tokenize `text[start..end]`
    pub fn tokenize<'a>(
        &'a self,
        text: &'a str,
        start: usize,
        end: usize,
    ) -> Result<Tokenizer<'a, K>, TokenizeError> {
        Tokenizer::new(self, text, start, end)
    }

    /// Tokenize the whole of `text`
    pub fn tokenize_all<'a>(&'a self, text: &'a str) -> Tokenizer<'a, K> {
        Tokenizer::whole(self, text)
    }
}

pub struct GrammarBuilder<K> {
    name: String,
    invalid: K,
    roots: Vec<(K, Combinator)>,
    narrowing: Vec<(K, Vec<K>)>,
}

impl<K> GrammarBuilder<K>
where
    K: TokenKindTrait,
{
    /// Register the root for `kind`; registration order breaks priority ties
    pub fn root(mut self, kind: K, matcher: Combinator) -> Self {
        self.roots.push((kind, matcher));
        self
    }

    /// After a `previous` token, the roots of `excluded` kinds are not live
    pub fn narrow_after(mut self, previous: K, excluded: &[K]) -> Self {
        self.narrowing.push((previous, excluded.to_vec()));
        self
    }

    pub fn build(self) -> Result<Grammar<K>, GrammarError> {
        if self.roots.is_empty() {
            return Err(GrammarError::EmptyGrammar(self.name));
        }

        let mut roots = RootTable::new();
        for (kind, matcher) in self.roots {
            if kind == self.invalid {
                return Err(GrammarError::InvalidKindIsRoot(format!("{kind:?}")));
            }
            roots.insert(kind, matcher)?;
        }

        let mut narrowing: HashMap<K, Vec<RootId>> = HashMap::new();
        for (previous, excluded) in self.narrowing {
            let ids = narrowing.entry(previous).or_default();
            for kind in excluded {
                let id = roots
                    .find(kind)
                    .ok_or_else(|| GrammarError::UnknownNarrowedRoot(format!("{kind:?}")))?;
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }

        debug!(
            target: "dlex::grammar",
            name = %self.name,
            roots = roots.len(),
            narrowing_rules = narrowing.len(),
            "Built grammar"
        );

        Ok(Grammar {
            name: self.name,
            roots,
            invalid: self.invalid,
            narrowing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::lexer::combinator::CharClass;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Kind {
        Invalid,
        Name,
        Tick,
        CharLit,
    }

    impl From<Kind> for u8 {
        fn from(kind: Kind) -> u8 {
            kind as u8
        }
    }

    impl TokenKindTrait for Kind {}

    fn tick_grammar() -> Grammar<Kind> {
        Grammar::builder("tick", Kind::Invalid)
            .root(Kind::Name, Combinator::one_or_more(Combinator::class(CharClass::Letter)))
            .root(Kind::Tick, Combinator::unit("'"))
            .root(
                Kind::CharLit,
                Combinator::concat(
                    Combinator::unit("'"),
                    Combinator::concat(Combinator::class(CharClass::Graphic), Combinator::unit("'")),
                ),
            )
            .narrow_after(Kind::Name, &[Kind::CharLit])
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_grammar() {
        let grammar = tick_grammar();
        assert_eq!(grammar.name(), "tick");
        assert_eq!(grammar.roots().len(), 3);
        assert_eq!(grammar.invalid_kind(), Kind::Invalid);
        assert!(grammar.has_kind(Kind::Tick));
        assert!(!grammar.has_kind(Kind::Invalid));
    }

    #[test]
    fn test_initial_roots_narrowed() {
        let grammar = tick_grammar();
        assert_eq!(grammar.initial_roots(None).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(grammar.initial_roots(Some(Kind::Name)).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(grammar.initial_roots(Some(Kind::Tick)).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_grammar_rejected() {
        let err = Grammar::<Kind>::builder("nothing", Kind::Invalid).build().unwrap_err();
        assert_eq!(err, GrammarError::EmptyGrammar("nothing".to_string()));
    }

    #[test]
    fn test_invalid_kind_cannot_be_root() {
        let err = Grammar::builder("bad", Kind::Invalid)
            .root(Kind::Invalid, Combinator::unit("x"))
            .build()
            .unwrap_err();
        assert!(matches!(err, GrammarError::InvalidKindIsRoot(_)));
    }

    #[test]
    fn test_duplicate_root_rejected() {
        let err = Grammar::builder("dup", Kind::Invalid)
            .root(Kind::Name, Combinator::unit("a"))
            .root(Kind::Name, Combinator::unit("b"))
            .build()
            .unwrap_err();
        assert_eq!(err, GrammarError::DuplicateRoot("Name".to_string()));
    }

    #[test]
    fn test_narrowing_unknown_root_rejected() {
        let err = Grammar::builder("narrow", Kind::Invalid)
            .root(Kind::Name, Combinator::unit("a"))
            .narrow_after(Kind::Name, &[Kind::CharLit])
            .build()
            .unwrap_err();
        assert_eq!(err, GrammarError::UnknownNarrowedRoot("CharLit".to_string()));
    }
}
