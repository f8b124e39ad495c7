//! 根组合子表
//!
//! One root combinator per token kind, in registration order. The order is
//! significant: it breaks priority ties between equal-length matches (earlier
//! root wins). The table is frozen once the grammar is built.

use super::combinator::Combinator;
use super::error::GrammarError;
use super::token::TokenKindTrait;

/// Index of a root in its table
pub type RootId = usize;

/// A registered root
#[derive(Debug, Clone)]
pub struct Root<K> {
    pub kind: K,
    pub matcher: Combinator,
}

#[derive(Debug, Clone)]
pub struct RootTable<K> {
    roots: Vec<Root<K>>,
}

impl<K> RootTable<K>
where
    K: TokenKindTrait,
{
    pub(crate) fn new() -> Self {
        Self { roots: Vec::new() }
    }

    pub(crate) fn insert(&mut self, kind: K, matcher: Combinator) -> Result<RootId, GrammarError> {
        if self.find(kind).is_some() {
            return Err(GrammarError::DuplicateRoot(format!("{kind:?}")));
        }
        self.roots.push(Root { kind, matcher });
        Ok(self.roots.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Token kind of root `id`
    ///
    /// `id` must come from this table.
    pub fn kind(&self, id: RootId) -> K {
        self.roots[id].kind
    }

    pub fn matcher(&self, id: RootId) -> &Combinator {
        &self.roots[id].matcher
    }

    /// Root registered for `kind`
    pub fn find(&self, kind: K) -> Option<RootId> {
        self.roots.iter().position(|root| root.kind == kind)
    }

    pub fn ids(&self) -> impl Iterator<Item = RootId> {
        0..self.roots.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RootId, &Root<K>)> {
        self.roots.iter().enumerate()
    }

    pub fn kinds(&self) -> impl Iterator<Item = K> + '_ {
        self.roots.iter().map(|root| root.kind)
    }
}
