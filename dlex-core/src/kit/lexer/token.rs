//! Token 定义
//!
//! A token is the only thing collaborators see: a kind and a half-open byte
//! range `[start, end)` into the tokenized text.

use std::fmt;
use std::hash::Hash;
use std::ops::Range;

use super::error::CoverageError;

// 定义组合 trait，包含所有需要的约束
pub trait TokenKindTrait: fmt::Debug + Copy + Eq + Hash + Into<u8> + Send + Sync + 'static {}

/// Token 结构
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<K> {
    pub kind: K,
    pub start: usize,
    pub end: usize,
}

impl<K> Token<K> {
    pub fn new(kind: K, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Slice of `source` covered by this token
    ///
    /// `source` must be the text the token was produced from.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.range()]
    }
}

/// Check that `tokens` cover `[start, end)` contiguously with non-empty tokens
pub fn check_coverage<K>(tokens: &[Token<K>], start: usize, end: usize) -> Result<(), CoverageError> {
    let mut expected = start;
    for token in tokens {
        if token.start != expected {
            return Err(CoverageError::Gap {
                expected,
                found: token.start,
            });
        }
        if token.is_empty() {
            return Err(CoverageError::EmptyToken(token.start));
        }
        expected = token.end;
    }
    if expected != end {
        return Err(CoverageError::Incomplete {
            expected: end,
            found: expected,
        });
    }
    Ok(())
}
