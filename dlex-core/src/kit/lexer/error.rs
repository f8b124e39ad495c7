//! Lexer 错误类型
//!
//! Grammar construction errors are fatal and surface when the grammar is built.
//! Invocation errors are reported before any scanning starts. Characters no
//! root can start with are not errors: they become invalid tokens.

use thiserror::Error;

/// Error raised while building combinators or a grammar
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("complement requires a single-character matcher, got {matcher} (width {width:?})")]
    ComplementWidth {
        matcher: String,
        width: Option<usize>,
    },
    #[error("alternation needs at least one branch")]
    EmptyAlternation,
    #[error("grammar '{0}' has no roots")]
    EmptyGrammar(String),
    #[error("token kind {0} already has a root")]
    DuplicateRoot(String),
    #[error("invalid token kind {0} cannot be a root")]
    InvalidKindIsRoot(String),
    #[error("narrowing rule excludes {0}, which has no root")]
    UnknownNarrowedRoot(String),
}

/// Rejected `tokenize` parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("start offset {start} is after end offset {end}")]
    InvalidRange { start: usize, end: usize },
    #[error("end offset {end} is beyond text length {len}")]
    OutOfBounds { end: usize, len: usize },
    #[error("offset {0} is not on a character boundary")]
    NotCharBoundary(usize),
}

/// Broken coverage of a token sequence over its range
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoverageError {
    #[error("expected a token starting at {expected}, found one at {found}")]
    Gap { expected: usize, found: usize },
    #[error("empty token at {0}")]
    EmptyToken(usize),
    #[error("tokens end at {found}, range ends at {expected}")]
    Incomplete { expected: usize, found: usize },
}
