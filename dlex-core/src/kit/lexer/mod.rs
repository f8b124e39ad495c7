//! 增量词法分析器
//!
//! Tokenizer built from derivative-based regular combinators:
//! - 组合子：immutable, structurally shared regular expressions with priorities
//! - 语法：ordered root table plus narrowing rules keyed by the previous token
//! - 驱动：maximum munch with rollback to the last accepting frontier
//! - 任意区间：any `[start, end)` of a text can be tokenized on its own

pub mod combinator;
pub mod driver;
pub mod error;
pub mod grammar;
pub mod position;
pub mod root_table;
pub mod token;

pub use combinator::{CharClass, Combinator, Priority};
pub use driver::{tokenize, DriverState, Tokenizer};
pub use error::{CoverageError, GrammarError, TokenizeError};
pub use grammar::{Grammar, GrammarBuilder};
pub use position::{LineIndex, SourcePosition, SourceSpan};
pub use root_table::{Root, RootId, RootTable};
pub use token::{check_coverage, Token, TokenKindTrait};
