//! 内置语法
//!
//! Token kinds and the two shipped grammars: source files and project files.

pub mod builder;
pub mod highlight;
pub mod identifier;
pub mod project;
pub mod source;
pub mod token_kind;

pub use builder::build_grammar;
pub use highlight::HighlightCategory;
pub use identifier::is_valid_identifier;
pub use project::build_project_grammar;
pub use source::build_source_grammar;
pub use token_kind::TokenKind;
