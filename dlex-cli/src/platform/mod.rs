//! 终端相关的输出

pub mod cli;

pub use cli::{print_error_with_source, print_invalid_tokens, print_source_context};
