//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和源码上下文打印。

use dlex_api::{DlexError, TokenizeOutput};
use dlex_core::LineIndex;

/// 打印错误并显示源代码上下文
pub fn print_error_with_source(e: &DlexError, source: &str) {
    eprintln!("error: {}", e);

    let Some(offset) = e.offset() else {
        return;
    };
    if offset <= source.len() && source.is_char_boundary(offset) {
        let position = LineIndex::new(source).position(source, offset);
        print_source_context(source, position.line, position.column);
    }
}

/// 打印每个无效字符及其上下文
pub fn print_invalid_tokens(output: &TokenizeOutput, source: &str) {
    for token in output.invalid_tokens() {
        eprintln!(
            "error: invalid character {:?} at {}:{}",
            token.text, token.line, token.column
        );
        print_source_context(source, token.line, token.column);
    }
}

/// 打印源代码上下文（显示错误行前后几行）
pub fn print_source_context(source: &str, error_line: usize, error_col: usize) {
    eprint!("{}", render_source_context(source, error_line, error_col));
}

const CONTEXT_LINES: usize = 2;

fn render_source_context(source: &str, error_line: usize, error_col: usize) -> String {
    let index = LineIndex::new(source);
    if index.line_text(source, error_line).is_none() {
        return String::new();
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(index.line_count());
    let width = end_line.to_string().len();
    let separator = format!("{}|--\n", "-".repeat(width + 1));

    let mut out = separator.clone();
    for line_no in start_line..=end_line {
        let line = index.line_text(source, line_no).unwrap_or_default();
        out.push_str(&format!("{:>width$} | {}\n", line_no, line));
        if line_no == error_line {
            let marker = " ".repeat(error_col.saturating_sub(1));
            out.push_str(&format!("{:width$} | {}^\n", "", marker));
        }
    }
    out.push_str(&separator);
    out
}
