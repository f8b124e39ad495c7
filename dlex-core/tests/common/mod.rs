//! 测试辅助工具
//!
//! 提供语法构建与分词结果比较的辅助函数

#![allow(dead_code)]

use dlex_core::grammars::{build_project_grammar, build_source_grammar};
use dlex_core::{check_coverage, Grammar, TokenKind};

pub fn source() -> Grammar<TokenKind> {
    build_source_grammar().expect("source grammar must build")
}

pub fn project() -> Grammar<TokenKind> {
    build_project_grammar().expect("project grammar must build")
}

/// 分词并返回 (kind, text) 序列
pub fn lex(grammar: &Grammar<TokenKind>, text: &str) -> Vec<(TokenKind, String)> {
    grammar
        .tokenize_all(text)
        .map(|token| (token.kind, token.text(text).to_string()))
        .collect()
}

/// 分词并返回 (kind, start, end) 序列
pub fn spans(grammar: &Grammar<TokenKind>, text: &str) -> Vec<(TokenKind, usize, usize)> {
    grammar
        .tokenize_all(text)
        .map(|token| (token.kind, token.start, token.end))
        .collect()
}

/// 分词并丢弃空白、换行与注释
pub fn kinds(grammar: &Grammar<TokenKind>, text: &str) -> Vec<TokenKind> {
    grammar
        .tokenize_all(text)
        .map(|token| token.kind)
        .filter(|kind| !kind.is_trivia())
        .collect()
}

/// 断言 `[start, end)` 被连续、无重叠地覆盖
pub fn assert_covers(grammar: &Grammar<TokenKind>, text: &str, start: usize, end: usize) {
    let tokens: Vec<_> = grammar
        .tokenize(text, start, end)
        .expect("valid range")
        .collect();
    if let Err(err) = check_coverage(&tokens, start, end) {
        panic!("{err} for {text:?} [{start}, {end}): {tokens:?}");
    }
}
