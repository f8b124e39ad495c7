//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

#![allow(dead_code)]

use dlex_workspace::{tokenize_source, GrammarKind, RunConfig, TokenizeOutput};

/// 分词并返回 (kind, text) 序列
pub fn lex(source: &str, grammar: GrammarKind) -> Vec<(String, String)> {
    run(source, grammar, false)
        .tokens
        .into_iter()
        .map(|token| (token.kind, token.text))
        .collect()
}

/// 分词（跳过空白与注释）并返回 kind 序列
pub fn kinds(source: &str, grammar: GrammarKind) -> Vec<String> {
    run(source, grammar, true)
        .tokens
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

pub fn run(source: &str, grammar: GrammarKind, skip_trivia: bool) -> TokenizeOutput {
    let config = RunConfig {
        grammar,
        skip_trivia,
        verify_coverage: true,
    };
    tokenize_source(source, None, &config).expect("tokenization succeeds")
}
