//! API 类型定义
//!
//! 分词的输出类型，可直接序列化为 JSON。

use serde::Serialize;

/// One token, resolved against its source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    /// Token kind name, e.g. `Identifier`
    pub kind: String,
    /// Numeric kind code
    pub code: u8,
    /// Byte offsets `[start, end)`
    pub start: usize,
    pub end: usize,
    /// 1-based line and column of `start`
    pub line: usize,
    pub column: usize,
    /// 1-based line and column of `end`
    pub end_line: usize,
    pub end_column: usize,
    pub text: String,
    /// Highlight category, e.g. `keyword`
    pub category: &'static str,
}

impl TokenRecord {
    pub fn is_invalid(&self) -> bool {
        self.category == "invalid"
    }
}

/// 分词输出
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenizeOutput {
    /// Grammar the text was tokenized with
    pub grammar: &'static str,
    /// Tokenized byte range
    pub start: usize,
    pub end: usize,
    pub tokens: Vec<TokenRecord>,
    /// Tokens dropped as trivia
    pub skipped: usize,
}

impl TokenizeOutput {
    pub fn invalid_tokens(&self) -> impl Iterator<Item = &TokenRecord> {
        self.tokens.iter().filter(|token| token.is_invalid())
    }

    pub fn has_invalid(&self) -> bool {
        self.invalid_tokens().next().is_some()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
