//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use serde::Serialize;
use thiserror::Error;

pub use dlex_core::kit::lexer::{CoverageError, GrammarError, TokenizeError};

/// dlex 错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DlexError {
    /// 语法构建错误
    #[error("Grammar error: {0}")]
    Grammar(#[from] GrammarError),

    /// 调用参数错误
    #[error("{0}")]
    Tokenize(#[from] TokenizeError),

    /// Token 覆盖不变量被破坏
    #[error("Coverage error: {0}")]
    Coverage(#[from] CoverageError),

    /// 区间参数无法解析
    #[error("Invalid range '{0}': expected START..END")]
    Range(String),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// 文件读写错误
    #[error("Cannot read '{path}': {message}")]
    Io { path: String, message: String },
}

impl DlexError {
    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            DlexError::Grammar(_) => "grammar",
            DlexError::Tokenize(_) | DlexError::Range(_) => "input",
            DlexError::Coverage(_) => "lexer",
            DlexError::Config(_) => "config",
            DlexError::Io { .. } => "io",
        }
    }

    /// Byte offset the error points at, if any
    pub fn offset(&self) -> Option<usize> {
        match self {
            DlexError::Tokenize(TokenizeError::InvalidRange { start, .. }) => Some(*start),
            DlexError::Tokenize(TokenizeError::OutOfBounds { end, .. }) => Some(*end),
            DlexError::Tokenize(TokenizeError::NotCharBoundary(offset)) => Some(*offset),
            DlexError::Coverage(CoverageError::Gap { expected, .. }) => Some(*expected),
            DlexError::Coverage(CoverageError::EmptyToken(offset)) => Some(*offset),
            DlexError::Coverage(CoverageError::Incomplete { found, .. }) => Some(*found),
            _ => None,
        }
    }

    fn error_kind(&self) -> String {
        match self {
            DlexError::Grammar(e) => variant_name(e),
            DlexError::Tokenize(e) => variant_name(e),
            DlexError::Coverage(e) => variant_name(e),
            DlexError::Range(_) => "InvalidRange".to_string(),
            DlexError::Config(_) => "ConfigError".to_string(),
            DlexError::Io { .. } => "IoError".to_string(),
        }
    }

    /// 转换为结构化错误报告
    ///
    /// CLI 可以直接打印，上层应用可以序列化为 JSON。
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            phase: self.phase(),
            offset: self.offset(),
            error_kind: self.error_kind(),
            message: self.to_string(),
        }
    }
}

/// `Gap { .. }` -> `Gap`
fn variant_name(value: &impl std::fmt::Debug) -> String {
    let debug = format!("{value:?}");
    debug
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// 结构化错误报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// 错误阶段: grammar, input, lexer, config, io
    pub phase: &'static str,
    /// 字节偏移（如果有）
    pub offset: Option<usize>,
    /// 错误类型（可用于程序化处理）
    pub error_kind: String,
    /// 人类可读的错误消息
    pub message: String,
}

impl std::fmt::Display for ErrorReport {
    /// 默认的 CLI 友好格式
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "[@{}] {} error: {}", offset, self.phase, self.message),
            None => write!(f, "[{}] error: {}", self.phase, self.message),
        }
    }
}

impl ErrorReport {
    /// 转换为 JSON 格式（Web API 使用）
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
