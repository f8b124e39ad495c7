//! CLI 配置
//!
//! 日志配置：由 dlex.json 的 logging 段和命令行参数合成

use dlex_config::{LogLevel, LogTarget, LoggingConfig};
use tracing::Level;

/// CLI 日志配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub global: Level,
    pub lexer: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from(&LoggingConfig::default())
    }
}

impl From<&LoggingConfig> for LogConfig {
    fn from(config: &LoggingConfig) -> Self {
        Self {
            global: to_level(config.level),
            lexer: config.lexer.map(to_level),
        }
    }
}

impl LogConfig {
    /// Get log level for a specific target
    pub fn level_for(&self, target: LogTarget) -> Level {
        match target {
            LogTarget::Lexer => self.lexer.unwrap_or(self.global),
            _ => self.global,
        }
    }
}

fn to_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}
