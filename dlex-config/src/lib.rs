//! dlex Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all dlex crates.

use serde::{Deserialize, Serialize};

/// Top-level configuration, usually read from `dlex.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DlexConfig {
    /// Tokenizer behaviour
    pub lexer: LexerConfig,
    /// Logging levels and format
    pub logging: LoggingConfig,
    /// How tokens are rendered by the CLI
    pub output: OutputConfig,
}

impl DlexConfig {
    /// Parse a JSON document; missing sections fall back to their defaults
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Render as pretty JSON
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Which shipped grammar to tokenize with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrammarKind {
    /// General source-language grammar
    #[default]
    Source,
    /// Project (configuration) file grammar
    Project,
}

impl GrammarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrammarKind::Source => "source",
            GrammarKind::Project => "project",
        }
    }
}

/// Configuration for tokenizer behaviour
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Grammar used for tokenization
    pub grammar: GrammarKind,
    /// Drop whitespace, newline and comment tokens from the output
    pub skip_trivia: bool,
}

/// Log severity, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Parse a level name; "silent" maps to `Error`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Colored multi-line output (development)
    #[default]
    Pretty,
    /// One line per event
    Compact,
    /// JSON lines (tool integration)
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Global default level
    pub level: LogLevel,
    /// Lexer level (None means use `level`)
    pub lexer: Option<LogLevel>,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            lexer: None,
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Effective level for a target
    pub fn level_for(&self, target: LogTarget) -> LogLevel {
        match target {
            LogTarget::Lexer => self.lexer.unwrap_or(self.level),
            _ => self.level,
        }
    }
}

/// Token output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Token output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Include line/column positions next to byte offsets
    pub show_positions: bool,
}

/// Log target areas, one per layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    Lexer,
    Grammar,
    Api,
    Cli,
}

impl LogTarget {
    pub const ALL: [LogTarget; 4] = [
        LogTarget::Lexer,
        LogTarget::Grammar,
        LogTarget::Api,
        LogTarget::Cli,
    ];

    /// Get the string name of the target
    pub fn as_str(&self) -> &'static str {
        match self {
            LogTarget::Lexer => "lexer",
            LogTarget::Grammar => "grammar",
            LogTarget::Api => "api",
            LogTarget::Cli => "cli",
        }
    }

    /// Get the tracing target name
    pub fn target(&self) -> String {
        format!("dlex::{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = DlexConfig::default();
        assert_eq!(cfg.lexer.grammar, GrammarKind::Source);
        assert!(!cfg.lexer.skip_trivia);
        assert_eq!(cfg.logging.level, LogLevel::Warn);
        assert_eq!(cfg.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg = DlexConfig::from_json_str(r#"{ "lexer": { "grammar": "project" } }"#).unwrap();
        assert_eq!(cfg.lexer.grammar, GrammarKind::Project);
        assert!(!cfg.lexer.skip_trivia);
        assert_eq!(cfg.logging, LoggingConfig::default());
    }

    #[test]
    fn test_json_round_trip_keeps_levels() {
        let mut cfg = DlexConfig::default();
        cfg.logging.lexer = Some(LogLevel::Trace);
        cfg.output.format = OutputFormat::Json;
        let json = cfg.to_json_string().unwrap();
        assert!(json.contains("\"trace\""));
        assert_eq!(DlexConfig::from_json_str(&json).unwrap(), cfg);
    }

    #[test]
    fn test_unknown_grammar_rejected() {
        assert!(DlexConfig::from_json_str(r#"{ "lexer": { "grammar": "cobol" } }"#).is_err());
    }

    #[test]
    fn test_level_for_lexer_override() {
        let logging = LoggingConfig {
            level: LogLevel::Info,
            lexer: Some(LogLevel::Trace),
            format: LogFormat::Compact,
        };
        assert_eq!(logging.level_for(LogTarget::Lexer), LogLevel::Trace);
        assert_eq!(logging.level_for(LogTarget::Api), LogLevel::Info);
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("SILENT"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("loud"), None);
        assert!(LogLevel::Trace < LogLevel::Error);
    }

    #[test]
    fn test_target_names() {
        assert_eq!(LogTarget::Lexer.target(), "dlex::lexer");
        assert_eq!(LogTarget::Cli.as_str(), "cli");
    }
}
