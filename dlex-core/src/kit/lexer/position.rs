//! 源代码位置追踪
//!
//! Tokens carry byte offsets only. [`LineIndex`] maps an offset back to the
//! coordinates different consumers need:
//! - line/column: human-readable diagnostics (1-based)
//! - byte_offset: slicing and file seeks (0-based)
//! - utf16_column: editor protocols that count UTF-16 units (0-based)

use super::combinator::class::is_line_break;
use super::token::Token;

/// 源代码位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourcePosition {
    /// 行号，1-based
    pub line: usize,
    /// 列号，1-based，Unicode码点计数
    pub column: usize,
    /// 字节偏移，0-based
    pub byte_offset: usize,
    /// 行内UTF-16偏移，0-based
    pub utf16_column: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, byte_offset: usize, utf16_column: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
            utf16_column,
        }
    }

    /// 文件起始位置
    pub fn start() -> Self {
        Self::new(1, 1, 0, 0)
    }
}

/// 源代码区间（Span）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpan {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

/// Byte offsets of line starts, built once per text
///
/// `\r\n` counts as one line break, like the shipped grammars' newline token.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut chars = text.char_indices().peekable();
        while let Some((offset, c)) = chars.next() {
            if !is_line_break(c) {
                continue;
            }
            let mut next = offset + c.len_utf8();
            if c == '\r' {
                if let Some(&(lf_offset, '\n')) = chars.peek() {
                    chars.next();
                    next = lf_offset + 1;
                }
            }
            line_starts.push(next);
        }
        Self { line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Position of `offset` in `text`
    ///
    /// `text` must be the string the index was built from and `offset` must lie
    /// on a character boundary no greater than `text.len()`.
    pub fn position(&self, text: &str, offset: usize) -> SourcePosition {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let prefix = &text[line_start..offset];
        SourcePosition {
            line,
            column: prefix.chars().count() + 1,
            byte_offset: offset,
            utf16_column: prefix.encode_utf16().count(),
        }
    }

    /// Text of 1-based `line` without its line break
    ///
    /// `text` must be the string the index was built from.
    pub fn line_text<'a>(&self, text: &'a str, line: usize) -> Option<&'a str> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self.line_starts.get(line).copied().unwrap_or(text.len());
        let content = &text[start..end];
        Some(match content.strip_suffix("\r\n") {
            Some(rest) => rest,
            None => content.strip_suffix(is_line_break).unwrap_or(content),
        })
    }

    pub fn span<K>(&self, text: &str, token: &Token<K>) -> SourceSpan {
        SourceSpan {
            start: self.position(text, token.start),
            end: self.position(text, token.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_start() {
        let pos = SourcePosition::start();
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.byte_offset, 0);
        assert_eq!(pos.utf16_column, 0);
    }

    #[test]
    fn test_position_ascii() {
        let text = "ab";
        let index = LineIndex::new(text);
        assert_eq!(index.position(text, 0), SourcePosition::start());
        assert_eq!(index.position(text, 2), SourcePosition::new(1, 3, 2, 2));
    }

    #[test]
    fn test_position_newline() {
        let text = "a\nbc\r\nd";
        let index = LineIndex::new(text);
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.position(text, 2), SourcePosition::new(2, 1, 2, 0));
        assert_eq!(index.position(text, 3), SourcePosition::new(2, 2, 3, 1));
        assert_eq!(index.position(text, 6), SourcePosition::new(3, 1, 6, 0));
    }

    #[test]
    fn test_position_cjk() {
        // CJK字符：3字节UTF-8，1个UTF-16单元
        let text = "中x";
        let index = LineIndex::new(text);
        assert_eq!(index.position(text, 3), SourcePosition::new(1, 2, 3, 1));
    }

    #[test]
    fn test_position_emoji() {
        // Emoji：4字节UTF-8，2个UTF-16单元（代理对）
        let text = "🎉x";
        let index = LineIndex::new(text);
        assert_eq!(index.position(text, 4), SourcePosition::new(1, 2, 4, 2));
    }

    #[test]
    fn test_line_text() {
        let text = "a\r\nb\rc\u{2028}d\n";
        let index = LineIndex::new(text);
        assert_eq!(index.line_count(), 5);
        assert_eq!(index.line_text(text, 1), Some("a"));
        assert_eq!(index.line_text(text, 2), Some("b"));
        assert_eq!(index.line_text(text, 3), Some("c"));
        assert_eq!(index.line_text(text, 4), Some("d"));
        assert_eq!(index.line_text(text, 5), Some(""));
        assert_eq!(index.line_text(text, 0), None);
        assert_eq!(index.line_text(text, 6), None);
    }

    #[test]
    fn test_span() {
        let text = "x\nyy";
        let index = LineIndex::new(text);
        let span = index.span(text, &Token::new((), 2, 4));
        assert_eq!(span.start, SourcePosition::new(2, 1, 2, 0));
        assert_eq!(span.end, SourcePosition::new(2, 3, 4, 2));
    }
}
