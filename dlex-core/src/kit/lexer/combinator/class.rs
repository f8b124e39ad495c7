//! 字符类谓词
//!
//! A named class of single characters. As a combinator it consumes exactly one
//! matching character and then accepts the empty remainder.

use std::fmt;
use std::sync::Arc;

/// Named character class
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharClass {
    /// Any character at all
    Any,
    /// Unicode alphabetic
    Letter,
    /// ASCII decimal digit
    Digit,
    /// ASCII hexadecimal digit
    HexDigit,
    /// Unicode alphanumeric
    Alphanumeric,
    /// Unicode white space (includes line breaks)
    Whitespace,
    /// Line terminators
    LineBreak,
    /// Anything that is not a control character
    Graphic,
    Uppercase,
    Lowercase,
    /// ASCII punctuation
    Punctuation,
    /// Inclusive range
    Range(char, char),
    /// Explicit set
    Set(Arc<[char]>),
}

impl CharClass {
    /// Build a `Set` class from the characters of `chars`
    pub fn set(chars: &str) -> Self {
        CharClass::Set(chars.chars().collect())
    }

    pub fn matches(&self, c: char) -> bool {
        match self {
            CharClass::Any => true,
            CharClass::Letter => c.is_alphabetic(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::HexDigit => c.is_ascii_hexdigit(),
            CharClass::Alphanumeric => c.is_alphanumeric(),
            CharClass::Whitespace => c.is_whitespace(),
            CharClass::LineBreak => is_line_break(c),
            CharClass::Graphic => !c.is_control(),
            CharClass::Uppercase => c.is_uppercase(),
            CharClass::Lowercase => c.is_lowercase(),
            CharClass::Punctuation => c.is_ascii_punctuation(),
            CharClass::Range(lo, hi) => (*lo..=*hi).contains(&c),
            CharClass::Set(chars) => chars.contains(&c),
        }
    }
}

/// Characters that terminate a line
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Any => write!(f, "any"),
            CharClass::Letter => write!(f, "letter"),
            CharClass::Digit => write!(f, "digit"),
            CharClass::HexDigit => write!(f, "hex_digit"),
            CharClass::Alphanumeric => write!(f, "alphanumeric"),
            CharClass::Whitespace => write!(f, "whitespace"),
            CharClass::LineBreak => write!(f, "line_break"),
            CharClass::Graphic => write!(f, "graphic"),
            CharClass::Uppercase => write!(f, "uppercase"),
            CharClass::Lowercase => write!(f, "lowercase"),
            CharClass::Punctuation => write!(f, "punctuation"),
            CharClass::Range(lo, hi) => write!(f, "[{}-{}]", lo.escape_debug(), hi.escape_debug()),
            CharClass::Set(chars) => {
                write!(f, "[")?;
                for c in chars.iter() {
                    write!(f, "{}", c.escape_debug())?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_classes() {
        assert!(CharClass::Letter.matches('é'));
        assert!(!CharClass::Letter.matches('1'));
        assert!(CharClass::Digit.matches('7'));
        assert!(!CharClass::Digit.matches('٣'));
        assert!(CharClass::HexDigit.matches('F'));
        assert!(CharClass::Graphic.matches(' '));
        assert!(!CharClass::Graphic.matches('\t'));
        assert!(CharClass::Punctuation.matches('#'));
    }

    #[test]
    fn test_line_break_subset_of_whitespace() {
        for c in ['\n', '\r', '\u{0B}', '\u{0C}', '\u{85}', '\u{2028}', '\u{2029}'] {
            assert!(CharClass::LineBreak.matches(c));
            assert!(CharClass::Whitespace.matches(c));
        }
        assert!(!CharClass::LineBreak.matches(' '));
    }

    #[test]
    fn test_range_and_set() {
        let lower = CharClass::Range('a', 'z');
        assert!(lower.matches('a'));
        assert!(lower.matches('z'));
        assert!(!lower.matches('A'));

        let signs = CharClass::set("+-");
        assert!(signs.matches('-'));
        assert!(!signs.matches('*'));
    }

    #[test]
    fn test_display() {
        assert_eq!(CharClass::Digit.to_string(), "digit");
        assert_eq!(CharClass::Range('a', 'f').to_string(), "[a-f]");
        assert_eq!(CharClass::set("\"x").to_string(), "[\\\"x]");
    }
}
