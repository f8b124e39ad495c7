//! dlex Token 类型定义
//!
//! One kind enum is shared by every shipped grammar; a grammar registers roots
//! for the subset it understands.

use crate::kit::lexer::TokenKindTrait;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Default)]
#[repr(u8)]
pub enum TokenKind {
    // 无效字符
    #[default]
    Invalid = 0,

    // 空白与注释 (1-3)
    Whitespace = 1,
    Newline,
    Comment,

    // 标识符 (10)
    Identifier = 10,

    // 字面量 (20-22)
    NumericLiteral = 20,
    CharacterLiteral,
    StringLiteral,

    // 关键字 (40-112)
    Abort = 40,
    Abs,
    Abstract,
    Accept,
    Access,
    Aliased,
    All,
    And,
    Array,
    At,
    Begin,
    Body,
    Case,
    Constant,
    Declare,
    Delay,
    Delta,
    Digits,
    Do,
    Else,
    Elsif,
    End,
    Entry,
    Exception,
    Exit,
    For,
    Function,
    Generic,
    Goto,
    If,
    In,
    Interface,
    Is,
    Limited,
    Loop,
    Mod,
    New,
    Not,
    Null,
    Of,
    Or,
    Others,
    Out,
    Overriding,
    Package,
    Pragma,
    Private,
    Procedure,
    Protected,
    Raise,
    Range,
    Record,
    Rem,
    Renames,
    Requeue,
    Return,
    Reverse,
    Select,
    Separate,
    Some,
    Subtype,
    Synchronized,
    Tagged,
    Task,
    Terminate,
    Then,
    Type,
    Until,
    Use,
    When,
    While,
    With,
    Xor,

    // 双字符符号 (150-159)
    Arrow = 150,
    DoubleDot,
    DoubleStar,
    Assign,
    NotEqual,
    GreaterEqual,
    LessEqual,
    LeftLabel,
    RightLabel,
    Box,

    // 单字符符号 (170-185)
    Ampersand = 170,
    Tick,
    LeftParen,
    RightParen,
    Star,
    Plus,
    Comma,
    Minus,
    Dot,
    Slash,
    Colon,
    Semicolon,
    Less,
    Equal,
    Greater,
    Bar,
}

/// Reserved words with their kinds, in kind order
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("abort", TokenKind::Abort),
    ("abs", TokenKind::Abs),
    ("abstract", TokenKind::Abstract),
    ("accept", TokenKind::Accept),
    ("access", TokenKind::Access),
    ("aliased", TokenKind::Aliased),
    ("all", TokenKind::All),
    ("and", TokenKind::And),
    ("array", TokenKind::Array),
    ("at", TokenKind::At),
    ("begin", TokenKind::Begin),
    ("body", TokenKind::Body),
    ("case", TokenKind::Case),
    ("constant", TokenKind::Constant),
    ("declare", TokenKind::Declare),
    ("delay", TokenKind::Delay),
    ("delta", TokenKind::Delta),
    ("digits", TokenKind::Digits),
    ("do", TokenKind::Do),
    ("else", TokenKind::Else),
    ("elsif", TokenKind::Elsif),
    ("end", TokenKind::End),
    ("entry", TokenKind::Entry),
    ("exception", TokenKind::Exception),
    ("exit", TokenKind::Exit),
    ("for", TokenKind::For),
    ("function", TokenKind::Function),
    ("generic", TokenKind::Generic),
    ("goto", TokenKind::Goto),
    ("if", TokenKind::If),
    ("in", TokenKind::In),
    ("interface", TokenKind::Interface),
    ("is", TokenKind::Is),
    ("limited", TokenKind::Limited),
    ("loop", TokenKind::Loop),
    ("mod", TokenKind::Mod),
    ("new", TokenKind::New),
    ("not", TokenKind::Not),
    ("null", TokenKind::Null),
    ("of", TokenKind::Of),
    ("or", TokenKind::Or),
    ("others", TokenKind::Others),
    ("out", TokenKind::Out),
    ("overriding", TokenKind::Overriding),
    ("package", TokenKind::Package),
    ("pragma", TokenKind::Pragma),
    ("private", TokenKind::Private),
    ("procedure", TokenKind::Procedure),
    ("protected", TokenKind::Protected),
    ("raise", TokenKind::Raise),
    ("range", TokenKind::Range),
    ("record", TokenKind::Record),
    ("rem", TokenKind::Rem),
    ("renames", TokenKind::Renames),
    ("requeue", TokenKind::Requeue),
    ("return", TokenKind::Return),
    ("reverse", TokenKind::Reverse),
    ("select", TokenKind::Select),
    ("separate", TokenKind::Separate),
    ("some", TokenKind::Some),
    ("subtype", TokenKind::Subtype),
    ("synchronized", TokenKind::Synchronized),
    ("tagged", TokenKind::Tagged),
    ("task", TokenKind::Task),
    ("terminate", TokenKind::Terminate),
    ("then", TokenKind::Then),
    ("type", TokenKind::Type),
    ("until", TokenKind::Until),
    ("use", TokenKind::Use),
    ("when", TokenKind::When),
    ("while", TokenKind::While),
    ("with", TokenKind::With),
    ("xor", TokenKind::Xor),
];

/// Delimiters with their kinds, compounds first
pub const DELIMITERS: &[(&str, TokenKind)] = &[
    ("=>", TokenKind::Arrow),
    ("..", TokenKind::DoubleDot),
    ("**", TokenKind::DoubleStar),
    (":=", TokenKind::Assign),
    ("/=", TokenKind::NotEqual),
    (">=", TokenKind::GreaterEqual),
    ("<=", TokenKind::LessEqual),
    ("<<", TokenKind::LeftLabel),
    (">>", TokenKind::RightLabel),
    ("<>", TokenKind::Box),
    ("&", TokenKind::Ampersand),
    ("'", TokenKind::Tick),
    ("(", TokenKind::LeftParen),
    (")", TokenKind::RightParen),
    ("*", TokenKind::Star),
    ("+", TokenKind::Plus),
    (",", TokenKind::Comma),
    ("-", TokenKind::Minus),
    (".", TokenKind::Dot),
    ("/", TokenKind::Slash),
    (":", TokenKind::Colon),
    (";", TokenKind::Semicolon),
    ("<", TokenKind::Less),
    ("=", TokenKind::Equal),
    (">", TokenKind::Greater),
    ("|", TokenKind::Bar),
];

impl TokenKind {
    pub fn is_keyword(self) -> bool {
        (TokenKind::Abort as u8..=TokenKind::Xor as u8).contains(&(self as u8))
    }

    pub fn is_delimiter(self) -> bool {
        self as u8 >= TokenKind::Arrow as u8
    }

    /// Whitespace, newline or comment
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Newline | TokenKind::Comment
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::NumericLiteral | TokenKind::CharacterLiteral | TokenKind::StringLiteral
        )
    }

    /// Canonical spelling of a keyword or delimiter
    pub fn spelling(self) -> Option<&'static str> {
        KEYWORDS
            .iter()
            .chain(DELIMITERS)
            .find(|(_, kind)| *kind == self)
            .map(|(text, _)| *text)
    }

    /// Keyword spelled `word`, ignoring ASCII case
    pub fn keyword(word: &str) -> Option<TokenKind> {
        KEYWORDS
            .iter()
            .find(|(text, _)| text.eq_ignore_ascii_case(word))
            .map(|(_, kind)| *kind)
    }
}

impl From<TokenKind> for u8 {
    fn from(val: TokenKind) -> Self {
        val as u8
    }
}

impl TokenKindTrait for TokenKind {}
