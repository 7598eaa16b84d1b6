use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    And,
    False,
    In,
    Let,
    Rec,
    True,

    // Literals
    LowercaseIdent,

    // Symbols
    Equal,
    Unit,

    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::And => write!(f, "and"),
            TokenKind::False => write!(f, "false"),
            TokenKind::In => write!(f, "in"),
            TokenKind::Let => write!(f, "let"),
            TokenKind::Rec => write!(f, "rec"),
            TokenKind::True => write!(f, "true"),
            TokenKind::LowercaseIdent => write!(f, "identifier"),
            TokenKind::Equal => write!(f, "="),
            TokenKind::Unit => write!(f, "()"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}

/// Parsed payload of a literal token. No token in the current grammar
/// carries one; the slot exists for literal kinds to come.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    Int(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: None,
        }
    }

    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "EOF"),
            _ => write!(f, "{}", self.lexeme),
        }
    }
}

pub const SYMBOLS: &[(&str, TokenKind)] = &[
    ("()", TokenKind::Unit),
    ("=", TokenKind::Equal),
];

pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("and", TokenKind::And),
    ("false", TokenKind::False),
    ("in", TokenKind::In),
    ("let", TokenKind::Let),
    ("rec", TokenKind::Rec),
    ("true", TokenKind::True),
    ("unit", TokenKind::Unit),
];
