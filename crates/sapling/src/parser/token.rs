//! Token types produced by the lexer

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// Numeric literal; the text is carried in [`Token::value`]
    Number,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Map a single operator or parenthesis character to its kind.
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Mul),
            '/' => Some(TokenKind::Div),
            '%' => Some(TokenKind::Mod),
            '^' => Some(TokenKind::Pow),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            _ => None,
        }
    }

    /// Source symbol for operator and parenthesis kinds.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Mul => Some("*"),
            TokenKind::Div => Some("/"),
            TokenKind::Mod => Some("%"),
            TokenKind::Pow => Some("^"),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::Number | TokenKind::Eof => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(s) => write!(f, "{}", s),
            None if *self == TokenKind::Number => write!(f, "NUMBER"),
            None => write!(f, "EOF"),
        }
    }
}

/// A lexical token.
///
/// Tokens compare equal when their kinds match and, for numbers, their
/// literal text matches. The source position is carried for diagnostics only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Token kind
    pub kind: TokenKind,

    /// Literal text for `Number` tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// 0-based character position of the first character
    pub position: usize,
}

impl Token {
    /// Create a token without payload.
    pub fn new(kind: TokenKind, position: usize) -> Self {
        Self {
            kind,
            value: None,
            position,
        }
    }

    /// Create a number token carrying its literal text.
    pub fn number(text: impl Into<String>, position: usize) -> Self {
        Self {
            kind: TokenKind::Number,
            value: Some(text.into()),
            position,
        }
    }

    /// Check the token kind.
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        match (self.kind, other.kind) {
            (TokenKind::Number, TokenKind::Number) => self.value == other.value,
            (a, b) => a == b,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, &self.value) {
            (TokenKind::Number, Some(text)) => write!(f, "number `{}`", text),
            (TokenKind::Eof, _) => write!(f, "end of input"),
            (kind, _) => write!(f, "`{}`", kind),
        }
    }
}
