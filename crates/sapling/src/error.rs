//! Error types for Sapling scanning, parsing and evaluation

use thiserror::Error;

use crate::parser::Token;
use crate::Value;

/// Error raised while scanning expression text into tokens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    /// A character that starts no token
    #[error("unexpected character `{ch}` at position {position}")]
    UnexpectedChar {
        /// Offending character
        ch: char,
        /// 0-based character position
        position: usize,
    },

    /// A numeral with more than one decimal point
    #[error("malformed number `{text}` at position {position}")]
    MalformedNumber {
        /// Numeral text scanned so far, including the offending point
        text: String,
        /// 0-based position where the numeral starts
        position: usize,
    },
}

/// Error raised when the token sequence violates the grammar.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A token that cannot start an operand
    #[error("unexpected token: {token} at position {}", .token.position)]
    UnexpectedToken {
        /// The token found
        token: Token,
    },

    /// A parenthesized expression without its closing `)`
    #[error("expected rparen, but found {found} at position {}", .found.position)]
    ExpectedRParen {
        /// The token found instead of `)`
        found: Token,
    },

    /// A complete expression followed by more tokens
    #[error("trailing input: {token} at position {}", .token.position)]
    TrailingInput {
        /// First unconsumed token
        token: Token,
    },

    /// Parentheses or sign prefixes nested past the parser's limit
    #[error("nesting too deep (limit {limit}) at position {position}")]
    NestingTooDeep {
        /// Maximum nesting accepted
        limit: usize,
        /// Position of the token that crossed the limit
        position: usize,
    },
}

/// Error raised while evaluating an AST.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Right operand of `/` is zero
    #[error("division by zero: {left} / {right}")]
    DivisionByZero {
        /// Dividend
        left: Value,
        /// Divisor
        right: Value,
    },

    /// Right operand of `%` is zero
    #[error("modulo by zero: {left} % {right}")]
    ModuloByZero {
        /// Dividend
        left: Value,
        /// Divisor
        right: Value,
    },

    /// A number literal whose text is not a number
    #[error("invalid number literal `{text}`")]
    InvalidLiteral {
        /// Literal text
        text: String,
    },

    /// The tree is nested deeper than the context allows
    #[error("evaluation depth exceeded (limit {limit})")]
    DepthExceeded {
        /// Configured maximum depth
        limit: usize,
    },
}

/// Main error type for Sapling operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SaplingError {
    /// Scanning failed
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    /// Parsing failed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Evaluation failed
    #[error("Eval error: {0}")]
    Eval(#[from] EvalError),
}

/// Result type alias for Sapling operations
pub type Result<T> = std::result::Result<T, SaplingError>;
