//! Recursive-descent parser
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expr      := addsub
//! addsub    := muldivmod ( ('+'|'-') muldivmod )*
//! muldivmod := power ( ('*'|'/'|'%') power )*
//! power     := unary ( '^' unary )*
//! unary     := ('+'|'-') unary | atom
//! atom      := NUMBER | '(' expr ')'
//! ```
//!
//! Every binary level folds `left = op(left, right)` in a loop, so all binary
//! operators, `^` included, group left to right: `2^3^2` is `(2^3)^2`.

use tracing::debug;

use super::cursor::TokenStream;
use super::lexer::Lexer;
use super::token::{Token, TokenKind};
use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::error::{LexError, ParseError};

/// Deepest nesting of parentheses and sign prefixes the parser accepts.
pub const MAX_NESTING: usize = 256;

/// Recursive-descent parser over a scanned token sequence.
#[derive(Debug, Clone)]
pub struct Parser {
    tokens: TokenStream,
    depth: usize,
}

impl Parser {
    /// Scan `input` and prepare to parse it.
    pub fn new(input: &str) -> Result<Self, LexError> {
        Self::from_lexer(Lexer::new(input))
    }

    /// Drain an existing lexer and prepare to parse its tokens.
    pub fn from_lexer(mut lexer: Lexer) -> Result<Self, LexError> {
        Ok(Self::from_tokens(lexer.tokenize()?))
    }

    /// Parse an already-scanned token sequence.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            tokens: TokenStream::new(tokens),
            depth: 0,
        }
    }

    /// Parse one complete expression, rejecting any trailing input.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr()?;
        if self.tokens.has() {
            return Err(ParseError::TrailingInput {
                token: self.tokens.peek().clone(),
            });
        }
        debug!(depth = expr.depth(), "parsed expression");
        Ok(expr)
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_add_sub()
    }

    fn parse_add_sub(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_mul_div_mod()?;
        loop {
            let op = match self.tokens.peek().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.tokens.advance();
            let right = self.parse_mul_div_mod()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_mul_div_mod(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_power()?;
        loop {
            let op = match self.tokens.peek().kind {
                TokenKind::Mul => BinaryOp::Mul,
                TokenKind::Div => BinaryOp::Div,
                TokenKind::Mod => BinaryOp::Rem,
                _ => break,
            };
            self.tokens.advance();
            let right = self.parse_power()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        while self.tokens.peek().is(TokenKind::Pow) {
            self.tokens.advance();
            let right = self.parse_unary()?;
            left = Expr::binary(BinaryOp::Pow, left, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.tokens.peek().kind {
            TokenKind::Plus => UnaryOp::Pos,
            TokenKind::Minus => UnaryOp::Neg,
            _ => return self.parse_atom(),
        };
        self.enter()?;
        self.tokens.advance();
        let operand = self.parse_unary();
        self.leave();
        Ok(Expr::unary(op, operand?))
    }

    fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        let token = self.tokens.peek().clone();
        match token.kind {
            TokenKind::Number => {
                self.tokens.advance();
                let text = token.value.unwrap_or_default();
                Ok(Expr::number(text))
            }
            TokenKind::LParen => {
                self.enter()?;
                self.tokens.advance();
                let inner = self.parse_expr();
                self.leave();
                let inner = inner?;
                if !self.tokens.peek().is(TokenKind::RParen) {
                    return Err(ParseError::ExpectedRParen {
                        found: self.tokens.peek().clone(),
                    });
                }
                self.tokens.advance();
                Ok(inner)
            }
            _ => Err(ParseError::UnexpectedToken { token }),
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING,
                position: self.tokens.peek().position,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}
