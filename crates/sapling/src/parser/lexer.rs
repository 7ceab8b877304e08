//! Lexer (tokenizer) for arithmetic expressions
//!
//! Converts raw expression text into a flat [`Token`] sequence consumed by the
//! parser. Scanning is single pass: whitespace is skipped, numerals and the
//! single-character operators are recognized, and anything else is rejected
//! with a [`LexError`] that names the character and its position.

use tracing::debug;

use super::token::{Token, TokenKind};
use crate::error::LexError;

/// On-demand scanner over one expression.
#[derive(Debug, Clone)]
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    finished: bool,
}

impl Lexer {
    /// Create a lexer over the given text.
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            finished: false,
        }
    }

    /// Produce the next token.
    ///
    /// Once the end of input is reached this returns an `Eof` token, and keeps
    /// returning one on every further call.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let Some(&ch) = self.chars.get(self.pos) else {
            self.finished = true;
            return Ok(Token::new(TokenKind::Eof, self.chars.len()));
        };

        let starts_number = ch.is_ascii_digit()
            || (ch == '.' && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()));
        if starts_number {
            return self.scan_number();
        }

        match TokenKind::from_symbol(ch) {
            Some(kind) => {
                let token = Token::new(kind, self.pos);
                self.pos += 1;
                Ok(token)
            }
            None => Err(LexError::UnexpectedChar {
                ch,
                position: self.pos,
            }),
        }
    }

    /// Scan the whole input into a token sequence ending in exactly one `Eof`.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let at_end = token.is(TokenKind::Eof);
            tokens.push(token);
            if at_end {
                break;
            }
        }
        debug!(count = tokens.len(), "scanned tokens");
        Ok(tokens)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek_at(0).is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Digits with at most one decimal point.
    fn scan_number(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let mut text = String::new();
        let mut seen_point = false;

        while let Some(ch) = self.peek_at(0) {
            if ch.is_ascii_digit() {
                text.push(ch);
            } else if ch == '.' {
                text.push(ch);
                if seen_point {
                    return Err(LexError::MalformedNumber {
                        text,
                        position: start,
                    });
                }
                seen_point = true;
            } else {
                break;
            }
            self.pos += 1;
        }

        Ok(Token::number(text, start))
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to and including the first `Eof` or the first error,
    /// then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        if result.is_err() {
            self.finished = true;
        }
        Some(result)
    }
}

/// Scan `input` into a token sequence.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("+-*/%^()"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Mul,
                TokenKind::Div,
                TokenKind::Mod,
                TokenKind::Pow,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_numbers_and_whitespace() {
        let tokens = tokenize(" 12 +\t3.5 ").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::number("12", 1),
                Token::new(TokenKind::Plus, 4),
                Token::number("3.5", 6),
                Token::new(TokenKind::Eof, 10),
            ]
        );
        assert_eq!(tokens[2].position, 6);
        assert_eq!(tokens[3].position, 10);
    }

    #[test]
    fn test_leading_and_trailing_point() {
        let tokens = tokenize(".5 1.").unwrap();
        assert_eq!(tokens[0], Token::number(".5", 0));
        assert_eq!(tokens[1], Token::number("1.", 3));
    }

    #[test]
    fn test_empty_input_is_single_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert_eq!(kinds("   "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_two_points_is_malformed() {
        assert_eq!(
            tokenize("1..2"),
            Err(LexError::MalformedNumber {
                text: "1..".to_string(),
                position: 0,
            })
        );
        assert!(matches!(
            tokenize("7 + 1.2.3"),
            Err(LexError::MalformedNumber { position: 4, .. })
        ));
    }

    #[test]
    fn test_unknown_character() {
        assert_eq!(
            tokenize("2 $ 3"),
            Err(LexError::UnexpectedChar {
                ch: '$',
                position: 2,
            })
        );
        assert!(matches!(
            tokenize("."),
            Err(LexError::UnexpectedChar { ch: '.', .. })
        ));
    }

    #[test]
    fn test_next_token_repeats_eof() {
        let mut lexer = Lexer::new("1");
        assert!(lexer.next_token().unwrap().is(TokenKind::Number));
        assert!(lexer.next_token().unwrap().is(TokenKind::Eof));
        assert!(lexer.next_token().unwrap().is(TokenKind::Eof));
    }

    #[test]
    fn test_iterator_stops_after_eof() {
        let tokens: Vec<_> = Lexer::new("1 + 2").collect::<Result<_, _>>().unwrap();
        assert_eq!(tokens.len(), 4);
        assert!(tokens[3].is(TokenKind::Eof));
    }
}
