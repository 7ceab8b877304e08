//! Lookahead cursors over materialized sequences

use super::token::{Token, TokenKind};

/// A forward-only cursor over an owned sequence.
///
/// The position starts at zero and only ever increases.
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    elements: Vec<T>,
    pos: usize,
}

impl<T> Cursor<T> {
    /// Create a cursor positioned at the first element.
    pub fn new(elements: Vec<T>) -> Self {
        Self { elements, pos: 0 }
    }

    /// Element under the cursor, or `None` once the sequence is exhausted.
    pub fn peek(&self) -> Option<&T> {
        self.elements.get(self.pos)
    }

    /// Element one past the cursor.
    pub fn peek_next(&self) -> Option<&T> {
        self.elements.get(self.pos + 1)
    }

    /// Move to the next element.
    ///
    /// Advancing past the end is a caller bug; debug builds trap on it.
    pub fn advance(&mut self) {
        debug_assert!(
            self.pos < self.elements.len(),
            "cursor advanced past the end of its sequence"
        );
        if self.pos < self.elements.len() {
            self.pos += 1;
        }
    }

    /// Whether at least `n` more elements remain, counting the current one.
    pub fn has_enough(&self, n: usize) -> bool {
        self.pos + n <= self.elements.len()
    }

    /// Whether the cursor is before the physical end.
    pub fn has(&self) -> bool {
        self.pos < self.elements.len()
    }

    /// Current position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of elements in the underlying sequence.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the underlying sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Parser-facing token cursor.
///
/// Guarantees an `Eof` sentinel at the end of the sequence, keeps returning it
/// from [`peek`](TokenStream::peek) once reached, and treats "more input" as
/// "not yet at `Eof`" instead of "not at the physical end".
#[derive(Debug, Clone)]
pub struct TokenStream {
    cursor: Cursor<Token>,
    eof: Token,
}

impl TokenStream {
    /// Wrap a token sequence, appending `Eof` if the sequence lacks one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let eof = match tokens.last() {
            Some(last) if last.is(TokenKind::Eof) => last.clone(),
            last => {
                let position = last.map_or(0, |t| t.position + 1);
                let eof = Token::new(TokenKind::Eof, position);
                tokens.push(eof.clone());
                eof
            }
        };
        Self {
            cursor: Cursor::new(tokens),
            eof,
        }
    }

    /// Token under the cursor; `Eof` once the input is used up.
    pub fn peek(&self) -> &Token {
        self.cursor.peek().unwrap_or(&self.eof)
    }

    /// Token one past the cursor; `Eof` past the end.
    pub fn peek_next(&self) -> &Token {
        self.cursor.peek_next().unwrap_or(&self.eof)
    }

    /// Consume the token under the cursor.
    pub fn advance(&mut self) {
        self.cursor.advance();
    }

    /// Whether at least `n` more tokens remain, counting `Eof`.
    pub fn has_enough(&self, n: usize) -> bool {
        self.cursor.has_enough(n)
    }

    /// Whether any token other than `Eof` remains.
    pub fn has(&self) -> bool {
        !self.peek().is(TokenKind::Eof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_peek_and_advance() {
        let mut cursor = Cursor::new(vec![1, 2, 3]);
        assert_eq!(cursor.peek(), Some(&1));
        assert_eq!(cursor.peek_next(), Some(&2));
        cursor.advance();
        assert_eq!(cursor.peek(), Some(&2));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_cursor_has_enough() {
        let mut cursor = Cursor::new(vec!['a', 'b']);
        assert!(cursor.has_enough(2));
        assert!(!cursor.has_enough(3));
        cursor.advance();
        assert!(cursor.has_enough(1));
        assert!(!cursor.has_enough(2));
        cursor.advance();
        assert!(cursor.has_enough(0));
        assert!(!cursor.has());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_cursor_empty() {
        let cursor: Cursor<u8> = Cursor::new(Vec::new());
        assert!(cursor.is_empty());
        assert!(!cursor.has());
        assert_eq!(cursor.len(), 0);
    }

    #[test]
    #[should_panic(expected = "past the end")]
    #[cfg(debug_assertions)]
    fn test_cursor_advance_past_end_traps() {
        let mut cursor = Cursor::new(vec![1]);
        cursor.advance();
        cursor.advance();
    }

    #[test]
    fn test_stream_has_stops_at_eof() {
        let mut stream = TokenStream::new(vec![
            Token::number("1", 0),
            Token::new(TokenKind::Eof, 1),
        ]);
        assert!(stream.has());
        stream.advance();
        assert!(!stream.has());
        assert!(stream.peek().is(TokenKind::Eof));
        assert!(stream.has_enough(1));
    }

    #[test]
    fn test_stream_peek_repeats_eof() {
        let mut stream = TokenStream::new(vec![Token::new(TokenKind::Eof, 0)]);
        stream.advance();
        assert!(stream.peek().is(TokenKind::Eof));
        assert!(stream.peek_next().is(TokenKind::Eof));
    }

    #[test]
    fn test_stream_appends_missing_eof() {
        let stream = TokenStream::new(vec![Token::number("7", 0)]);
        assert!(stream.peek_next().is(TokenKind::Eof));
        assert_eq!(stream.peek_next().position, 1);

        let empty = TokenStream::new(Vec::new());
        assert!(!empty.has());
    }
}
