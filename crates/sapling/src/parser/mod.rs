//! Front end: lexer, token cursor and recursive-descent parser
//!
//! ```text
//! text → Lexer → Vec<Token> → TokenStream → Parser → Expr
//! ```

pub mod cursor;
pub mod grammar;
pub mod lexer;
pub mod token;

pub use cursor::{Cursor, TokenStream};
pub use grammar::{Parser, MAX_NESTING};
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
