//! # Sapling
//!
//! A small arithmetic expression engine.
//!
//! Sapling scans an expression such as `-(2 + 3) * 4 ^ 2 % 7`, parses it into
//! an immutable abstract syntax tree with a recursive-descent parser, and
//! evaluates that tree with a tree-walking evaluator.
//!
//! ## Architecture
//!
//! ```text
//! text → Lexer → tokens → Parser → Expr → Evaluate(EvalContext) → Value
//! ```
//!
//! - **Lexer**: numerals and `+ - * / % ^ ( )`, whitespace skipped
//! - **Parser**: precedence climbing over a forward-only token cursor
//! - **Evaluator**: exhaustive match over the AST with integer/decimal
//!   promotion kept in one table ([`value::numeric`])
//!
//! ## Example
//!
//! ```
//! use sapling::{eval_str, evaluate, parse, EvalContext, Value};
//!
//! assert_eq!(eval_str("2 + 3 * 4").unwrap(), Value::Integer(14));
//!
//! let expr = parse("7 / 2").unwrap();
//! assert_eq!(expr.to_string(), "(7 / 2)");
//! assert_eq!(evaluate(&expr, &EvalContext::default()).unwrap(), Value::Decimal(3.5));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod context;
pub mod error;
pub mod eval;
pub mod parser;
pub mod value;

// Re-export main types
pub use ast::{BinaryOp, Expr, UnaryOp};
pub use context::EvalContext;
pub use error::{EvalError, LexError, ParseError, Result, SaplingError};
pub use eval::{eval_expr, Evaluate};
pub use parser::{tokenize, Lexer, Parser, Token, TokenKind};
pub use value::Value;

/// Sapling version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse expression text into an AST without evaluating it.
pub fn parse(input: &str) -> Result<Expr> {
    let mut parser = Parser::new(input)?;
    parser.parse().map_err(SaplingError::from)
}

/// Evaluate a parsed expression.
pub fn evaluate(expr: &Expr, ctx: &EvalContext) -> std::result::Result<Value, EvalError> {
    expr.eval(ctx)
}

/// Parse and evaluate expression text with a default context.
pub fn eval_str(input: &str) -> Result<Value> {
    eval_str_with(input, &EvalContext::default())
}

/// Parse and evaluate expression text with the given context.
pub fn eval_str_with(input: &str, ctx: &EvalContext) -> Result<Value> {
    let expr = parse(input)?;
    evaluate(&expr, ctx).map_err(SaplingError::from)
}
