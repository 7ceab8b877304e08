//! Abstract syntax tree for arithmetic expressions
//!
//! The tree is a closed sum type. Nodes are built bottom-up by the parser and
//! never mutated afterwards; binary nodes own exactly two children and unary
//! nodes exactly one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix sign operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnaryOp {
    /// `+x`
    Pos,
    /// `-x`
    Neg,
}

/// Infix arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
    /// `a % b`
    Rem,
    /// `a ^ b`
    Pow,
}

impl UnaryOp {
    /// Source symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Pos => "+",
            UnaryOp::Neg => "-",
        }
    }
}

impl BinaryOp {
    /// Source symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Pow => "^",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum Expr {
    /// Number literal, kept as its source text until evaluation
    Number {
        /// Literal text as scanned
        text: String,
    },

    /// Prefix sign applied to one operand
    Unary {
        /// Operator
        op: UnaryOp,
        /// Operand
        operand: Box<Expr>,
    },

    /// Infix operator applied to two operands
    Binary {
        /// Operator
        op: BinaryOp,
        /// Left operand
        left: Box<Expr>,
        /// Right operand
        right: Box<Expr>,
    },
}

impl Expr {
    /// Create a number literal node.
    pub fn number(text: impl Into<String>) -> Self {
        Expr::Number { text: text.into() }
    }

    /// Create a unary node.
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Create a binary node.
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Height of the tree; a literal has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((expr, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            match expr {
                Expr::Number { .. } => {}
                Expr::Unary { operand, .. } => stack.push((operand, depth + 1)),
                Expr::Binary { left, right, .. } => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
            }
        }
        deepest
    }
}

/// Move the non-leaf children of `expr` onto `stack`, leaving empty literals
/// behind.
fn detach_children(expr: &mut Expr, stack: &mut Vec<Expr>) {
    let mut detach = |child: &mut Box<Expr>| {
        if !matches!(**child, Expr::Number { .. }) {
            stack.push(std::mem::replace(&mut **child, Expr::number(String::new())));
        }
    };
    match expr {
        Expr::Number { .. } => {}
        Expr::Unary { operand, .. } => detach(operand),
        Expr::Binary { left, right, .. } => {
            detach(left);
            detach(right);
        }
    }
}

// Loop-folded chains such as `1+1+...+1` build trees as tall as the input is
// long; dropping them recursively would exhaust the native stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        detach_children(self, &mut stack);
        while let Some(mut expr) = stack.pop() {
            detach_children(&mut expr, &mut stack);
        }
    }
}

enum Piece<'a> {
    Node(&'a Expr),
    Text(&'static str),
}

/// Renders the tree fully parenthesized, so grouping is explicit:
/// `1-2-3` displays as `((1 - 2) - 3)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Piece::Node(self)];
        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Node(Expr::Number { text }) => f.write_str(text)?,
                Piece::Node(Expr::Unary { op, operand }) => {
                    f.write_str("(")?;
                    f.write_str(op.symbol())?;
                    stack.push(Piece::Text(")"));
                    stack.push(Piece::Node(operand));
                }
                Piece::Node(Expr::Binary { op, left, right }) => {
                    f.write_str("(")?;
                    stack.push(Piece::Text(")"));
                    stack.push(Piece::Node(right));
                    stack.push(Piece::Text(" "));
                    stack.push(Piece::Text(op.symbol()));
                    stack.push(Piece::Text(" "));
                    stack.push(Piece::Node(left));
                }
            }
        }
        Ok(())
    }
}
