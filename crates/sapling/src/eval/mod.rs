//! Expression evaluation

pub mod binary;
pub mod literal;
pub mod unary;

use tracing::trace;

use crate::ast::{BinaryOp, UnaryOp};
use crate::{EvalContext, EvalError, Expr, Value};

/// Trait for evaluating AST nodes to values.
///
/// This is the core abstraction for the tree-walking evaluator. Evaluation
/// never mutates the node, so the same tree can be evaluated any number of
/// times.
pub trait Evaluate {
    /// Evaluate this AST node in the given context.
    fn eval(&self, ctx: &EvalContext) -> Result<Value, EvalError>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Expr {
    fn eval(&self, ctx: &EvalContext) -> Result<Value, EvalError> {
        eval_iterative(self, ctx)
    }
}

/// Pending work for the evaluation stack.
enum Frame<'a> {
    /// Evaluate a node at the given nesting depth
    Visit(&'a Expr, usize),
    /// Pop one value and apply the operator
    Unary(UnaryOp, usize),
    /// Pop two values (right on top) and apply the operator
    Binary(BinaryOp, usize),
}

/// Post-order walk on an explicit stack.
///
/// Depth counts real nesting only. A left operand shares its parent's depth,
/// so the left-deep spines the parser folds out of `1+2+...+n` stay at depth
/// 1 however long they are; right operands and unary operands sit one level
/// deeper than their parent.
fn eval_iterative(root: &Expr, ctx: &EvalContext) -> Result<Value, EvalError> {
    let mut frames = vec![Frame::Visit(root, 1)];
    let mut values: Vec<Value> = Vec::new();

    while let Some(frame) = frames.pop() {
        match frame {
            Frame::Visit(expr, depth) => {
                if depth > ctx.max_depth {
                    return Err(EvalError::DepthExceeded {
                        limit: ctx.max_depth,
                    });
                }
                match expr {
                    Expr::Number { text } => {
                        let value = literal::eval_number(text)?;
                        if ctx.trace {
                            trace!(literal = %text, %value, depth, "evaluated");
                        }
                        values.push(value);
                    }
                    Expr::Unary { op, operand } => {
                        frames.push(Frame::Unary(*op, depth));
                        frames.push(Frame::Visit(operand, depth + 1));
                    }
                    Expr::Binary { op, left, right } => {
                        // Left completes before right starts; no short-circuiting
                        frames.push(Frame::Binary(*op, depth));
                        frames.push(Frame::Visit(right, depth + 1));
                        frames.push(Frame::Visit(left, depth));
                    }
                }
            }
            Frame::Unary(op, depth) => {
                let operand = pop_value(&mut values);
                let value = unary::eval_unary(op, operand);
                if ctx.trace {
                    trace!(op = %op, %value, depth, "evaluated");
                }
                values.push(value);
            }
            Frame::Binary(op, depth) => {
                let right = pop_value(&mut values);
                let left = pop_value(&mut values);
                let value = binary::eval_binary(op, left, right)?;
                if ctx.trace {
                    trace!(op = %op, %value, depth, "evaluated");
                }
                values.push(value);
            }
        }
    }

    Ok(pop_value(&mut values))
}

fn pop_value(values: &mut Vec<Value>) -> Value {
    debug_assert!(!values.is_empty(), "operator frame without an operand");
    values.pop().unwrap_or(Value::Integer(0))
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate an expression (convenience wrapper).
pub fn eval_expr(expr: &Expr, ctx: &EvalContext) -> Result<Value, EvalError> {
    expr.eval(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_tree() {
        let expr = Expr::binary(
            BinaryOp::Mul,
            Expr::unary(UnaryOp::Neg, Expr::number("3")),
            Expr::number("2.5"),
        );
        assert_eq!(eval_expr(&expr, &EvalContext::default()), Ok(Value::Decimal(-7.5)));
    }

    #[test]
    fn test_depth_limit() {
        let expr = Expr::unary(
            UnaryOp::Neg,
            Expr::unary(UnaryOp::Neg, Expr::number("1")),
        );
        assert_eq!(expr.eval(&EvalContext::with_max_depth(3)), Ok(Value::Integer(1)));
        assert_eq!(
            expr.eval(&EvalContext::with_max_depth(2)),
            Err(EvalError::DepthExceeded { limit: 2 })
        );
    }

    #[test]
    fn test_left_spine_does_not_count_toward_depth() {
        let chain = (1..50).fold(Expr::number("1"), |acc, _| {
            Expr::binary(BinaryOp::Add, acc, Expr::number("1"))
        });
        assert_eq!(chain.eval(&EvalContext::with_max_depth(2)), Ok(Value::Integer(50)));

        // 1 + (1 + 1): the grouped right operand's own right operand is at depth 3
        let grouped = Expr::binary(
            BinaryOp::Add,
            Expr::number("1"),
            Expr::binary(BinaryOp::Add, Expr::number("1"), Expr::number("1")),
        );
        assert_eq!(grouped.eval(&EvalContext::with_max_depth(3)), Ok(Value::Integer(3)));
        assert_eq!(
            grouped.eval(&EvalContext::with_max_depth(2)),
            Err(EvalError::DepthExceeded { limit: 2 })
        );
    }

    #[test]
    fn test_tall_left_spine_evaluates_without_overflow() {
        let chain = (1..100_000).fold(Expr::number("2"), |acc, _| {
            Expr::binary(BinaryOp::Sub, acc, Expr::number("1"))
        });
        assert_eq!(chain.eval(&EvalContext::default()), Ok(Value::Integer(2 - 99_999)));
    }

    #[test]
    fn test_trace_does_not_change_result() {
        let expr = Expr::binary(BinaryOp::Add, Expr::number("1"), Expr::number("2"));
        let ctx = EvalContext::default().traced(true);
        assert_eq!(expr.eval(&ctx), Ok(Value::Integer(3)));
    }

    #[test]
    fn test_error_in_left_operand_wins() {
        let expr = Expr::binary(
            BinaryOp::Add,
            Expr::binary(BinaryOp::Div, Expr::number("1"), Expr::number("0")),
            Expr::binary(BinaryOp::Rem, Expr::number("1"), Expr::number("0")),
        );
        assert!(matches!(
            expr.eval(&EvalContext::default()),
            Err(EvalError::DivisionByZero { .. })
        ));
    }
}
