//! Unary operation evaluation

use crate::ast::UnaryOp;
use crate::value::numeric;
use crate::Value;

/// Apply a prefix sign to an evaluated operand.
pub fn eval_unary(op: UnaryOp, operand: Value) -> Value {
    match op {
        UnaryOp::Pos => operand,
        UnaryOp::Neg => numeric::neg(operand),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_is_identity() {
        assert_eq!(eval_unary(UnaryOp::Pos, Value::Integer(-4)), Value::Integer(-4));
        assert_eq!(eval_unary(UnaryOp::Pos, Value::Decimal(0.5)), Value::Decimal(0.5));
    }

    #[test]
    fn test_neg_integer() {
        assert_eq!(eval_unary(UnaryOp::Neg, Value::Integer(42)), Value::Integer(-42));
    }

    #[test]
    fn test_neg_decimal() {
        assert_eq!(eval_unary(UnaryOp::Neg, Value::Decimal(2.75)), Value::Decimal(-2.75));
    }
}
