//! Binary operation evaluation

use crate::ast::BinaryOp;
use crate::value::numeric;
use crate::{EvalError, Value};

/// Apply an infix operator to two evaluated operands.
pub fn eval_binary(op: BinaryOp, left: Value, right: Value) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Add => Ok(numeric::add(left, right)),
        BinaryOp::Sub => Ok(numeric::sub(left, right)),
        BinaryOp::Mul => Ok(numeric::mul(left, right)),
        BinaryOp::Div => numeric::div(left, right),
        BinaryOp::Rem => numeric::rem(left, right),
        BinaryOp::Pow => Ok(numeric::pow(left, right)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch() {
        let (a, b) = (Value::Integer(7), Value::Integer(2));
        assert_eq!(eval_binary(BinaryOp::Add, a, b), Ok(Value::Integer(9)));
        assert_eq!(eval_binary(BinaryOp::Sub, a, b), Ok(Value::Integer(5)));
        assert_eq!(eval_binary(BinaryOp::Mul, a, b), Ok(Value::Integer(14)));
        assert_eq!(eval_binary(BinaryOp::Div, a, b), Ok(Value::Decimal(3.5)));
        assert_eq!(eval_binary(BinaryOp::Rem, a, b), Ok(Value::Integer(1)));
        assert_eq!(eval_binary(BinaryOp::Pow, a, b), Ok(Value::Integer(49)));
    }

    #[test]
    fn test_zero_divisor_errors() {
        let zero = Value::Integer(0);
        assert!(matches!(
            eval_binary(BinaryOp::Div, Value::Integer(5), zero),
            Err(EvalError::DivisionByZero { .. })
        ));
        assert!(matches!(
            eval_binary(BinaryOp::Rem, Value::Integer(5), zero),
            Err(EvalError::ModuloByZero { .. })
        ));
    }
}
