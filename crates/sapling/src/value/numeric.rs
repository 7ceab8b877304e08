//! Numeric semantics and the integer/decimal promotion table
//!
//! Every arithmetic operator goes through [`Operands::of`], which decides the
//! working representation once:
//!
//! | left      | right     | working pair |
//! |-----------|-----------|--------------|
//! | `Integer` | `Integer` | `Integers`   |
//! | `Integer` | `Decimal` | `Decimals`   |
//! | `Decimal` | `Integer` | `Decimals`   |
//! | `Decimal` | `Decimal` | `Decimals`   |
//!
//! Results for an `Integers` pair:
//!
//! | op      | result                                                  |
//! |---------|---------------------------------------------------------|
//! | `+ - *` | `Integer`, or `Decimal` when the result overflows `i64` |
//! | `/`     | `Integer` when the division is exact, else `Decimal`    |
//! | `%`     | `Integer`                                               |
//! | `^`     | `Integer` for an exponent `>= 0` that does not overflow |
//! |         | (bases `0`, `1`, `-1` never do), else `Decimal` (`powf`) |
//!
//! A `Decimals` pair always yields `Decimal`. Division and remainder by zero
//! (`0` or `±0.0`) are errors in both representations.
//!
//! `%` is the truncated remainder Rust uses natively for `i64` and `f64`: the
//! result takes the sign of the dividend, so `-7 % 3 == -1` and `7 % -3 == 1`.

use super::Value;
use crate::error::EvalError;

/// Operand pair after promotion to a common representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands {
    /// Both operands are integers
    Integers(i64, i64),
    /// At least one operand is a decimal
    Decimals(f64, f64),
}

impl Operands {
    /// Promote two values to their common representation.
    pub fn of(left: Value, right: Value) -> Self {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Operands::Integers(a, b),
            (left, right) => Operands::Decimals(left.as_f64(), right.as_f64()),
        }
    }
}

/// `left + right`
pub fn add(left: Value, right: Value) -> Value {
    match Operands::of(left, right) {
        Operands::Integers(a, b) => a
            .checked_add(b)
            .map_or_else(|| Value::Decimal(a as f64 + b as f64), Value::Integer),
        Operands::Decimals(a, b) => Value::Decimal(a + b),
    }
}

/// `left - right`
pub fn sub(left: Value, right: Value) -> Value {
    match Operands::of(left, right) {
        Operands::Integers(a, b) => a
            .checked_sub(b)
            .map_or_else(|| Value::Decimal(a as f64 - b as f64), Value::Integer),
        Operands::Decimals(a, b) => Value::Decimal(a - b),
    }
}

/// `left * right`
pub fn mul(left: Value, right: Value) -> Value {
    match Operands::of(left, right) {
        Operands::Integers(a, b) => a
            .checked_mul(b)
            .map_or_else(|| Value::Decimal(a as f64 * b as f64), Value::Integer),
        Operands::Decimals(a, b) => Value::Decimal(a * b),
    }
}

/// `left / right`
pub fn div(left: Value, right: Value) -> Result<Value, EvalError> {
    if right.is_zero() {
        return Err(EvalError::DivisionByZero { left, right });
    }

    Ok(match Operands::of(left, right) {
        Operands::Integers(a, b) => match (a.checked_rem(b), a.checked_div(b)) {
            (Some(0), Some(quotient)) => Value::Integer(quotient),
            _ => Value::Decimal(a as f64 / b as f64),
        },
        Operands::Decimals(a, b) => Value::Decimal(a / b),
    })
}

/// `left % right`, truncated (sign of the dividend)
pub fn rem(left: Value, right: Value) -> Result<Value, EvalError> {
    if right.is_zero() {
        return Err(EvalError::ModuloByZero { left, right });
    }

    Ok(match Operands::of(left, right) {
        // Only i64::MIN % -1 wraps, and its true remainder is 0
        Operands::Integers(a, b) => Value::Integer(a.wrapping_rem(b)),
        Operands::Decimals(a, b) => Value::Decimal(a % b),
    })
}

/// `left ^ right`
pub fn pow(left: Value, right: Value) -> Value {
    match Operands::of(left, right) {
        Operands::Integers(base, exp) => exact_pow(base, exp).map_or_else(
            || Value::Decimal((base as f64).powf(exp as f64)),
            Value::Integer,
        ),
        Operands::Decimals(base, exp) => Value::Decimal(base.powf(exp)),
    }
}

/// Integer power for a non-negative exponent, `None` when it does not fit.
fn exact_pow(base: i64, exp: i64) -> Option<i64> {
    if exp < 0 {
        return None;
    }
    // These bases stay in range for any exponent, even one past u32::MAX
    match base {
        0 => Some(if exp == 0 { 1 } else { 0 }),
        1 => Some(1),
        -1 => Some(if exp % 2 == 0 { 1 } else { -1 }),
        _ => u32::try_from(exp).ok().and_then(|exp| base.checked_pow(exp)),
    }
}

/// `-operand`
pub fn neg(operand: Value) -> Value {
    match operand {
        Value::Integer(n) => n
            .checked_neg()
            .map_or_else(|| Value::Decimal(-(n as f64)), Value::Integer),
        Value::Decimal(n) => Value::Decimal(-n),
    }
}
