//! Literal evaluation

use crate::{EvalError, Value};

/// Evaluate a number literal's text to a Value.
///
/// Text without a decimal point that fits `i64` becomes an `Integer`;
/// everything else that parses as a float becomes a `Decimal`.
pub fn eval_number(text: &str) -> Result<Value, EvalError> {
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = text.parse::<i64>() {
            return Ok(Value::Integer(n));
        }
    }

    // The lexer only produces digits and points; anything else reaching here
    // came from a hand-built tree.
    let numeral = text.bytes().any(|b| b.is_ascii_digit())
        && text.bytes().all(|b| b.is_ascii_digit() || b == b'.');
    if !numeral {
        return Err(invalid(text));
    }

    text.parse::<f64>()
        .map(Value::Decimal)
        .map_err(|_| invalid(text))
}

fn invalid(text: &str) -> EvalError {
    EvalError::InvalidLiteral {
        text: text.to_string(),
    }
}
