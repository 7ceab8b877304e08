//! Display implementation for Value

use std::fmt;

use super::*;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            // Keep a point on integral decimals so `4.0` never reads as `4`
            Value::Decimal(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e16 => {
                write!(f, "{:.1}", n)
            }
            Value::Decimal(n) => write!(f, "{}", n),
        }
    }
}
