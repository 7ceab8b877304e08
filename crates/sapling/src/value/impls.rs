//! Value trait implementations: predicates, extractors, From traits

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Type Predicates
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Check if value is an integer
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Check if value is a decimal
    pub fn is_decimal(&self) -> bool {
        matches!(self, Value::Decimal(_))
    }

    /// Check if value is the additive identity, in either representation.
    ///
    /// `-0.0` counts as zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Integer(n) => *n == 0,
            Value::Decimal(n) => *n == 0.0,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors
    // ═══════════════════════════════════════════════════════════════════

    /// Get the integer, if this is one
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Decimal(_) => None,
        }
    }

    /// Get the value as a float, widening integers
    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Integer(n) => *n as f64,
            Value::Decimal(n) => *n,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Decimal(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(Value::Integer(1).is_integer());
        assert!(Value::Decimal(1.0).is_decimal());
        assert!(Value::Integer(0).is_zero());
        assert!(Value::Decimal(-0.0).is_zero());
        assert!(!Value::Decimal(1e-300).is_zero());
    }

    #[test]
    fn test_extractors() {
        assert_eq!(Value::Integer(7).as_i64(), Some(7));
        assert_eq!(Value::Decimal(7.0).as_i64(), None);
        assert_eq!(Value::Integer(7).as_f64(), 7.0);
    }

    #[test]
    fn test_from() {
        assert_eq!(Value::from(3i64), Value::Integer(3));
        assert_eq!(Value::from(3i32), Value::Integer(3));
        assert_eq!(Value::from(0.5), Value::Decimal(0.5));
    }
}
