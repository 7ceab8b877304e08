//! Evaluation context configuration

/// Configuration and state for evaluation.
///
/// This is passed through all evaluation calls. It carries no bindings today;
/// every field has a working default, so `EvalContext::default()` is the usual
/// way to get one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalContext {
    /// Maximum nesting depth evaluated before giving up. Left operands share
    /// their parent's depth, so flat chains like `1+2+3` stay shallow.
    pub max_depth: usize,

    /// Whether to emit a trace event per evaluated node (for debugging)
    pub trace: bool,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_depth: 1000,
            trace: false,
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Enable or disable per-node tracing.
    pub fn traced(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ctx = EvalContext::new();
        assert_eq!(ctx.max_depth, 1000);
        assert!(!ctx.trace);
    }

    #[test]
    fn test_builders() {
        let ctx = EvalContext::with_max_depth(8).traced(true);
        assert_eq!(ctx.max_depth, 8);
        assert!(ctx.trace);
    }
}
