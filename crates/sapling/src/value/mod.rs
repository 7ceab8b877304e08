//! Value representation for evaluation results

mod display;
mod impls;
pub mod numeric;

pub use numeric::Operands;

use serde::{Deserialize, Serialize};

/// Runtime value produced by evaluation.
///
/// Integers stay integers while results are exact; anything else is carried
/// as a 64-bit float. See [`numeric`] for the promotion rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// 64-bit signed integer
    Integer(i64),

    /// 64-bit floating point
    Decimal(f64),
}
