//! Exact reference: the sum is formed without error and rounded to odd.

use crate::float::{round_to_odd, ExactValue, Precision};

/// `x + y` rounded to odd in binary64, computed on exact values.
///
/// Infinite and NaN operands propagate as in a hardware addition.
pub fn add_ro_original(x: f64, y: f64) -> f64 {
    match (ExactValue::from_f64(x), ExactValue::from_f64(y)) {
        (Ok(a), Ok(b)) => round_to_odd(&(&a + &b), Precision::BINARY64).to_f64(),
        _ => x + y,
    }
}
