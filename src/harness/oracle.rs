//! Arbitrary-precision reference for the 4D dot product.

use crate::error::Result;
use crate::float::{ExactValue, Precision, RoundingMode};

/// Exact `Σ a[i] * b[i]`, summed in index order without any rounding.
///
/// The sum starts from -0 so that the sign of a zero result follows IEEE-754
/// (a sum of negative zeros is -0, any other zero sum is +0).
pub fn exact_dp4(a: &[f32; 4], b: &[f32; 4]) -> Result<ExactValue> {
    let mut acc = ExactValue::zero(true);
    for (&x, &y) in a.iter().zip(b) {
        let product = &ExactValue::from_f32(x)? * &ExactValue::from_f32(y)?;
        acc = &product + &acc;
    }
    Ok(acc)
}

/// The exact dot product rounded once to nearest binary32.
pub fn correctly_rounded_dp4(a: &[f32; 4], b: &[f32; 4]) -> Result<f32> {
    Ok(exact_dp4(a, b)?
        .round(Precision::BINARY32, RoundingMode::Nearest)
        .to_f32())
}
