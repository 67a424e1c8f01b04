//! Original (reference) implementation of the correctly-rounded dot product.
//!
//! Every step is carried out on exact values: the products, the sums before
//! each round-to-odd, and the final round-to-nearest. This is the baseline the
//! hardware variants are verified against.

use crate::error::Result;
use crate::float::{round_to_odd, ExactValue, Precision, RoundingMode};

/// Correctly-rounded `Σ a[i] * b[i]` computed on exact values.
///
/// # Errors
/// Returns `Error::NonFinite` if any element is NaN or infinite.
///
/// # Example
/// ```
/// use cr_dot4::math::dp4_cr::dp4_cr_exact;
///
/// let a = [1.0, 2.0, 3.0, 4.0];
/// let b = [1.0, 1.0, 1.0, 1.0];
/// assert_eq!(dp4_cr_exact(&a, &b).unwrap(), 10.0);
/// ```
pub fn dp4_cr_exact(a: &[f32; 4], b: &[f32; 4]) -> Result<f32> {
    let mut products = Vec::with_capacity(4);
    for (&x, &y) in a.iter().zip(b) {
        products.push(&ExactValue::from_f32(x)? * &ExactValue::from_f32(y)?);
    }
    products.sort();

    let acc = products.iter().fold(ExactValue::zero(true), |acc, p| {
        round_to_odd(&(p + &acc), Precision::ACCUMULATOR)
    });
    Ok(acc.round(Precision::BINARY32, RoundingMode::Nearest).to_f32())
}

/// Variant entry point: NaN when an operand is not finite.
pub fn dp4_cr_original(a: &[f32; 4], b: &[f32; 4]) -> f32 {
    dp4_cr_exact(a, b).unwrap_or(f32::NAN)
}
