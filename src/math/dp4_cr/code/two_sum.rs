//! Hardware implementation: binary64 accumulation rounded to odd via TwoSum.

use crate::float::add_round_to_odd;

/// Correctly-rounded 4D dot product of two binary32 vectors.
///
/// Products are exact in binary64 (24 + 24 significant bits fit in 53). They
/// are summed in ascending order, each partial sum rounded to odd at 53 bits,
/// and the final accumulator is rounded to nearest binary32 once.
///
/// Overflow, underflow and cancellation follow IEEE-754; NaN or infinite
/// operands give an unspecified result.
///
/// # Example
/// ```
/// use cr_dot4::dp4_cr;
///
/// let a = [1.0, 2.0, 3.0, 4.0];
/// let b = [1.0, 1.0, 1.0, 1.0];
/// assert_eq!(dp4_cr(&a, &b), 10.0);
/// ```
pub fn dp4_cr(a: &[f32; 4], b: &[f32; 4]) -> f32 {
    let mut products = [0.0f64; 4];
    for i in 0..4 {
        products[i] = a[i] as f64 * b[i] as f64;
    }
    products.sort_unstable_by(f64::total_cmp);

    // -0 is the additive identity, so an all-negative-zero sum stays -0.
    let acc = products
        .iter()
        .fold(-0.0f64, |acc, &p| add_round_to_odd(p, acc));
    acc as f32
}
