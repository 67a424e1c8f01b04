//! Error-free binary64 addition and addition rounded to odd.
//!
//! `two_sum` follows Algorithm 4.4 of the Handbook of Floating-Point
//! Arithmetic (2nd ed., Section 4.3.2): `s = RN(a + b)` and `t` is the exact
//! rounding error, so `a + b == s + t` holds exactly barring overflow.

/// Returns `(s, t)` with `s = RN(a + b)` and `s + t = a + b` exactly.
#[inline(always)]
pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let ap = s - b;
    let bp = s - ap;
    let delta_a = a - ap;
    let delta_b = b - bp;
    (s, delta_a + delta_b)
}

/// `x + y` rounded to odd at 53 bits.
///
/// When the hardware sum `s` is inexact and has an even trailing bit, the odd
/// neighbour on the side of the exact sum is selected by stepping the bit
/// pattern: one step toward zero when the error has the opposite sign,
/// setting the LSB (one step away from zero) otherwise. Infinite or NaN
/// results are returned unchanged.
#[inline(always)]
pub fn add_round_to_odd(x: f64, y: f64) -> f64 {
    let (s, t) = two_sum(x, y);
    if t == 0.0 || !s.is_finite() {
        return s;
    }
    let bits = s.to_bits();
    if bits & 1 == 1 {
        return s;
    }
    if t.is_sign_negative() != s.is_sign_negative() {
        f64::from_bits(bits - 1)
    } else {
        f64::from_bits(bits | 1)
    }
}
