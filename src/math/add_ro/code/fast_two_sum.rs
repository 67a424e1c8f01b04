//! Round-to-odd addition built on Fast2Sum.
//!
//! Fast2Sum (Handbook of Floating-Point Arithmetic, Algorithm 4.3) needs three
//! operations instead of six but requires `|a| >= |b|`, so the operands are
//! ordered by magnitude first.

#[inline(always)]
fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let z = s - a;
    (s, b - z)
}

pub fn add_ro_fast_two_sum(x: f64, y: f64) -> f64 {
    let (a, b) = if x.abs() >= y.abs() { (x, y) } else { (y, x) };
    let (s, t) = fast_two_sum(a, b);
    if t == 0.0 || !s.is_finite() {
        return s;
    }
    let bits = s.to_bits();
    if bits & 1 == 1 {
        s
    } else if t.is_sign_negative() != s.is_sign_negative() {
        f64::from_bits(bits - 1)
    } else {
        f64::from_bits(bits | 1)
    }
}
