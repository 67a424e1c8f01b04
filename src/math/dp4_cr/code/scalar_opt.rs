//! Optimized scalar implementation: sorting network and unrolled fold.
//!
//! The five compare-exchange steps of the optimal 4-input network replace the
//! generic sort, and the accumulation is written out so the first addition
//! (onto an exact zero) disappears.

use crate::float::add_round_to_odd;

#[inline(always)]
fn compare_exchange(v: &mut [f64; 4], i: usize, j: usize) {
    if v[j] < v[i] {
        v.swap(i, j);
    }
}

pub fn dp4_cr_scalar_opt(a: &[f32; 4], b: &[f32; 4]) -> f32 {
    let mut p = [
        a[0] as f64 * b[0] as f64,
        a[1] as f64 * b[1] as f64,
        a[2] as f64 * b[2] as f64,
        a[3] as f64 * b[3] as f64,
    ];

    compare_exchange(&mut p, 0, 1);
    compare_exchange(&mut p, 2, 3);
    compare_exchange(&mut p, 0, 2);
    compare_exchange(&mut p, 1, 3);
    compare_exchange(&mut p, 1, 2);

    let acc = add_round_to_odd(p[1], p[0]);
    let acc = add_round_to_odd(p[2], acc);
    let acc = add_round_to_odd(p[3], acc);
    acc as f32
}
