//! # Correctly-rounded 4D dot product
//!
//! `dp4_cr(a, b)` returns `Σ a[i] * b[i]` over binary32 vectors, rounded once
//! to nearest binary32, without computing the sum in arbitrary precision:
//!
//! 1. The four products are exact in binary64 (24 + 24 bits fit in 53).
//! 2. They are sorted in ascending order.
//! 3. They are accumulated in binary64 with every addition rounded to odd.
//! 4. The accumulator is rounded to nearest binary32.
//!
//! Rounding to odd at 53 bits keeps a sticky bit far below the 24-bit result,
//! so the final rounding to nearest sees the same side of every binary32
//! midpoint as the exact sum does. This holds while every partial sum stays
//! within a factor 2^28 of the final magnitude: when the two largest products cancel
//! almost completely (e.g. `MAX² - MAX² + 1`), the sticky bit of an earlier
//! step can dominate the result.
//!
//! ## Variants
//!
//! - **original**: exact arithmetic, round-to-odd derived from round-up and
//!   round-down
//! - **two_sum**: hardware binary64, TwoSum-based round-to-odd addition
//! - **scalar_opt**: sorting network, accumulation unrolled
//! - **c-two_sum**: the same kernel in C (when a C compiler is available)

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::error::Result;
use crate::registry::{AlgorithmRunner, VariantClosure};

pub struct Dp4CrRunner;

impl AlgorithmRunner for Dp4CrRunner {
    fn name(&self) -> &'static str {
        "dp4_cr"
    }

    fn description(&self) -> &'static str {
        "Correctly-rounded binary32 4D dot product via round-to-odd binary64 accumulation"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<VariantClosure<'a>> {
        bench::variant_closures(size, seed)
    }

    fn verify(&self) -> Result<()> {
        test::verify_all()
    }
}
