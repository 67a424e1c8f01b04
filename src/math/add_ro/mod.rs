//! # Binary64 addition rounded to odd
//!
//! `add_ro(x, y)` is `x + y` rounded to the binary64 neighbour with an odd
//! significand whenever the sum is inexact. It is the accumulation step of
//! [`dp4_cr`](crate::math::dp4_cr), and the operation the literal test tables
//! of the table generator describe.
//!
//! Hardware variants obtain the exact rounding error of `RN(x + y)` with an
//! error-free transformation and step the result by one unit in the last place
//! when it is even.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::error::Result;
use crate::registry::{AlgorithmRunner, VariantClosure};

pub struct AddRoRunner;

impl AlgorithmRunner for AddRoRunner {
    fn name(&self) -> &'static str {
        "add_ro"
    }

    fn description(&self) -> &'static str {
        "Binary64 addition with round-to-odd"
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
