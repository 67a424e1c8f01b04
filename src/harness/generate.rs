//! Random floating-point operands over controlled exponent ranges.
//!
//! Values are normal numbers `±1.f × 2^e` with `e` drawn uniformly from
//! `[emin, emax]` and the fraction `f` drawn uniformly over every
//! representable significand of the target format.

use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Normal exponent range of binary32.
pub const FP32_EXPONENTS: (i32, i32) = (-126, 127);
/// Normal exponent range of binary64.
pub const FP64_EXPONENTS: (i32, i32) = (-1022, 1023);

/// Seeded generator of binary32/binary64 test operands.
pub struct FpGenerator {
    rng: StdRng,
}

impl FpGenerator {
    /// Deterministic generator: the same seed yields the same sequence.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Random normal binary32 with exponent in `[emin, emax]`.
    pub fn random_fp32_value(&mut self, emin: i32, emax: i32) -> Result<f32> {
        check_range("binary32", emin, emax, FP32_EXPONENTS)?;
        Ok(self.fp32(emin, emax))
    }

    /// Random normal binary64 with exponent in `[emin, emax]`.
    pub fn random_fp64_value(&mut self, emin: i32, emax: i32) -> Result<f64> {
        check_range("binary64", emin, emax, FP64_EXPONENTS)?;
        let negative = self.rng.random_bool(0.5) as u64;
        let exponent = self.rng.random_range(emin..=emax);
        let fraction = self.rng.random_range(0..(1u64 << 52));
        let biased = (exponent + 1023) as u64;
        Ok(f64::from_bits((negative << 63) | (biased << 52) | fraction))
    }

    /// Four binary32 values over the whole normal range.
    pub fn random_vector4(&mut self) -> [f32; 4] {
        let (emin, emax) = FP32_EXPONENTS;
        std::array::from_fn(|_| self.fp32(emin, emax))
    }

    /// Four binary32 values with exponents in `[emin, emax]`.
    pub fn random_vector4_in(&mut self, emin: i32, emax: i32) -> Result<[f32; 4]> {
        check_range("binary32", emin, emax, FP32_EXPONENTS)?;
        Ok(std::array::from_fn(|_| self.fp32(emin, emax)))
    }

    fn fp32(&mut self, emin: i32, emax: i32) -> f32 {
        let negative = self.rng.random_bool(0.5) as u32;
        let exponent = self.rng.random_range(emin..=emax);
        let fraction = self.rng.random_range(0..(1u32 << 23));
        let biased = (exponent + 127) as u32;
        f32::from_bits((negative << 31) | (biased << 23) | fraction)
    }
}

fn check_range(format: &'static str, emin: i32, emax: i32, (min, max): (i32, i32)) -> Result<()> {
    if emin > emax || emin < min || emax > max {
        return Err(Error::InvalidExponentRange {
            format,
            emin,
            emax,
            min,
            max,
        });
    }
    Ok(())
}
