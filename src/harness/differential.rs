//! Brute-force differential check of every dp4 variant against the oracle.

use super::generate::{FpGenerator, FP32_EXPONENTS};
use super::oracle::correctly_rounded_dp4;
use crate::error::{Error, Result};
use crate::math::dp4_cr::code::available_variants;
use tracing::{debug, info, warn};

/// Parameters of a differential run.
#[derive(Clone, Debug)]
pub struct DifferentialConfig {
    /// Number of random vector pairs.
    pub count: usize,
    pub seed: u64,
    /// Exponent range of the generated binary32 elements.
    pub emin: i32,
    pub emax: i32,
}

impl Default for DifferentialConfig {
    fn default() -> Self {
        Self {
            count: 100,
            seed: 0x5eed_cafe,
            emin: FP32_EXPONENTS.0,
            emax: FP32_EXPONENTS.1,
        }
    }
}

/// Outcome of a successful run.
#[derive(Clone, Debug)]
pub struct DifferentialSummary {
    pub cases: usize,
    pub variants: Vec<&'static str>,
}

/// Compares each variant bit-for-bit with the correctly rounded result.
///
/// Stops at the first disagreement and returns it as `Error::Mismatch`.
pub fn run_differential(config: &DifferentialConfig) -> Result<DifferentialSummary> {
    let variants = available_variants();
    let mut gen = FpGenerator::new(config.seed);
    info!(
        count = config.count,
        seed = config.seed,
        emin = config.emin,
        emax = config.emax,
        variants = variants.len(),
        "starting differential run"
    );

    for case in 0..config.count {
        let a = gen.random_vector4_in(config.emin, config.emax)?;
        let b = gen.random_vector4_in(config.emin, config.emax)?;
        let expected = correctly_rounded_dp4(&a, &b)?;

        for variant in &variants {
            let got = (variant.function)(&a, &b);
            if got.to_bits() != expected.to_bits() {
                warn!(case, variant = variant.name, "mismatch against oracle");
                return Err(Error::Mismatch {
                    variant: variant.name,
                    a,
                    b,
                    expected,
                    got,
                });
            }
        }

        if (case + 1) % 1000 == 0 {
            debug!(checked = case + 1, "differential progress");
        }
    }

    info!(cases = config.count, "differential run passed");
    Ok(DifferentialSummary {
        cases: config.count,
        variants: variants.iter().map(|v| v.name).collect(),
    })
}
