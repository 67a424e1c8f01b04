//! Benchmark closures for the round-to-odd adders.

use super::code::available_variants;
use crate::error::Result;
use crate::harness::FpGenerator;
use crate::measure;
use crate::registry::VariantClosure;
use std::sync::Arc;
use tracing::warn;

/// Alternating wide-range and close-range operand pairs.
pub fn inputs(size: usize, seed: u64) -> Result<Vec<(f64, f64)>> {
    let mut gen = FpGenerator::new(seed);
    (0..size)
        .map(|i| {
            let (emin, emax) = if i % 2 == 0 { (-1022, 1022) } else { (-2, 2) };
            Ok((
                gen.random_fp64_value(emin, emax)?,
                gen.random_fp64_value(emin, emax)?,
            ))
        })
        .collect()
}

pub fn variant_closures(size: usize, seed: u64) -> Vec<VariantClosure<'static>> {
    let data = match inputs(size, seed) {
        Ok(data) => Arc::new(data),
        Err(e) => {
            warn!(error = %e, "cannot generate add_ro benchmark inputs");
            return Vec::new();
        }
    };

    available_variants()
        .into_iter()
        .map(|v| {
            let data = Arc::clone(&data);
            let func = v.function;
            VariantClosure {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let (elapsed, checksum) = measure!(data
                        .iter()
                        .fold(0u64, |acc, &(x, y)| acc ^ func(x, y).to_bits()));
                    // Low 52 bits only, so the value converts to f64 exactly.
                    (elapsed, Some((checksum & ((1 << 52) - 1)) as f64))
                }),
            }
        })
        .collect()
}
