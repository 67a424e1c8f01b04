//! Benchmark closures for the dot product variants.

use super::code::available_variants;
use crate::harness::FpGenerator;
use crate::measure;
use crate::registry::VariantClosure;
use std::sync::Arc;

/// `size` random vector pairs over the full binary32 normal range.
pub fn inputs(size: usize, seed: u64) -> Vec<([f32; 4], [f32; 4])> {
    let mut gen = FpGenerator::new(seed);
    (0..size)
        .map(|_| (gen.random_vector4(), gen.random_vector4()))
        .collect()
}

/// One closure per variant; each call evaluates every pair once.
///
/// The reported value is an XOR checksum of the result bit patterns, so
/// variants that agree bit-for-bit report the same value.
pub fn variant_closures(size: usize, seed: u64) -> Vec<VariantClosure<'static>> {
    let data = Arc::new(inputs(size, seed));

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
                        .fold(0u32, |acc, (a, b)| acc ^ func(a, b).to_bits()));
                    (elapsed, Some(checksum as f64))
                }),
            }
        })
        .collect()
}
