//! Verification and tests for the dot product variants.

use super::code::available_variants;
use crate::error::{vec4, Error, Result};
use crate::harness::FpGenerator;
use tracing::debug;

const VERIFY_SEED: u64 = 0xd0c4_0001;
const VERIFY_RANDOM_CASES: usize = 1000;

/// Hand-picked inputs: zeros, cancellation, ties, overflow, gradual underflow.
pub fn boundary_cases() -> Vec<([f32; 4], [f32; 4])> {
    let ones = [1.0f32; 4];
    vec![
        ([1.0, 2.0, 3.0, 4.0], ones),
        ([0.0; 4], [0.0; 4]),
        ([-0.0; 4], ones),
        ([1.0, -1.0, 3.0, -3.0], ones),
        ([1.0, 2f32.powi(-24), 2f32.powi(-60), 0.0], [1.0, 1.0, 1.0, 0.0]),
        ([2f32.powi(100), 1.0, -1.0, 2f32.powi(-100)], ones),
        ([f32::MAX, f32::MAX, 0.0, 0.0], [1.0, 1.0, 0.0, 0.0]),
        ([-f32::MAX, -f32::MAX, 1.0, 1.0], [2.0, 2.0, 1.0, 1.0]),
        ([2f32.powi(-75), 2f32.powi(-100), 0.0, 0.0], [2f32.powi(-75), 2f32.powi(-100), 0.0, 0.0]),
        ([f32::MIN_POSITIVE, -f32::MIN_POSITIVE, f32::from_bits(1), 0.0], [0.5, 0.25, 1.0, 0.0]),
        ([f32::MAX, -f32::MAX, 1.0, 2f32.powi(-126)], [f32::MAX, f32::MAX, 1.0, 1.0]),
    ]
}

/// Verifies every variant against `original` on boundary and random inputs.
pub fn verify_all() -> Result<()> {
    let variants = available_variants();
    let original = variants
        .iter()
        .find(|v| v.name == "original")
        .ok_or(Error::MissingReference("dp4_cr"))?;

    let mut gen = FpGenerator::new(VERIFY_SEED);
    let mut cases = boundary_cases();
    for _ in 0..VERIFY_RANDOM_CASES {
        cases.push((gen.random_vector4(), gen.random_vector4()));
        cases.push((gen.random_vector4_in(-2, 2)?, gen.random_vector4_in(-2, 2)?));
    }

    for (a, b) in &cases {
        let expected = (original.function)(a, b);
        for variant in variants.iter().filter(|v| v.name != "original") {
            let got = (variant.function)(a, b);
            if got.to_bits() != expected.to_bits() {
                return Err(Error::VariantMismatch {
                    algorithm: "dp4_cr",
                    variant: variant.name,
                    inputs: format!("a = {}, b = {}", vec4(a), vec4(b)),
                    expected: expected as f64,
                    got: got as f64,
                });
            }
        }
    }
    debug!(cases = cases.len(), variants = variants.len(), "dp4_cr verified");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::correctly_rounded_dp4;
    use crate::math::dp4_cr::code::*;
    use proptest::prelude::*;

    fn assert_all_variants(a: [f32; 4], b: [f32; 4], expected_bits: u32) {
        for variant in available_variants() {
            let got = (variant.function)(&a, &b);
            assert_eq!(
                got.to_bits(),
                expected_bits,
                "variant {} on {} . {}: got {}",
                variant.name,
                vec4(&a),
                vec4(&b),
                got
            );
        }
    }

    #[test]
    fn test_verify_all() {
        verify_all().unwrap();
    }

    #[test]
    fn test_integer_dot_product() {
        assert_all_variants([1.0, 2.0, 3.0, 4.0], [1.0; 4], 10.0f32.to_bits());
        assert_all_variants([1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0], 70.0f32.to_bits());
    }

    #[test]
    fn test_all_zero_is_positive_zero() {
        assert_all_variants([0.0; 4], [0.0; 4], 0);
        assert_all_variants([1.0, -2.0, 0.0, 5.0], [0.0; 4], 0);
    }

    #[test]
    fn test_negative_zero_products_stay_negative() {
        assert_all_variants([-0.0; 4], [1.0; 4], (-0.0f32).to_bits());
        assert_all_variants([-1.0, -2.0, 3.0, 4.0], [0.0, 0.0, -0.0, -0.0], (-0.0f32).to_bits());
    }

    #[test]
    fn test_exact_cancellation_is_positive_zero() {
        assert_all_variants([1.0, -1.0, 3.0, -3.0], [1.0; 4], 0);
        assert_all_variants([-1.5, 1.5, -2.0, 2.0], [4.0, 4.0, 8.0, 8.0], 0);
    }

    #[test]
    fn test_no_double_rounding() {
        // 1 + 2^-24 + 2^-60: a binary64 round-to-nearest sum lands on the
        // binary32 midpoint 1 + 2^-24 and would then round down to 1.
        let a = [1.0, 2f32.powi(-24), 2f32.powi(-60), 0.0];
        let b = [1.0, 1.0, 1.0, 0.0];
        let naive = (a[0] as f64 + a[1] as f64 + a[2] as f64) as f32;
        assert_eq!(naive, 1.0);
        assert_all_variants(a, b, (1.0f32 + f32::EPSILON).to_bits());
    }

    #[test]
    fn test_exact_tie_rounds_to_even() {
        let a = [1.0, 2f32.powi(-24), 0.0, 0.0];
        assert_all_variants(a, [1.0, 1.0, 0.0, 0.0], 1.0f32.to_bits());
        let a = [1.0 + f32::EPSILON, 2f32.powi(-24), 0.0, 0.0];
        assert_all_variants(a, [1.0, 1.0, 0.0, 0.0], (1.0 + 2.0 * f32::EPSILON).to_bits());
    }

    #[test]
    fn test_dominant_term() {
        let a = [2f32.powi(100), 1.0, -1.0, 2f32.powi(-100)];
        assert_all_variants(a, [1.0; 4], 2f32.powi(100).to_bits());
        let a = [-3.0, 2f32.powi(-40), -(2f32.powi(-41)), 2f32.powi(-90)];
        assert_all_variants(a, [1.0; 4], (-3.0f32).to_bits());
    }

    #[test]
    fn test_overflow_to_signed_infinity() {
        assert_all_variants(
            [f32::MAX, f32::MAX, 0.0, 0.0],
            [1.0, 1.0, 0.0, 0.0],
            f32::INFINITY.to_bits(),
        );
        assert_all_variants(
            [-f32::MAX, 1.0, 1.0, 1.0],
            [4.0, 1.0, 1.0, 1.0],
            f32::NEG_INFINITY.to_bits(),
        );
    }

    #[test]
    fn test_products_beyond_binary32_range() {
        // 2 * MAX overflows binary32 but the sum does not.
        let a = [f32::MAX, f32::MAX, 0.0, 0.0];
        let b = [2.0, -1.5, 0.0, 0.0];
        let expected = correctly_rounded_dp4(&a, &b).unwrap();
        assert_eq!(expected, 0.5 * f32::MAX);
        assert_all_variants(a, b, expected.to_bits());
    }

    #[test]
    fn test_gradual_underflow() {
        let t = 2f32.powi(-75);
        // 2^-150 is half the smallest subnormal: ties to even gives +0.
        assert_all_variants([t, 0.0, 0.0, 0.0], [t, 0.0, 0.0, 0.0], 0);
        let u = 2f32.powi(-100);
        assert_all_variants([t, u, 0.0, 0.0], [t, u, 0.0, 0.0], 1);
    }

    #[test]
    fn test_exact_reference_rejects_non_finite() {
        assert!(dp4_cr_exact(&[f32::NAN, 0.0, 0.0, 0.0], &[1.0; 4]).is_err());
        assert!(dp4_cr_original(&[f32::INFINITY, 0.0, 0.0, 0.0], &[1.0; 4]).is_nan());
    }

    fn finite_f32() -> impl Strategy<Value = f32> {
        prop::num::f32::POSITIVE
            | prop::num::f32::NEGATIVE
            | prop::num::f32::NORMAL
            | prop::num::f32::SUBNORMAL
            | prop::num::f32::ZERO
    }

    fn moderate_f32() -> impl Strategy<Value = f32> {
        (any::<bool>(), -20i32..=20, 0u32..(1 << 23)).prop_map(|(neg, e, frac)| {
            f32::from_bits(((neg as u32) << 31) | (((e + 127) as u32) << 23) | frac)
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn prop_variants_match_original(
            a in prop::array::uniform4(finite_f32()),
            b in prop::array::uniform4(finite_f32()),
        ) {
            let expected = dp4_cr_original(&a, &b);
            for variant in available_variants() {
                prop_assert_eq!((variant.function)(&a, &b).to_bits(), expected.to_bits(), "{}", variant.name);
            }
        }

        #[test]
        fn prop_correctly_rounded(
            a in prop::array::uniform4(moderate_f32()),
            b in prop::array::uniform4(moderate_f32()),
        ) {
            let expected = correctly_rounded_dp4(&a, &b).unwrap();
            prop_assert_eq!(dp4_cr(&a, &b).to_bits(), expected.to_bits());
        }

        #[test]
        fn prop_permutation_invariant(
            a in prop::array::uniform4(moderate_f32()),
            b in prop::array::uniform4(moderate_f32()),
            perm in Just(vec![0usize, 1, 2, 3]).prop_shuffle(),
        ) {
            let pa: [f32; 4] = std::array::from_fn(|k| a[perm[k]]);
            let pb: [f32; 4] = std::array::from_fn(|k| b[perm[k]]);
            prop_assert_eq!(dp4_cr(&a, &b).to_bits(), dp4_cr(&pa, &pb).to_bits());
        }
    }
}
