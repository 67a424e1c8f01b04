//! Verification and tests for the round-to-odd adders.

use super::code::available_variants;
use crate::error::{Error, Result};
use crate::float::hexfloat::parse_f64;
use crate::float::HexF64;
use crate::harness::FpGenerator;
use tracing::debug;

const VERIFY_SEED: u64 = 0xadd0_0001;
const VERIFY_RANDOM_CASES: usize = 2000;

/// `{lhs, rhs, expected}` rows: ten wide-range sums followed by ten sums of
/// operands in `[2^-2, 2^3)`.
pub const ADD_RO_TABLE: [[&str; 3]; 20] = [
    ["-0x1.c072b4d172d26p693", "-0x1.b123968039f7ep-227", "-0x1.c072b4d172d27p693"],
    ["0x1.596f646f30a06p498", "-0x1.1062e38c42cap-394", "0x1.596f646f30a05p498"],
    ["0x1.c25906b6f8658p809", "-0x1.d08fe98d73a95p-842", "0x1.c25906b6f8657p809"],
    ["-0x1.6af2199dd8dbp-766", "-0x1.d4dce14c24d03p928", "-0x1.d4dce14c24d03p928"],
    ["0x1.a4fcfcec9876ap771", "0x1.aa2551b12ee06p-492", "0x1.a4fcfcec9876bp771"],
    ["0x1.5341dba487704p-989", "-0x1.c319c0c64fb43p-555", "-0x1.c319c0c64fb43p-555"],
    ["0x1.ab8b8d0302c68p-606", "-0x1.63c5ed135dda6p259", "-0x1.63c5ed135dda5p259"],
    ["0x1.f4c2eee43ab4ap972", "0x1.9dce20bfdb5b3p-191", "0x1.f4c2eee43ab4bp972"],
    ["0x1.2903f8119575ep10", "0x1.ad2bd567a4d5ep-466", "0x1.2903f8119575fp10"],
    ["-0x1.54b5c1c219636p880", "-0x1.3d04556f80401p200", "-0x1.54b5c1c219637p880"],
    ["0x1.f3295ad809757p0", "-0x1.71fb160fa5296p-1", "0x1.3a2bcfd036e0cp0"],
    ["-0x1.83f96dd35f983p2", "0x1.4e37f1a1fb24dp-1", "-0x1.5a326f9f20339p2"],
    ["0x1.77b85c2e904f8p2", "0x1.1d7c6c8441a35p-2", "0x1.899022f6d469bp2"],
    ["-0x1.68adfd98e1869p-1", "0x1.4009f18cf2fafp1", "0x1.cbbce44d75329p0"],
    ["-0x1.ccf1af22a61a1p0", "-0x1.290c8bdc977c1p0", "-0x1.7aff1d7f9ecb1p1"],
    ["-0x1.1c13ea7e15c1ep1", "0x1.e3c1db8f1a512p1", "0x1.8f5be222091e8p0"],
    ["0x1.0fcc3fa076876p-1", "-0x1.e960e96a76eb4p1", "-0x1.a56dd98259497p1"],
    ["-0x1.5408db57d107p-1", "-0x1.0de23aaa6bc4ap-1", "-0x1.30f58b011e65dp0"],
    ["-0x1.b2981f3f7b97p-2", "-0x1.c3d4c018c3f3ap0", "-0x1.183d63f4516cbp1"],
    ["-0x1.bb29cba065c67p1", "0x1.969ca5f56915cp-1", "-0x1.5582a2230b81p1"],
];

/// Parses [`ADD_RO_TABLE`].
pub fn literal_cases() -> Result<Vec<(f64, f64, f64)>> {
    ADD_RO_TABLE
        .iter()
        .map(|[x, y, z]| Ok((parse_f64(x)?, parse_f64(y)?, parse_f64(z)?)))
        .collect()
}

/// Signed zeros, exact sums, sums at the edge of the subnormal range and of
/// the largest binade.
pub fn boundary_cases() -> Vec<(f64, f64)> {
    let tiny = f64::from_bits(1);
    vec![
        (0.0, 0.0),
        (-0.0, -0.0),
        (0.0, -0.0),
        (1.0, -1.0),
        (1.5, 2.25),
        (1.0, 2f64.powi(-60)),
        (1.0, -(2f64.powi(-60))),
        (-1.0, 2f64.powi(-60)),
        (1.0, 2f64.powi(-53)),
        (1.0 + f64::EPSILON, 2f64.powi(-53)),
        (tiny, 1.0),
        (tiny, -tiny),
        (f64::MIN_POSITIVE, -tiny),
        (2f64.powi(1022), 2f64.powi(-1000)),
        (-(2f64.powi(1022)), -(2f64.powi(-1000))),
        (f64::MAX, -1.0),
        (f64::MAX, f64::MAX),
        (f64::INFINITY, 1.0),
        (f64::NEG_INFINITY, f64::MAX),
    ]
}

fn same(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

/// Verifies every variant against `original` and the literal table.
pub fn verify_all() -> Result<()> {
    let variants = available_variants();
    let original = variants
        .iter()
        .find(|v| v.name == "original")
        .ok_or(Error::MissingReference("add_ro"))?;

    let mut cases: Vec<(f64, f64, Option<f64>)> = literal_cases()?
        .into_iter()
        .map(|(x, y, z)| (x, y, Some(z)))
        .collect();
    cases.extend(boundary_cases().into_iter().map(|(x, y)| (x, y, None)));
    let mut gen = FpGenerator::new(VERIFY_SEED);
    for _ in 0..VERIFY_RANDOM_CASES {
        cases.push((gen.random_fp64_value(-1022, 1022)?, gen.random_fp64_value(-1022, 1022)?, None));
        cases.push((gen.random_fp64_value(-2, 2)?, gen.random_fp64_value(-2, 2)?, None));
    }

    for &(x, y, literal) in &cases {
        let expected = literal.unwrap_or_else(|| (original.function)(x, y));
        for variant in &variants {
            let got = (variant.function)(x, y);
            if !same(got, expected) {
                return Err(Error::VariantMismatch {
                    algorithm: "add_ro",
                    variant: variant.name,
                    inputs: format!("{} + {}", HexF64(x), HexF64(y)),
                    expected,
                    got,
                });
            }
        }
    }
    debug!(cases = cases.len(), variants = variants.len(), "add_ro verified");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::add_ro::code::*;
    use proptest::prelude::*;

    #[test]
    fn test_verify_all() {
        verify_all().unwrap();
    }

    #[test]
    fn test_literal_table() {
        let cases = literal_cases().unwrap();
        assert_eq!(cases.len(), 20);
        for variant in available_variants() {
            for &(x, y, expected) in &cases {
                assert_eq!(
                    (variant.function)(x, y).to_bits(),
                    expected.to_bits(),
                    "{}: {} + {}",
                    variant.name,
                    HexF64(x),
                    HexF64(y)
                );
            }
        }
    }

    #[test]
    fn test_inexact_sum_is_odd() {
        let x = parse_f64("0x1.0000000000001p0").unwrap();
        let y = parse_f64("0x1p-60").unwrap();
        for variant in available_variants() {
            let r = (variant.function)(x, y);
            assert_eq!(r.to_bits() & 1, 1, "{}", variant.name);
            assert_eq!(r, x, "{}", variant.name);
        }
    }

    #[test]
    fn test_even_result_moves_toward_exact_sum() {
        let up = 1.0 + f64::EPSILON;
        let down = f64::from_bits(1.0f64.to_bits() - 1);
        for variant in available_variants() {
            let f = variant.function;
            assert_eq!(f(1.0, 2f64.powi(-60)), up, "{}", variant.name);
            assert_eq!(f(1.0, -(2f64.powi(-60))), down, "{}", variant.name);
            assert_eq!(f(-1.0, 2f64.powi(-60)), -down, "{}", variant.name);
        }
    }

    #[test]
    fn test_exact_sums_unchanged() {
        for variant in available_variants() {
            let f = variant.function;
            assert_eq!(f(1.5, 2.25), 3.75);
            assert_eq!(f(1.0, -1.0).to_bits(), 0);
            assert_eq!(f(-0.0, -0.0).to_bits(), (-0.0f64).to_bits());
            assert_eq!(f(0.0, -0.0).to_bits(), 0);
        }
    }

    #[test]
    fn test_overflow_and_infinities() {
        for variant in available_variants() {
            let f = variant.function;
            assert_eq!(f(f64::MAX, f64::MAX), f64::INFINITY, "{}", variant.name);
            assert_eq!(f(-f64::MAX, -f64::MAX), f64::NEG_INFINITY, "{}", variant.name);
            assert_eq!(f(f64::INFINITY, 1.0), f64::INFINITY, "{}", variant.name);
            assert!(f(f64::INFINITY, f64::NEG_INFINITY).is_nan(), "{}", variant.name);
        }
    }

    #[test]
    fn test_subnormal_sums() {
        let tiny = f64::from_bits(1);
        for variant in available_variants() {
            let f = variant.function;
            // Subnormal sums are exact.
            assert_eq!(f(tiny, tiny), 2.0 * tiny, "{}", variant.name);
            assert_eq!(f(f64::MIN_POSITIVE, -tiny), f64::from_bits((1 << 52) - 1));
            // 1 + 2^-1074 rounds to the odd neighbour above 1.
            assert_eq!(f(1.0, tiny), 1.0 + f64::EPSILON, "{}", variant.name);
        }
    }

    fn wide_f64() -> impl Strategy<Value = f64> {
        (any::<bool>(), -1022i32..=1022, 0u64..(1 << 52)).prop_map(|(neg, e, frac)| {
            f64::from_bits(((neg as u64) << 63) | (((e + 1023) as u64) << 52) | frac)
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn prop_variants_match_original(x in wide_f64(), y in wide_f64()) {
            let expected = add_ro_original(x, y);
            for variant in available_variants() {
                prop_assert_eq!((variant.function)(x, y).to_bits(), expected.to_bits(), "{}", variant.name);
            }
        }

        #[test]
        fn prop_commutative(x in wide_f64(), y in wide_f64()) {
            for variant in available_variants() {
                let f = variant.function;
                prop_assert_eq!(f(x, y).to_bits(), f(y, x).to_bits(), "{}", variant.name);
            }
        }
    }
}
