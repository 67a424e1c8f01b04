//! Literal test tables for binary64 addition rounded to odd.
//!
//! The rendered table is a C translation unit fragment:
//!
//! ```text
//! unsigned test_num = 10;
//! double fp64_add_ro_test[20][3] = {
//!     {-0x1.c072b4d172d26p693, -0x1.b123968039f7ep-227, -0x1.c072b4d172d27p693},
//!     ...
//! };
//! ```

use super::generate::{FpGenerator, FP64_EXPONENTS};
use crate::error::Result;
use crate::float::{round_to_odd, ExactValue, HexF64, Precision};
use std::fmt::Write;
use tracing::debug;

/// Exponent range of the "close" half of the table.
pub const CLOSE_EXPONENTS: (i32, i32) = (-2, 2);

#[derive(Clone, Debug)]
pub struct TableConfig {
    /// Cases per half: the table holds `2 * count` rows.
    pub count: usize,
    pub seed: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            count: 10,
            seed: 0x7ab1e,
        }
    }
}

/// One `{lhs, rhs, expected}` row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AddRoCase {
    pub lhs: f64,
    pub rhs: f64,
    pub expected: f64,
}

impl AddRoCase {
    /// Builds a row whose expected value is `lhs + rhs` rounded to odd in binary64.
    pub fn new(lhs: f64, rhs: f64) -> Result<Self> {
        let sum = &ExactValue::from_f64(lhs)? + &ExactValue::from_f64(rhs)?;
        Ok(Self {
            lhs,
            rhs,
            expected: round_to_odd(&sum, Precision::BINARY64).to_f64(),
        })
    }
}

/// `count` full-range cases followed by `count` close-range cases.
pub fn generate_add_ro_table(config: &TableConfig) -> Result<Vec<AddRoCase>> {
    let mut gen = FpGenerator::new(config.seed);
    let mut cases = Vec::with_capacity(2 * config.count);
    // The top binade is excluded: a sum rounding up past it would overflow.
    let wide = (FP64_EXPONENTS.0, FP64_EXPONENTS.1 - 1);
    for (emin, emax) in [wide, CLOSE_EXPONENTS] {
        for _ in 0..config.count {
            let lhs = gen.random_fp64_value(emin, emax)?;
            let rhs = gen.random_fp64_value(emin, emax)?;
            cases.push(AddRoCase::new(lhs, rhs)?);
        }
    }
    debug!(rows = cases.len(), "generated add_ro table");
    Ok(cases)
}

/// Renders the table as C source with hexadecimal float literals.
pub fn render_c_table(cases: &[AddRoCase], test_num: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "unsigned test_num = {};", test_num);
    let _ = writeln!(out, "double fp64_add_ro_test[{}][3] = {{", cases.len());
    for case in cases {
        let _ = writeln!(
            out,
            "    {{{}, {}, {}}},",
            HexF64(case.lhs),
            HexF64(case.rhs),
            HexF64(case.expected)
        );
    }
    out.push_str("};\n");
    out
}
