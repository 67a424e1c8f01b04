//! Target precisions and rounding directions.

use std::fmt;

/// Rounding direction of the primitive `ExactValue::round`.
///
/// Round-to-odd is not a primitive direction; [`round_to_odd`] derives it
/// from `Up` and `Down`.
///
/// [`round_to_odd`]: crate::float::round_to_odd
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round to nearest, ties to even.
    Nearest,
    /// Round toward positive infinity.
    Up,
    /// Round toward negative infinity.
    Down,
}

/// A significand width, optionally bounded by an IEEE-754 exponent range.
///
/// `bits` counts the implicit leading bit. A named format also fixes the
/// minimum normal exponent (below it the grid stops shrinking: subnormals) and
/// the maximum exponent (above it conversions overflow to infinity). A raw
/// width has an unbounded exponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Precision {
    bits: u32,
    min_exponent: Option<i32>,
    max_exponent: Option<i32>,
    format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Format {
    Raw,
    Binary64,
    Binary32,
}

impl Precision {
    pub const BINARY64: Precision = Precision {
        bits: 53,
        min_exponent: Some(-1022),
        max_exponent: Some(1023),
        format: Format::Binary64,
    };

    pub const BINARY32: Precision = Precision {
        bits: 24,
        min_exponent: Some(-126),
        max_exponent: Some(127),
        format: Format::Binary32,
    };

    /// Width of the double-precision accumulator used by `dp4_cr`.
    pub const ACCUMULATOR: Precision = Precision::bits(53);

    /// A raw `bits`-wide significand with unbounded exponent.
    ///
    /// # Panics
    /// Panics if `bits < 2`; round-to-odd needs a one-bit-shorter grid.
    pub const fn bits(bits: u32) -> Precision {
        assert!(bits >= 2, "precision must be at least 2 bits");
        Precision {
            bits,
            min_exponent: None,
            max_exponent: None,
            format: Format::Raw,
        }
    }

    pub const fn significand_bits(self) -> u32 {
        self.bits
    }

    pub const fn min_exponent(self) -> Option<i32> {
        self.min_exponent
    }

    pub const fn max_exponent(self) -> Option<i32> {
        self.max_exponent
    }

    /// The grid with every other point of `self` removed.
    ///
    /// binary64 maps to a fixed 52-bit format and binary32 to a fixed 23-bit
    /// one, both keeping their exponent range so that the subnormal quantum
    /// doubles as well. A raw width `p` maps to `p - 1`.
    pub const fn one_bit_short(self) -> Precision {
        let bits = match self.format {
            Format::Binary64 => 52,
            Format::Binary32 => 23,
            Format::Raw => self.bits - 1,
        };
        Precision {
            bits,
            format: Format::Raw,
            ..self
        }
    }

    /// Exponent of the unit in the last place for a value whose leading bit
    /// has weight `2^top`.
    pub(crate) fn quantum_exponent(self, top: i64) -> i64 {
        let q = top - (self.bits as i64 - 1);
        match self.min_exponent {
            Some(emin) => q.max(emin as i64 - (self.bits as i64 - 1)),
            None => q,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            Format::Binary64 => f.write_str("binary64"),
            Format::Binary32 => f.write_str("binary32"),
            Format::Raw => write!(f, "{} bits", self.bits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_bit_short_named_formats() {
        let p = Precision::BINARY64.one_bit_short();
        assert_eq!(p.significand_bits(), 52);
        assert_eq!(p.min_exponent(), Some(-1022));

        let p = Precision::BINARY32.one_bit_short();
        assert_eq!(p.significand_bits(), 23);
        assert_eq!(p.max_exponent(), Some(127));
    }

    #[test]
    fn test_one_bit_short_raw_width() {
        assert_eq!(Precision::bits(53).one_bit_short(), Precision::bits(52));
        assert_eq!(Precision::bits(2).one_bit_short().significand_bits(), 1);
    }

    #[test]
    fn test_subnormal_quantum() {
        assert_eq!(Precision::BINARY64.quantum_exponent(-2000), -1074);
        assert_eq!(Precision::BINARY32.quantum_exponent(-140), -149);
        assert_eq!(Precision::BINARY32.quantum_exponent(0), -23);
        assert_eq!(Precision::bits(53).quantum_exponent(-2000), -2052);
    }

    #[test]
    #[should_panic(expected = "at least 2 bits")]
    fn test_rejects_one_bit() {
        let _ = Precision::bits(1);
    }
}
