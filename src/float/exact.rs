//! Exact dyadic rationals.
//!
//! An `ExactValue` is `(-1)^s * m * 2^e` with an arbitrary-width integer `m`.
//! Every finite binary32/binary64 value, and every sum or product of them, is
//! representable without error, which makes this type the "real value" on
//! which the rounding primitive operates.

use super::hexfloat;
use super::magnitude::Magnitude;
use super::precision::{Precision, RoundingMode};
use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg};
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct ExactValue {
    negative: bool,
    /// Odd, or zero.
    significand: Magnitude,
    exponent: i64,
}

impl ExactValue {
    pub fn zero(negative: bool) -> Self {
        Self {
            negative,
            significand: Magnitude::zero(),
            exponent: 0,
        }
    }

    /// `(-1)^negative * significand * 2^exponent`.
    pub fn new(negative: bool, significand: u128, exponent: i64) -> Self {
        Self::from_magnitude(negative, Magnitude::from_u128(significand), exponent)
    }

    pub(crate) fn from_magnitude(negative: bool, significand: Magnitude, exponent: i64) -> Self {
        match significand.trailing_zeros() {
            None => Self::zero(negative),
            Some(tz) => Self {
                negative,
                significand: significand.shr(tz),
                exponent: exponent + tz as i64,
            },
        }
    }

    pub fn from_f64(x: f64) -> Result<Self> {
        if !x.is_finite() {
            return Err(Error::NonFinite(x));
        }
        let bits = x.to_bits();
        let negative = bits >> 63 == 1;
        let biased = ((bits >> 52) & 0x7ff) as i64;
        let fraction = bits & ((1u64 << 52) - 1);
        let (m, e) = if biased == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1u64 << 52), biased - 1075)
        };
        Ok(Self::from_magnitude(negative, Magnitude::from_u64(m), e))
    }

    pub fn from_f32(x: f32) -> Result<Self> {
        if !x.is_finite() {
            return Err(Error::NonFinite(x as f64));
        }
        let bits = x.to_bits();
        let negative = bits >> 31 == 1;
        let biased = ((bits >> 23) & 0xff) as i64;
        let fraction = (bits & ((1u32 << 23) - 1)) as u64;
        let (m, e) = if biased == 0 {
            (fraction, -149)
        } else {
            (fraction | (1u64 << 23), biased - 150)
        };
        Ok(Self::from_magnitude(negative, Magnitude::from_u64(m), e))
    }

    pub fn is_zero(&self) -> bool {
        self.significand.is_zero()
    }

    pub fn is_sign_negative(&self) -> bool {
        self.negative
    }

    pub(crate) fn significand(&self) -> &Magnitude {
        &self.significand
    }

    pub(crate) fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Weight of the leading bit: the value lies in `[2^k, 2^(k+1))` in magnitude.
    pub fn leading_exponent(&self) -> Option<i64> {
        if self.is_zero() {
            None
        } else {
            Some(self.exponent + self.significand.bit_length() as i64 - 1)
        }
    }

    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            ..self.clone()
        }
    }

    /// Multiplies by `2^k`.
    pub fn scale(&self, k: i64) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        Self {
            exponent: self.exponent + k,
            ..self.clone()
        }
    }

    /// Rounds to `precision` in direction `mode`.
    ///
    /// The exponent is unbounded above: a named format's maximum exponent only
    /// matters when converting to a hardware type. Below its minimum normal
    /// exponent a named format keeps a fixed quantum (gradual underflow), and
    /// a result that underflows to zero keeps the sign of `self`.
    pub fn round(&self, precision: Precision, mode: RoundingMode) -> Self {
        let Some(top) = self.leading_exponent() else {
            return self.clone();
        };
        let quantum = precision.quantum_exponent(top);
        if self.exponent >= quantum {
            return self.clone();
        }
        // The significand is odd, so at least one dropped bit is set.
        let shift = (quantum - self.exponent) as usize;
        let kept = self.significand.shr(shift);
        let away = match mode {
            RoundingMode::Nearest => {
                let half = self.significand.bit(shift - 1);
                let sticky = self.significand.any_bit_below(shift - 1);
                half && (sticky || kept.bit(0))
            }
            RoundingMode::Up => !self.negative,
            RoundingMode::Down => self.negative,
        };
        let kept = if away { kept.increment() } else { kept };
        Self::from_magnitude(self.negative, kept, quantum)
    }

    pub fn is_representable(&self, precision: Precision) -> bool {
        match self.leading_exponent() {
            None => true,
            Some(top) => self.exponent >= precision.quantum_exponent(top),
        }
    }

    /// Round-to-nearest conversion to binary64; overflows to a signed infinity.
    pub fn to_f64(&self) -> f64 {
        let (negative, biased, fraction) = self.encode(Precision::BINARY64);
        f64::from_bits(((negative as u64) << 63) | (biased << 52) | fraction)
    }

    /// Round-to-nearest conversion to binary32; overflows to a signed infinity.
    pub fn to_f32(&self) -> f32 {
        let (negative, biased, fraction) = self.encode(Precision::BINARY32);
        f32::from_bits(((negative as u32) << 31) | ((biased as u32) << 23) | fraction as u32)
    }

    /// IEEE fields (sign, biased exponent, fraction) of the nearest value in `format`.
    fn encode(&self, format: Precision) -> (bool, u64, u64) {
        let (Some(emin), Some(emax)) = (format.min_exponent(), format.max_exponent()) else {
            unreachable!("encoding needs a bounded format");
        };
        let (emin, emax) = (emin as i64, emax as i64);
        let p = format.significand_bits() as i64;
        let bias = 1 - emin;

        let rounded = self.round(format, RoundingMode::Nearest);
        let Some(top) = rounded.leading_exponent() else {
            return (rounded.negative, 0, 0);
        };
        if top > emax {
            return (rounded.negative, (emax + bias + 1) as u64, 0);
        }
        let Some(m) = rounded.significand.to_u64() else {
            unreachable!("rounded significand wider than 64 bits");
        };
        if top >= emin {
            let normalized = m << ((p - 1) - (top - rounded.exponent));
            (rounded.negative, (top + bias) as u64, normalized - (1u64 << (p - 1)))
        } else {
            let fraction = m << (rounded.exponent - (emin - (p - 1)));
            (rounded.negative, 0, fraction)
        }
    }

    fn cmp_abs(&self, other: &Self) -> Ordering {
        match (self.leading_exponent(), other.leading_exponent()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) if a != b => a.cmp(&b),
            _ => {
                let e = self.exponent.min(other.exponent);
                let lhs = self.significand.shl((self.exponent - e) as usize);
                let rhs = other.significand.shl((other.exponent - e) as usize);
                lhs.cmp(&rhs)
            }
        }
    }
}

impl Add<&ExactValue> for &ExactValue {
    type Output = ExactValue;

    fn add(self, rhs: &ExactValue) -> ExactValue {
        match (self.is_zero(), rhs.is_zero()) {
            (true, true) => return ExactValue::zero(self.negative && rhs.negative),
            (true, false) => return rhs.clone(),
            (false, true) => return self.clone(),
            _ => {}
        }
        let e = self.exponent.min(rhs.exponent);
        let a = self.significand.shl((self.exponent - e) as usize);
        let b = rhs.significand.shl((rhs.exponent - e) as usize);
        if self.negative == rhs.negative {
            return ExactValue::from_magnitude(self.negative, a.add(&b), e);
        }
        match a.cmp(&b) {
            Ordering::Greater => ExactValue::from_magnitude(self.negative, a.sub(&b), e),
            Ordering::Less => ExactValue::from_magnitude(rhs.negative, b.sub(&a), e),
            Ordering::Equal => ExactValue::zero(false),
        }
    }
}

impl Add for ExactValue {
    type Output = ExactValue;

    fn add(self, rhs: ExactValue) -> ExactValue {
        &self + &rhs
    }
}

impl Mul<&ExactValue> for &ExactValue {
    type Output = ExactValue;

    fn mul(self, rhs: &ExactValue) -> ExactValue {
        ExactValue::from_magnitude(
            self.negative != rhs.negative,
            self.significand.mul(&rhs.significand),
            self.exponent + rhs.exponent,
        )
    }
}

impl Mul for ExactValue {
    type Output = ExactValue;

    fn mul(self, rhs: ExactValue) -> ExactValue {
        &self * &rhs
    }
}

impl Neg for ExactValue {
    type Output = ExactValue;

    fn neg(self) -> ExactValue {
        ExactValue {
            negative: !self.negative,
            ..self
        }
    }
}

impl Neg for &ExactValue {
    type Output = ExactValue;

    fn neg(self) -> ExactValue {
        -self.clone()
    }
}

/// Numeric equality: `+0 == -0`.
impl PartialEq for ExactValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ExactValue {}

impl Ord for ExactValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) if other.negative => return Ordering::Greater,
            (true, false) => return Ordering::Less,
            (false, true) if self.negative => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_abs(other),
            (true, true) => other.cmp_abs(self),
        }
    }
}

impl PartialOrd for ExactValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ExactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hexfloat::format_exact(self))
    }
}

impl FromStr for ExactValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        hexfloat::parse_exact(s)
    }
}
