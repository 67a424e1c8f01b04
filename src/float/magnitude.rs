//! Unsigned arbitrary-width integer used as the significand of `ExactValue`.
//!
//! Little-endian `u64` limbs, always trimmed so the most significant limb is
//! non-zero (zero is the empty vector). Only the operations needed for exact
//! addition, multiplication and rounding are provided.

use std::cmp::Ordering;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Magnitude {
    limbs: Vec<u64>,
}

impl Magnitude {
    pub fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    pub fn from_u64(value: u64) -> Self {
        let mut m = Self { limbs: vec![value] };
        m.trim();
        m
    }

    pub fn from_u128(value: u128) -> Self {
        let mut m = Self {
            limbs: vec![value as u64, (value >> 64) as u64],
        };
        m.trim();
        m
    }

    fn trim(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Value as `u64` if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        match self.limbs.len() {
            0 => Some(0),
            1 => Some(self.limbs[0]),
            _ => None,
        }
    }

    /// Number of significant bits (0 for zero).
    pub fn bit_length(&self) -> usize {
        match self.limbs.last() {
            None => 0,
            Some(&top) => (self.limbs.len() - 1) * 64 + (64 - top.leading_zeros() as usize),
        }
    }

    pub fn bit(&self, index: usize) -> bool {
        let word = index / 64;
        word < self.limbs.len() && (self.limbs[word] >> (index % 64)) & 1 == 1
    }

    /// True if any of the bits `[0, index)` is set.
    pub fn any_bit_below(&self, index: usize) -> bool {
        let word = index / 64;
        let bit = index % 64;
        let full = word.min(self.limbs.len());
        if self.limbs[..full].iter().any(|&l| l != 0) {
            return true;
        }
        bit > 0 && word < self.limbs.len() && self.limbs[word] & ((1u64 << bit) - 1) != 0
    }

    pub fn trailing_zeros(&self) -> Option<usize> {
        self.limbs
            .iter()
            .position(|&l| l != 0)
            .map(|i| i * 64 + self.limbs[i].trailing_zeros() as usize)
    }

    pub fn shl(&self, shift: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let word = shift / 64;
        let bit = shift % 64;
        let mut limbs = vec![0u64; self.limbs.len() + word + 1];
        for (i, &limb) in self.limbs.iter().enumerate() {
            limbs[i + word] |= limb << bit;
            if bit > 0 {
                limbs[i + word + 1] |= limb >> (64 - bit);
            }
        }
        let mut m = Self { limbs };
        m.trim();
        m
    }

    /// Truncating right shift.
    pub fn shr(&self, shift: usize) -> Self {
        let word = shift / 64;
        let bit = shift % 64;
        if word >= self.limbs.len() {
            return Self::zero();
        }
        let src = &self.limbs[word..];
        let limbs = (0..src.len())
            .map(|i| {
                let lo = src[i] >> bit;
                let hi = if bit > 0 && i + 1 < src.len() {
                    src[i + 1] << (64 - bit)
                } else {
                    0
                };
                lo | hi
            })
            .collect();
        let mut m = Self { limbs };
        m.trim();
        m
    }

    pub fn add(&self, other: &Self) -> Self {
        let (long, short) = if self.limbs.len() >= other.limbs.len() {
            (&self.limbs, &other.limbs)
        } else {
            (&other.limbs, &self.limbs)
        };
        let mut limbs = Vec::with_capacity(long.len() + 1);
        let mut carry = false;
        for i in 0..long.len() {
            let rhs = short.get(i).copied().unwrap_or(0);
            let (s1, c1) = long[i].overflowing_add(rhs);
            let (s2, c2) = s1.overflowing_add(carry as u64);
            limbs.push(s2);
            carry = c1 || c2;
        }
        if carry {
            limbs.push(1);
        }
        Self { limbs }
    }

    /// `self - other`; the caller guarantees `self >= other`.
    pub fn sub(&self, other: &Self) -> Self {
        debug_assert!(self.cmp(other) != Ordering::Less, "magnitude subtraction underflow");
        let mut limbs = Vec::with_capacity(self.limbs.len());
        let mut borrow = false;
        for i in 0..self.limbs.len() {
            let rhs = other.limbs.get(i).copied().unwrap_or(0);
            let (d1, b1) = self.limbs[i].overflowing_sub(rhs);
            let (d2, b2) = d1.overflowing_sub(borrow as u64);
            limbs.push(d2);
            borrow = b1 || b2;
        }
        let mut m = Self { limbs };
        m.trim();
        m
    }

    pub fn increment(&self) -> Self {
        self.add(&Self::from_u64(1))
    }

    /// Schoolbook product.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut limbs = vec![0u64; self.limbs.len() + other.limbs.len()];
        for (i, &a) in self.limbs.iter().enumerate() {
            let mut carry: u128 = 0;
            for (j, &b) in other.limbs.iter().enumerate() {
                let t = a as u128 * b as u128 + limbs[i + j] as u128 + carry;
                limbs[i + j] = t as u64;
                carry = t >> 64;
            }
            limbs[i + other.limbs.len()] = carry as u64;
        }
        let mut m = Self { limbs };
        m.trim();
        m
    }
}

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_round_trip_across_limbs() {
        let m = Magnitude::from_u64(0xdead_beef_1234_5678);
        for shift in [0, 1, 63, 64, 65, 130, 1000] {
            assert_eq!(m.shl(shift).shr(shift), m, "shift {}", shift);
            assert_eq!(m.shl(shift).bit_length(), 64 + shift);
        }
    }

    #[test]
    fn test_add_carries_into_new_limb() {
        let m = Magnitude::from_u64(u64::MAX).add(&Magnitude::from_u64(1));
        assert_eq!(m, Magnitude::from_u128(1u128 << 64));
        assert_eq!(m.bit_length(), 65);
        assert_eq!(m.trailing_zeros(), Some(64));
    }

    #[test]
    fn test_sub_borrows_and_trims() {
        let a = Magnitude::from_u128(1u128 << 64);
        let b = Magnitude::from_u64(1);
        assert_eq!(a.sub(&b), Magnitude::from_u64(u64::MAX));
        assert!(a.sub(&a).is_zero());
    }

    #[test]
    fn test_mul_matches_u128() {
        let a = 0xffff_ffff_ffffu64;
        let b = 0x1234_5678_9abcu64;
        let m = Magnitude::from_u64(a).mul(&Magnitude::from_u64(b));
        assert_eq!(m, Magnitude::from_u128(a as u128 * b as u128));
    }

    #[test]
    fn test_bits_below() {
        let m = Magnitude::from_u64(0b1000).shl(100);
        assert!(m.bit(103));
        assert!(!m.any_bit_below(103));
        assert!(m.any_bit_below(104));
        assert_eq!(Magnitude::zero().trailing_zeros(), None);
    }
}
