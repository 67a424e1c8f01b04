//! Hexadecimal floating-point literals (`0x1.c072b4d172d26p693`).
//!
//! Output is normalized to a leading `1`, has no trailing zero digits and no
//! `+` on the exponent, so every finite value has exactly one spelling.
//! Input accepts anything a C `%a` conversion produces.

use super::exact::ExactValue;
use super::magnitude::Magnitude;
use crate::error::{Error, Result};
use std::fmt;

pub fn format_exact(value: &ExactValue) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let Some(top) = value.leading_exponent() else {
        return format!("{}0x0p0", sign);
    };
    let significand = value.significand();
    let fraction_bits = significand.bit_length() - 1;
    let digits = fraction_bits.div_ceil(4);

    let mut out = format!("{}0x1", sign);
    if digits > 0 {
        out.push('.');
        for d in 0..digits {
            let mut nibble = 0u32;
            for k in 0..4 {
                // Bit positions below the leading one, most significant first.
                let offset = 4 * d + k + 1;
                let set = offset <= fraction_bits && significand.bit(fraction_bits - offset);
                nibble = (nibble << 1) | set as u32;
            }
            out.push(char::from_digit(nibble, 16).unwrap_or('0'));
        }
    }
    out.push_str(&format!("p{}", top));
    out
}

pub fn parse_exact(text: &str) -> Result<ExactValue> {
    let invalid = || Error::ParseHexFloat(text.to_string());
    let s = text.trim();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(invalid)?;

    let (mantissa, exponent) = match s.find(['p', 'P']) {
        Some(i) => (&s[..i], s[i + 1..].parse::<i64>().map_err(|_| invalid())?),
        None => (s, 0),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }

    let mut significand = Magnitude::zero();
    for c in int_part.chars().chain(frac_part.chars()) {
        let digit = c.to_digit(16).ok_or_else(invalid)?;
        significand = significand.shl(4).add(&Magnitude::from_u64(digit as u64));
    }
    let exponent = exponent - 4 * frac_part.len() as i64;
    Ok(ExactValue::from_magnitude(negative, significand, exponent))
}

/// Parses a literal into the nearest `f64`; also accepts `inf` and `nan`.
pub fn parse_f64(text: &str) -> Result<f64> {
    match text.trim().to_ascii_lowercase().as_str() {
        "inf" | "+inf" | "infinity" => Ok(f64::INFINITY),
        "-inf" | "-infinity" => Ok(f64::NEG_INFINITY),
        "nan" | "-nan" | "+nan" => Ok(f64::NAN),
        _ => Ok(parse_exact(text)?.to_f64()),
    }
}

/// Parses a literal into the nearest `f32`; also accepts `inf` and `nan`.
pub fn parse_f32(text: &str) -> Result<f32> {
    match text.trim().to_ascii_lowercase().as_str() {
        "inf" | "+inf" | "infinity" => Ok(f32::INFINITY),
        "-inf" | "-infinity" => Ok(f32::NEG_INFINITY),
        "nan" | "-nan" | "+nan" => Ok(f32::NAN),
        _ => Ok(parse_exact(text)?.to_f32()),
    }
}

/// Displays an `f64` as a hexadecimal literal.
#[derive(Clone, Copy, Debug)]
pub struct HexF64(pub f64);

impl fmt::Display for HexF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match ExactValue::from_f64(self.0) {
            Ok(v) => f.write_str(&format_exact(&v)),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

/// Displays an `f32` as a hexadecimal literal.
#[derive(Clone, Copy, Debug)]
pub struct HexF32(pub f32);

impl fmt::Display for HexF32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match ExactValue::from_f32(self.0) {
            Ok(v) => f.write_str(&format_exact(&v)),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}
