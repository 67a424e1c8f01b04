//! Error types for cr-dot4.

use crate::float::hexfloat::{HexF32, HexF64};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("non-finite operand {0} has no exact value")]
    NonFinite(f64),

    #[error("invalid hexadecimal float literal: {0:?}")]
    ParseHexFloat(String),

    #[error("invalid exponent range [{emin}, {emax}] for {format} (allowed [{min}, {max}])")]
    InvalidExponentRange {
        format: &'static str,
        emin: i32,
        emax: i32,
        min: i32,
        max: i32,
    },

    #[error(
        "{variant}: dp4({}, {}) = {}, correctly rounded result is {}",
        vec4(.a), vec4(.b), HexF32(*.got), HexF32(*.expected)
    )]
    Mismatch {
        variant: &'static str,
        a: [f32; 4],
        b: [f32; 4],
        expected: f32,
        got: f32,
    },

    #[error(
        "variant '{variant}' of {algorithm} disagrees with the reference on {inputs}: expected {}, got {}",
        HexF64(*.expected), HexF64(*.got)
    )]
    VariantMismatch {
        algorithm: &'static str,
        variant: &'static str,
        inputs: String,
        expected: f64,
        got: f64,
    },

    #[error("no '{0}' reference variant registered")]
    MissingReference(&'static str),

    #[error("unknown algorithm '{name}' (available: {available})")]
    UnknownAlgorithm { name: String, available: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Formats a 4-vector as `[x0, x1, x2, x3]` with hexadecimal elements.
pub fn vec4(v: &[f32; 4]) -> String {
    let items: Vec<String> = v.iter().map(|&x| HexF32(x).to_string()).collect();
    format!("[{}]", items.join(", "))
}
