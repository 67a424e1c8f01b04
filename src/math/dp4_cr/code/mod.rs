//! Correctly-rounded dot product implementations.
//!
//! This module contains all implementation variants of the 4D dot product.
//! Every variant must be bit-identical to `original`.

pub mod c_impl;
mod original;
mod scalar_opt;
mod two_sum;

pub use c_impl::{dp4_cr_c, C_IMPL_AVAILABLE};
pub use original::{dp4_cr_exact, dp4_cr_original};
pub use scalar_opt::dp4_cr_scalar_opt;
pub use two_sum::dp4_cr;

use crate::utils::VariantInfo;

/// Type alias for dp4 function signature
pub type Dp4Fn = fn(&[f32; 4], &[f32; 4]) -> f32;

/// Get all available variants for the current build
pub fn available_variants() -> Vec<VariantInfo<Dp4Fn>> {
    let mut variants: Vec<VariantInfo<Dp4Fn>> = vec![
        VariantInfo {
            name: "original",
            description: "Exact arithmetic reference (arbitrary precision round-to-odd)",
            function: dp4_cr_original,
        },
        VariantInfo {
            name: "two_sum",
            description: "binary64 TwoSum round-to-odd accumulation, library sort",
            function: dp4_cr,
        },
        VariantInfo {
            name: "scalar_opt",
            description: "Sorting network and unrolled round-to-odd accumulation",
            function: dp4_cr_scalar_opt,
        },
    ];

    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-two_sum",
            description: "C kernel with TwoSum round-to-odd accumulation",
            function: dp4_cr_c,
        });
    }

    variants
}
