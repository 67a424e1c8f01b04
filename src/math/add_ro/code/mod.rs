//! Binary64 addition rounded to odd: implementation variants.

pub mod c_impl;
mod fast_two_sum;
mod original;

pub use crate::float::add_round_to_odd;
pub use c_impl::{add_ro_c, C_IMPL_AVAILABLE};
pub use fast_two_sum::add_ro_fast_two_sum;
pub use original::add_ro_original;

use crate::utils::VariantInfo;

pub type AddRoFn = fn(f64, f64) -> f64;

pub fn available_variants() -> Vec<VariantInfo<AddRoFn>> {
    let mut variants: Vec<VariantInfo<AddRoFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Exact sum, round-to-odd derived from round-up and round-down",
            function: add_ro_original,
        },
        VariantInfo {
            name: "two_sum",
            description: "TwoSum error term, trailing bit forced odd",
            function: add_round_to_odd,
        },
        VariantInfo {
            name: "fast_two_sum",
            description: "Magnitude-ordered Fast2Sum, trailing bit forced odd",
            function: add_ro_fast_two_sum,
        },
    ];

    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-two_sum",
            description: "C TwoSum implementation",
            function: add_ro_c,
        });
    }

    variants
}
