//! # Floating-point rounding primitives
//!
//! - [`ExactValue`]: exact dyadic values with a directed/nearest `round` at any
//!   significand width or named IEEE format
//! - [`round_to_odd`]: the round-to-odd attribute derived from round-up and
//!   round-down
//! - [`add_round_to_odd`]: the same attribute for one binary64 addition, using
//!   only hardware round-to-nearest arithmetic (TwoSum)
//! - [`hexfloat`]: `%a`-style literal formatting and parsing

pub mod exact;
pub mod hexfloat;
mod magnitude;
pub mod precision;
mod round_to_odd;
mod two_sum;

pub use exact::ExactValue;
pub use hexfloat::{HexF32, HexF64};
pub use precision::{Precision, RoundingMode};
pub use round_to_odd::round_to_odd;
pub use two_sum::{add_round_to_odd, two_sum};
