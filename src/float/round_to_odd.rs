//! Round-to-odd, derived from the two directed roundings.
//!
//! Whenever information is discarded the result has a trailing `1` at the
//! target precision, so it is never mistaken for an exact value or a tie by a
//! later rounding. Rounding an RO result to nearest at a precision at least
//! two bits narrower gives the same value as rounding the exact input.

use super::exact::ExactValue;
use super::precision::{Precision, RoundingMode};

/// Rounds `v` to `precision` with the round-to-odd attribute.
///
/// `r_up` has an even trailing bit iff it is also the round-up of `v` on the
/// one-bit-shorter grid; in that case the odd neighbour is `r_down`. When `v`
/// is exact at `precision` both candidates equal `v`.
pub fn round_to_odd(v: &ExactValue, precision: Precision) -> ExactValue {
    let r_up = v.round(precision, RoundingMode::Up);
    let r_down = v.round(precision, RoundingMode::Down);
    let r_up_even = r_up == v.round(precision.one_bit_short(), RoundingMode::Up);
    if r_up_even {
        r_down
    } else {
        r_up
    }
}
