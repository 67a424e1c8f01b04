//! # cr-dot4
//!
//! Correctly-rounded binary32 4D dot product built on round-to-odd binary64
//! accumulation, with the rounding primitives it rests on, an exact
//! reference, and a benchmark/verification harness for every variant.
//!
//! ```
//! let a = [1.0f32, 2.0, 3.0, 4.0];
//! let b = [1.0f32; 4];
//! assert_eq!(cr_dot4::dp4_cr(&a, &b), 10.0);
//! ```

pub mod error;
pub mod float;
pub mod harness;
pub mod math;
pub mod registry;
pub mod utils;

pub use error::{Error, Result};
pub use float::{add_round_to_odd, round_to_odd, two_sum, ExactValue, Precision, RoundingMode};
pub use math::dp4_cr::dp4_cr;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::float::{add_round_to_odd, round_to_odd, ExactValue, HexF32, HexF64, Precision, RoundingMode};
    pub use crate::harness::{correctly_rounded_dp4, exact_dp4, FpGenerator};
    pub use crate::math::dp4_cr::dp4_cr;
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
}
