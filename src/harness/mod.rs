//! Test harness: operand generation, the exact oracle, the differential
//! driver and the literal table generator.
//!
//! The kernels in `float` and `math::*::code` never call into this module;
//! only verification and benchmarks do.

pub mod differential;
pub mod generate;
pub mod oracle;
pub mod table;

pub use differential::{run_differential, DifferentialConfig, DifferentialSummary};
pub use generate::FpGenerator;
pub use oracle::{correctly_rounded_dp4, exact_dp4};
pub use table::{generate_add_ro_table, render_c_table, AddRoCase, TableConfig};
