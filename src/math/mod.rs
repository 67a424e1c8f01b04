//! Benchmarked algorithms, one directory per algorithm (`code/`, `test/`,
//! `bench/`).

pub mod add_ro;
pub mod dp4_cr;
