//! FFI binding for the C round-to-odd adder.

#[cfg(c_implementation_active)]
mod ffi {
    use libc::c_double;

    extern "C" {
        pub fn fp64_add_ro(x: c_double, y: c_double) -> c_double;
    }
}

#[cfg(c_implementation_active)]
pub fn add_ro_c(x: f64, y: f64) -> f64 {
    // SAFETY: pure function on two doubles.
    unsafe { ffi::fp64_add_ro(x, y) }
}

#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

#[cfg(not(c_implementation_active))]
pub fn add_ro_c(_x: f64, _y: f64) -> f64 {
    panic!("C implementation not compiled (requires a C compiler)")
}
