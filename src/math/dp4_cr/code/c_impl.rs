//! FFI binding for the C dot-product kernel.

#[cfg(c_implementation_active)]
mod ffi {
    use std::os::raw::c_float;

    extern "C" {
        pub fn dp4_cr_c(a: *const c_float, b: *const c_float) -> c_float;
    }
}

/// C kernel wrapper
#[cfg(c_implementation_active)]
pub fn dp4_cr_c(a: &[f32; 4], b: &[f32; 4]) -> f32 {
    // SAFETY: both pointers reference 4 readable floats for the whole call.
    unsafe { ffi::dp4_cr_c(a.as_ptr(), b.as_ptr()) }
}

/// Check if C implementations are available
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

// Stub implementation for missing C compiler
#[cfg(not(c_implementation_active))]
pub fn dp4_cr_c(_a: &[f32; 4], _b: &[f32; 4]) -> f32 {
    panic!("C implementation not compiled (requires a C compiler)")
}
