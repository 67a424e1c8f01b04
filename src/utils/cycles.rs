//! Cycle counter access for the `cpu_cycles` measurement mode.
//!
//! x86/x86_64 read the TSC fenced by LFENCE; aarch64 reads the virtual
//! counter CNTVCT_EL0, which ticks at a fixed frequency rather than per cycle.

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn read_cycles() -> u64 {
    use core::arch::x86_64::{_mm_lfence, _rdtsc};
    // SAFETY: LFENCE and RDTSC are available on every x86_64 CPU.
    unsafe {
        _mm_lfence();
        let t = _rdtsc();
        _mm_lfence();
        t
    }
}

#[cfg(target_arch = "x86")]
#[inline(always)]
pub fn read_cycles() -> u64 {
    use core::arch::x86::{_mm_lfence, _rdtsc};
    // SAFETY: requires SSE2, which the cpu_cycles feature assumes on x86.
    unsafe {
        _mm_lfence();
        let t = _rdtsc();
        _mm_lfence();
        t
    }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
pub fn read_cycles() -> u64 {
    let val: u64;
    // SAFETY: CNTVCT_EL0 is readable from EL0.
    unsafe {
        core::arch::asm!("isb", "mrs {}, cntvct_el0", out(reg) val);
    }
    val
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
compile_error!("cpu_cycles feature requires x86, x86_64, or aarch64; build with --features use_time");
