//! Thread pinning for stable measurements.
//!
//! On Linux the thread is pinned with `sched_setaffinity` and the previous
//! mask is restored when the guard drops. Elsewhere pinning is a no-op and
//! the guard reports that it is not pinned.

#[cfg(target_os = "linux")]
mod platform {
    use std::mem::{size_of, zeroed};

    pub struct Saved(libc::cpu_set_t);

    pub fn current_cpu() -> Option<usize> {
        // SAFETY: sched_getcpu has no preconditions.
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    pub fn pin(core: usize) -> Option<Saved> {
        // SAFETY: cpu_set_t is plain data; the pointers are valid for the calls.
        unsafe {
            let mut saved: libc::cpu_set_t = zeroed();
            if libc::sched_getaffinity(0, size_of::<libc::cpu_set_t>(), &mut saved) != 0 {
                return None;
            }
            let mut set: libc::cpu_set_t = zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core, &mut set);
            if libc::sched_setaffinity(0, size_of::<libc::cpu_set_t>(), &set) != 0 {
                return None;
            }
            Some(Saved(saved))
        }
    }

    pub fn restore(saved: &Saved) {
        // SAFETY: `saved` holds a mask previously returned by the kernel.
        unsafe {
            libc::sched_setaffinity(0, size_of::<libc::cpu_set_t>(), &saved.0);
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub struct Saved;

    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn pin(_core: usize) -> Option<Saved> {
        None
    }

    pub fn restore(_saved: &Saved) {}
}

/// RAII guard: pins the thread to the core it is running on, unpins on drop.
pub struct CpuPinGuard {
    core: Option<usize>,
    saved: Option<platform::Saved>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        let core = platform::current_cpu().unwrap_or(0);
        match platform::pin(core) {
            Some(saved) => Self {
                core: Some(core),
                saved: Some(saved),
            },
            None => Self {
                core: None,
                saved: None,
            },
        }
    }

    /// Core the thread is pinned to, if pinning succeeded.
    pub fn core_id(&self) -> Option<usize> {
        self.core
    }

    pub fn is_pinned(&self) -> bool {
        self.core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            platform::restore(&saved);
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_guard() {
        let guard = CpuPinGuard::new();
        assert_eq!(guard.is_pinned(), guard.core_id().is_some());
        drop(guard);
    }

    #[test]
    fn test_nested_guards() {
        let outer = CpuPinGuard::new();
        {
            let inner = CpuPinGuard::new();
            if outer.is_pinned() {
                assert_eq!(inner.core_id(), outer.core_id());
            }
        }
    }
}
