//! CPU affinity wrapper for thread pinning during measurements.
//!
//! Pinning to the current core keeps the scheduler from migrating the
//! thread mid-sample, which would distort cycle-counter readings.
//! Implemented with libc on Linux; a no-op on other platforms.

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;

    thread_local! {
        static ORIGINAL_AFFINITY: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    /// Get the current CPU core the thread is running on
    pub fn get_current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        if cpu >= 0 {
            Some(cpu as usize)
        } else {
            None
        }
    }

    /// Save the current CPU affinity mask
    pub fn save_affinity() -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) == 0 {
                ORIGINAL_AFFINITY.with(|cell| {
                    *cell.borrow_mut() = Some(set);
                });
                true
            } else {
                false
            }
        }
    }

    /// Pin the thread to a specific core
    pub fn set_affinity(core_id: usize) -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    /// Restore the original CPU affinity (unpin)
    pub fn restore_affinity() -> bool {
        ORIGINAL_AFFINITY.with(|cell| {
            if let Some(set) = cell.borrow_mut().take() {
                unsafe {
                    libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
                }
            } else {
                false
            }
        })
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn get_current_cpu() -> Option<usize> {
        None
    }

    pub fn save_affinity() -> bool {
        false
    }

    pub fn set_affinity(_core_id: usize) -> bool {
        false
    }

    pub fn restore_affinity() -> bool {
        false
    }
}

/// Pin the calling thread to the core it is currently running on.
///
/// Returns `true` if pinning took effect.
pub fn pin_to_current_core() -> bool {
    let core = match platform::get_current_cpu() {
        Some(c) => c,
        None => return false,
    };
    if !platform::save_affinity() {
        return false;
    }
    platform::set_affinity(core)
}

/// Restore the affinity mask saved by [`pin_to_current_core`].
pub fn unpin() -> bool {
    platform::restore_affinity()
}

/// RAII guard: pins on construction, unpins on drop.
pub struct CpuPinGuard {
    pinned: bool,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        Self {
            pinned: pin_to_current_core(),
        }
    }

    /// Whether the pin actually took effect
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned {
            unpin();
        }
    }
}
