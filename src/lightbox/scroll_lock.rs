// SPDX-License-Identifier: MPL-2.0
//! Scroll lock shared between the lightbox and the gallery scrollable.
//!
//! The gallery's scrollable consults the flag to swallow wheel events while
//! the overlay is up. Acquisition hands back an RAII guard, so the flag
//! cannot stay raised past the overlay's lifetime regardless of which path
//! closed it, teardown included.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared handle to the scroll-lock flag.
///
/// Clones observe the same flag. At most one guard exists at a time; the
/// lightbox is the only acquirer.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    locked: Arc<AtomicBool>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether scrolling is currently locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }

    /// Raises the flag. It stays raised until the returned guard drops.
    #[must_use]
    pub fn acquire(&self) -> ScrollLockGuard {
        self.locked.store(true, Ordering::Relaxed);
        ScrollLockGuard {
            locked: Arc::clone(&self.locked),
        }
    }
}

/// RAII guard holding the scroll lock.
#[derive(Debug)]
pub struct ScrollLockGuard {
    locked: Arc<AtomicBool>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.locked.store(false, Ordering::Relaxed);
    }
}
