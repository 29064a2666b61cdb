// SPDX-License-Identifier: MPL-2.0
//! Lightbox state and the scroll lock it holds while open.
//!
//! The controller owns the single piece of UI state "currently focused
//! image" and mediates every transition. The view layer renders from a
//! [`LightboxInfo`] snapshot and never touches the state directly.

pub mod controller;
pub mod scroll_lock;

// Re-export commonly used types
pub use controller::{Lightbox, LightboxInfo};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
