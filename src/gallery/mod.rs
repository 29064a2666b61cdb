// SPDX-License-Identifier: MPL-2.0
//! Gallery column layout.
//!
//! Partitions the ordered image list into display columns. The partition is
//! a pure function of the list and the resolved column count; the column
//! count itself comes from the window width via named breakpoints.

pub mod breakpoint;
pub mod layout;

// Re-export commonly used types
pub use breakpoint::{Breakpoint, ColumnsTable, LARGE_MIN_WIDTH, MEDIUM_MIN_WIDTH};
pub use layout::{compute_columns, DistributionStrategy};
