// SPDX-License-Identifier: MPL-2.0
//! Portfolio content types.
//!
//! This module contains the image records that make up a portfolio, the
//! ordered list they live in, the JSON manifest they are loaded from, and
//! the display-URL scheme of the image CDN. Everything here is independent
//! of presentation concerns.

pub mod manifest;
pub mod types;
pub mod url;

// Re-export commonly used types
pub use manifest::Manifest;
pub use types::{ImageId, ImageList, ImageRecord};
pub use url::{display_url, ImageFormat, DISPLAY_WIDTHS, GRID_WIDTH, LIGHTBOX_WIDTH};
