// SPDX-License-Identifier: MPL-2.0
//! Remote image fetching and the URL-keyed cache in front of it.
//!
//! Every image the app shows comes over HTTP from the portfolio CDN. The
//! cache keeps decoded images keyed by their exact display URL, so the
//! lightbox and neighbor prefetch share one pool; grid thumbnails are
//! stored separately and never evicted.

pub mod cache;
pub mod fetch;

// Re-export commonly used types
pub use cache::{CacheConfig, CacheStats, ImageCache};
pub use fetch::{fetch_image, FetchedImage};
