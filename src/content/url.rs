// SPDX-License-Identifier: MPL-2.0
//! Display-URL construction for the image CDN.
//!
//! The CDN serves any asset at an arbitrary width and format through query
//! parameters on its base URL: `{base}?w={width}&fm={format}`. The core
//! treats this as a pure function and never inspects the result.

use serde::{Deserialize, Serialize};

/// Width ladder the CDN is asked for, smallest to largest.
///
/// The grid requests the smallest rung, the lightbox the largest; prefetch
/// warms the lightbox rung so navigation hits the cache.
pub const DISPLAY_WIDTHS: [u32; 3] = [800, 1400, 1920];

/// Width requested for gallery thumbnails.
pub const GRID_WIDTH: u32 = DISPLAY_WIDTHS[0];

/// Width requested for the lightbox image and neighbor prefetch.
pub const LIGHTBOX_WIDTH: u32 = DISPLAY_WIDTHS[2];

/// Delivery format requested from the CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageFormat {
    Webp,
    Jpg,
}

impl Default for ImageFormat {
    fn default() -> Self {
        ImageFormat::Webp
    }
}

impl ImageFormat {
    /// Value of the `fm` query parameter.
    #[must_use]
    pub fn query_value(self) -> &'static str {
        match self {
            ImageFormat::Webp => "webp",
            ImageFormat::Jpg => "jpg",
        }
    }
}

/// Builds the fetchable URL for `base_url` at the given width and format.
#[must_use]
pub fn display_url(base_url: &str, width: u32, format: ImageFormat) -> String {
    format!("{}?w={}&fm={}", base_url, width, format.query_value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_url_appends_width_and_format() {
        let url = display_url("https://cdn.example.com/img/abc", 1400, ImageFormat::Webp);
        assert_eq!(url, "https://cdn.example.com/img/abc?w=1400&fm=webp");
    }

    #[test]
    fn display_url_jpg_fallback() {
        let url = display_url("https://cdn.example.com/img/abc", 800, ImageFormat::Jpg);
        assert_eq!(url, "https://cdn.example.com/img/abc?w=800&fm=jpg");
    }

    #[test]
    fn width_ladder_is_ascending() {
        assert!(DISPLAY_WIDTHS.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(GRID_WIDTH, 800);
        assert_eq!(LIGHTBOX_WIDTH, 1920);
    }

    #[test]
    fn format_serde_uses_kebab_case() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            format: ImageFormat,
        }
        let parsed: Wrapper = toml::from_str("format = \"jpg\"").unwrap();
        assert_eq!(parsed.format, ImageFormat::Jpg);
        let serialized = toml::to_string(&Wrapper {
            format: ImageFormat::Webp,
        })
        .unwrap();
        assert_eq!(serialized.trim(), "format = \"webp\"");
    }
}
