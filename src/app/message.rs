// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::content::{ImageId, ImageList};
use crate::error::Error;
use crate::net::FetchedImage;

/// Top-level messages consumed by `App::update`. Fetch results carry the
/// URL they were issued for so completions can be matched against the
/// state that requested them.
#[derive(Debug, Clone)]
pub enum Message {
    /// Result of loading and validating the portfolio manifest.
    ManifestLoaded(Result<ImageList, Error>),
    /// A gallery thumbnail was clicked.
    ThumbnailClicked(ImageId),
    /// The lightbox close button or backdrop was activated.
    LightboxClosed,
    /// Advance the lightbox to the next image.
    NavigateNext,
    /// Step the lightbox back to the previous image.
    NavigatePrevious,
    /// Result of fetching the image the lightbox is waiting on.
    /// `index` is the gallery position the fetch was issued for; a
    /// completion for an index other than the open one is stale.
    ImageFetched {
        url: String,
        index: usize,
        result: Result<FetchedImage, Error>,
    },
    /// Result of fetching a grid thumbnail.
    ThumbnailFetched {
        url: String,
        result: Result<FetchedImage, Error>,
    },
    /// Result of a fire-and-forget neighbor prefetch.
    PrefetchDone {
        url: String,
        result: Result<FetchedImage, Error>,
    },
    /// The window was resized; the grid may need a different column count.
    WindowResized(iced::Size),
    /// Unhandled native event, used for the lightbox keyboard shortcuts.
    RawEvent(iced::event::Event),
    /// Animation tick driving the loading spinner while a fetch is pending.
    Tick(std::time::Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional manifest path or URL, overriding the configured one.
    pub manifest: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
