// SPDX-License-Identifier: MPL-2.0
//! HTTP fetch and decode of a single display URL.

use iced::widget::image::Handle;

use crate::error::{Error, Result};

/// A fetched and decoded image, ready for both display and caching.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    /// Display URL this image was fetched from.
    pub url: String,
    /// Renderer handle over the decoded pixels.
    pub handle: Handle,
    /// Decoded width in pixels.
    pub width: u32,
    /// Decoded height in pixels.
    pub height: u32,
    /// Decoded size estimate (RGBA bytes), used for cache accounting.
    pub size_bytes: usize,
}

impl FetchedImage {
    /// Builds a fetched image from raw RGBA pixels.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(url: String, width: u32, height: u32, rgba: Vec<u8>) -> Self {
        let size_bytes = (width as usize) * (height as usize) * 4;
        assert_eq!(
            rgba.len(),
            size_bytes,
            "RGBA data length mismatch: expected {size_bytes}, got {}",
            rgba.len()
        );
        Self {
            url,
            handle: Handle::from_rgba(width, height, rgba),
            width,
            height,
            size_bytes,
        }
    }
}

/// Fetches and decodes one image.
///
/// This is the async function behind both visible loads and prefetch
/// tasks. Returns the URL alongside the result so completions can be
/// matched against current state.
pub async fn fetch_image(client: reqwest::Client, url: String) -> (String, Result<FetchedImage>) {
    let result = fetch_and_decode(&client, &url).await;
    (url, result)
}

async fn fetch_and_decode(client: &reqwest::Client, url: &str) -> Result<FetchedImage> {
    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;

    let owned_url = url.to_string();
    tokio::task::spawn_blocking(move || decode(&owned_url, &bytes))
        .await
        .unwrap_or_else(|e| Err(Error::Decode(format!("Decode task failed: {e}"))))
}

fn decode(url: &str, bytes: &[u8]) -> Result<FetchedImage> {
    let decoded = image_rs::load_from_memory(bytes)
        .map_err(|e| Error::Decode(format!("{url}: {e}")))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(FetchedImage::from_rgba(
        url.to_string(),
        width,
        height,
        rgba.into_raw(),
    ))
}
