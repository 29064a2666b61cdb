// SPDX-License-Identifier: MPL-2.0
//! JSON manifest describing a portfolio.
//!
//! The content pipeline publishes an ordered list of image records as JSON:
//!
//! ```json
//! { "images": [ { "id": "dunes-03", "url": "https://cdn...", "width": 3000,
//!                 "height": 2000, "title": "Dunes at dusk" } ] }
//! ```
//!
//! Order in the file is display order. The manifest can live on disk or
//! behind an http(s) URL.

use std::fs;

use serde::{Deserialize, Serialize};

use crate::content::types::{ImageId, ImageList, ImageRecord};
use crate::error::{Error, Result};

/// One image entry as it appears in the manifest file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub id: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Top-level manifest document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ManifestEntry>,
}

impl Manifest {
    /// Parses manifest JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::Manifest` when the document is not valid JSON or
    /// does not match the manifest shape.
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates every entry and builds the ordered image list.
    ///
    /// # Errors
    ///
    /// Returns `Error::Manifest` for an empty id or url, zero dimensions,
    /// or a duplicated id.
    pub fn into_list(self) -> Result<ImageList> {
        let mut records = Vec::with_capacity(self.images.len());
        for (position, entry) in self.images.into_iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(Error::Manifest(format!(
                    "image #{position} has an empty id"
                )));
            }
            if entry.url.trim().is_empty() {
                return Err(Error::Manifest(format!(
                    "image '{}' has an empty url",
                    entry.id
                )));
            }
            if entry.width == 0 || entry.height == 0 {
                return Err(Error::Manifest(format!(
                    "image '{}' has zero dimensions",
                    entry.id
                )));
            }
            records.push(ImageRecord::new(
                ImageId::new(entry.id),
                entry.url,
                entry.width,
                entry.height,
                entry.title,
            ));
        }
        ImageList::new(records)
    }
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Loads and validates a manifest from a local path or an http(s) URL.
///
/// # Errors
///
/// Returns `Error::Io` for unreadable files, `Error::Fetch` for transport
/// failures, and `Error::Manifest` for invalid content.
pub async fn load(client: &reqwest::Client, source: &str) -> Result<ImageList> {
    let json = if is_remote(source) {
        client
            .get(source)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?
    } else {
        let path = source.to_string();
        tokio::task::spawn_blocking(move || fs::read_to_string(&path))
            .await
            .unwrap_or_else(|e| {
                Err(std::io::Error::other(format!(
                    "Manifest read task failed: {e}"
                )))
            })?
    };
    Manifest::parse(&json)?.into_list()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "images": [
            { "id": "a", "url": "https://cdn.example.com/a", "width": 3000, "height": 2000 },
            { "id": "b", "url": "https://cdn.example.com/b", "width": 2000, "height": 3000,
              "title": "Vertical" }
        ]
    }"#;

    #[test]
    fn parse_valid_manifest() {
        let manifest = Manifest::parse(SAMPLE).unwrap();
        assert_eq!(manifest.images.len(), 2);
        assert_eq!(manifest.images[0].id, "a");
        assert_eq!(manifest.images[1].title.as_deref(), Some("Vertical"));
    }

    #[test]
    fn into_list_preserves_order_and_titles() {
        let list = Manifest::parse(SAMPLE).unwrap().into_list().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().id().as_str(), "a");
        assert_eq!(list.get(1).unwrap().title(), Some("Vertical"));
    }

    #[test]
    fn malformed_json_is_a_manifest_error() {
        let result = Manifest::parse("{ not json");
        assert!(matches!(result, Err(Error::Manifest(_))));
    }

    #[test]
    fn empty_id_is_rejected() {
        let json = r#"{ "images": [ { "id": "  ", "url": "https://x", "width": 1, "height": 1 } ] }"#;
        let result = Manifest::parse(json).unwrap().into_list();
        match result {
            Err(Error::Manifest(message)) => assert!(message.contains("empty id")),
            other => panic!("expected Manifest error, got {:?}", other),
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let json = r#"{ "images": [ { "id": "a", "url": "https://x", "width": 0, "height": 10 } ] }"#;
        let result = Manifest::parse(json).unwrap().into_list();
        match result {
            Err(Error::Manifest(message)) => assert!(message.contains("zero dimensions")),
            other => panic!("expected Manifest error, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_ids_are_rejected_at_list_construction() {
        let json = r#"{ "images": [
            { "id": "a", "url": "https://x", "width": 1, "height": 1 },
            { "id": "a", "url": "https://y", "width": 1, "height": 1 }
        ] }"#;
        let result = Manifest::parse(json).unwrap().into_list();
        assert!(matches!(result, Err(Error::Manifest(_))));
    }

    #[test]
    fn remote_detection_only_matches_http_schemes() {
        assert!(is_remote("https://example.com/manifest.json"));
        assert!(is_remote("http://example.com/manifest.json"));
        assert!(!is_remote("/var/portfolio/manifest.json"));
        assert!(!is_remote("manifest.json"));
    }

    #[test]
    fn empty_manifest_builds_empty_list() {
        let list = Manifest::parse(r#"{ "images": [] }"#)
            .unwrap()
            .into_list()
            .unwrap();
        assert!(list.is_empty());
    }
}
