// SPDX-License-Identifier: MPL-2.0
//! Image records and the ordered list they form.
//!
//! `ImageList` is the source of truth for both the column layout and the
//! lightbox. Both treat it as read-only; insertion order is display order.

use std::collections::HashMap;
use std::fmt;

use crate::content::url::{self, ImageFormat};
use crate::error::{Error, Result};

/// Stable identifier of an image within a portfolio.
///
/// Lookup by id (rather than by reference or structural equality) is what
/// keeps `open` from resolving to an out-of-range index when the clicked
/// record and the list come from different renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(String);

impl ImageId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ImageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Immutable handle to one remote image asset.
///
/// Carries the identity and the metadata needed to derive display URLs at
/// arbitrary widths and formats. Owned by the loader, passed down by
/// reference; nothing in the core mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    id: ImageId,
    base_url: String,
    width: u32,
    height: u32,
    title: Option<String>,
}

impl ImageRecord {
    #[must_use]
    pub fn new(
        id: ImageId,
        base_url: impl Into<String>,
        width: u32,
        height: u32,
        title: Option<String>,
    ) -> Self {
        Self {
            id,
            base_url: base_url.into(),
            width,
            height,
            title,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ImageId {
        &self.id
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Intrinsic width in pixels, as reported by the content source.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Intrinsic height in pixels, as reported by the content source.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the aspect ratio (width / height).
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Fetchable URL for this image at the given display width and format.
    #[must_use]
    pub fn display_url(&self, width: u32, format: ImageFormat) -> String {
        url::display_url(&self.base_url, width, format)
    }
}

/// Ordered, indexable sequence of image records with stable-id lookup.
#[derive(Debug, Clone, Default)]
pub struct ImageList {
    records: Vec<ImageRecord>,
    by_id: HashMap<ImageId, usize>,
}

impl ImageList {
    /// Builds a list from records, preserving order.
    ///
    /// # Errors
    ///
    /// Returns `Error::Manifest` if two records share an id; a duplicate
    /// would make `index_of` ambiguous.
    pub fn new(records: Vec<ImageRecord>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if by_id.insert(record.id().clone(), index).is_some() {
                return Err(Error::Manifest(format!(
                    "duplicate image id: {}",
                    record.id()
                )));
            }
        }
        Ok(Self { records, by_id })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.records.get(index)
    }

    /// Position of the record with the given id, if present.
    #[must_use]
    pub fn index_of(&self, id: &ImageId) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    #[must_use]
    pub fn record_by_id(&self, id: &ImageId) -> Option<&ImageRecord> {
        self.index_of(id).and_then(|index| self.get(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ImageList {
    type Item = &'a ImageRecord;
    type IntoIter = std::slice::Iter<'a, ImageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
