// SPDX-License-Identifier: MPL-2.0
//! Lightbox controller: open/close/navigate over the image list.
//!
//! Two states only: `Closed` (initial) and `Open(index)` with the index
//! always inside the list. `next`/`prev`/`close` while closed are safe
//! no-ops. The scroll lock is held exactly while open and released through
//! the RAII guard on every exit path, including drop of the controller.

use crate::content::{ImageId, ImageList};
use crate::error::{Error, Result};
use crate::lightbox::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Snapshot of lightbox state for UI rendering.
///
/// Contains everything the overlay needs without direct access to the
/// controller or the image list.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightboxInfo {
    /// Whether the overlay is visible at all.
    pub open: bool,
    /// Index of the displayed image, if open.
    pub current_index: Option<usize>,
    /// Total number of images in the list.
    pub total_count: usize,
    /// Whether the displayed image is still being fetched.
    pub loading: bool,
    /// Whether navigation arrows make sense (more than one image).
    pub has_neighbors: bool,
}

/// Owns the "currently focused image" state and mediates all transitions.
#[derive(Debug)]
pub struct Lightbox {
    current: Option<usize>,
    loading: bool,
    load_error: Option<String>,
    scroll_lock: ScrollLock,
    lock_guard: Option<ScrollLockGuard>,
}

impl Lightbox {
    /// Creates a closed controller sharing the given scroll lock.
    #[must_use]
    pub fn new(scroll_lock: ScrollLock) -> Self {
        Self {
            current: None,
            loading: false,
            load_error: None,
            scroll_lock,
            lock_guard: None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Index of the displayed image, if open.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed load of the displayed image, if any.
    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Opens the lightbox on the image with the given id.
    ///
    /// Resolves the id against the list rather than trusting the caller
    /// with an index, so a record from a stale render cannot open an
    /// out-of-range position. Opening while already open moves to the new
    /// image without re-acquiring the lock.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyGallery` for an empty list and
    /// `Error::ImageNotFound` when the id is absent. State is unchanged in
    /// both cases.
    pub fn open(&mut self, list: &ImageList, id: &ImageId) -> Result<usize> {
        if list.is_empty() {
            return Err(Error::EmptyGallery);
        }
        let index = list
            .index_of(id)
            .ok_or_else(|| Error::ImageNotFound(id.to_string()))?;

        self.current = Some(index);
        self.loading = true;
        self.load_error = None;
        if self.lock_guard.is_none() {
            self.lock_guard = Some(self.scroll_lock.acquire());
        }
        Ok(index)
    }

    /// Advances to the next image, wrapping from the last to the first.
    ///
    /// No-op while closed. Returns the new index when the displayed image
    /// actually changed; with a single image the position stays put and
    /// `None` is returned so the caller does not re-fetch.
    pub fn next(&mut self, list: &ImageList) -> Option<usize> {
        self.navigate(list, |current, len| (current + 1) % len)
    }

    /// Moves to the previous image, wrapping from the first to the last.
    ///
    /// Same no-op and return semantics as [`Self::next`].
    pub fn prev(&mut self, list: &ImageList) -> Option<usize> {
        self.navigate(list, |current, len| (current + len - 1) % len)
    }

    fn navigate(
        &mut self,
        list: &ImageList,
        step: impl Fn(usize, usize) -> usize,
    ) -> Option<usize> {
        let current = self.current?;
        let len = list.len();
        if len == 0 {
            return None;
        }
        let target = step(current, len);
        if target == current {
            return None;
        }
        self.current = Some(target);
        self.loading = true;
        self.load_error = None;
        Some(target)
    }

    /// Closes the lightbox and releases the scroll lock.
    ///
    /// Idempotent; closing an already-closed controller does nothing.
    pub fn close(&mut self) {
        self.current = None;
        self.loading = false;
        self.load_error = None;
        // Dropping the guard lowers the shared flag.
        self.lock_guard = None;
    }

    /// Consumes a load-completion signal for `index`.
    ///
    /// Clears the loading flag only when `index` is the image currently
    /// shown; completions for a superseded index are stale and ignored.
    /// Returns whether the signal was accepted.
    pub fn image_loaded(&mut self, index: usize) -> bool {
        if self.current == Some(index) {
            self.loading = false;
            self.load_error = None;
            true
        } else {
            false
        }
    }

    /// Consumes a load-failure signal for `index`, with the same staleness
    /// guard as [`Self::image_loaded`].
    pub fn image_load_failed(&mut self, index: usize, message: String) -> bool {
        if self.current == Some(index) {
            self.loading = false;
            self.load_error = Some(message);
            true
        } else {
            false
        }
    }

    /// Indices to warm ahead of navigation: the next and previous
    /// neighbors of the displayed image, deduplicated.
    ///
    /// Empty while closed and for lists too short to have neighbors.
    #[must_use]
    pub fn neighbor_indices(&self, list: &ImageList) -> Vec<usize> {
        let Some(current) = self.current else {
            return Vec::new();
        };
        let len = list.len();
        if len < 2 {
            return Vec::new();
        }
        let next = (current + 1) % len;
        let prev = (current + len - 1) % len;
        let mut neighbors = vec![next];
        if prev != next {
            neighbors.push(prev);
        }
        neighbors
    }

    /// Returns a snapshot of the current state for UI rendering.
    #[must_use]
    pub fn info(&self, list: &ImageList) -> LightboxInfo {
        LightboxInfo {
            open: self.is_open(),
            current_index: self.current,
            total_count: list.len(),
            loading: self.loading,
            has_neighbors: list.len() > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ImageRecord;

    fn list_of(ids: &[&str]) -> ImageList {
        let records = ids
            .iter()
            .map(|id| {
                ImageRecord::new(
                    ImageId::from(*id),
                    format!("https://cdn.example.com/{id}"),
                    3000,
                    2000,
                    None,
                )
            })
            .collect();
        ImageList::new(records).unwrap()
    }

    fn open_lightbox(list: &ImageList, id: &str) -> (ScrollLock, Lightbox) {
        let lock = ScrollLock::new();
        let mut lightbox = Lightbox::new(lock.clone());
        lightbox.open(list, &ImageId::from(id)).expect("open failed");
        (lock, lightbox)
    }

    #[test]
    fn new_lightbox_is_closed() {
        let lightbox = Lightbox::new(ScrollLock::new());
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current_index(), None);
        assert!(!lightbox.is_loading());
    }

    #[test]
    fn open_resolves_index_by_id() {
        let list = list_of(&["A", "B", "C", "D", "E"]);
        let (lock, lightbox) = open_lightbox(&list, "C");
        assert_eq!(lightbox.current_index(), Some(2));
        assert!(lightbox.is_loading());
        assert!(lock.is_locked());
    }

    #[test]
    fn open_unknown_id_fails_and_leaves_closed_state_unchanged() {
        let list = list_of(&["A", "B"]);
        let lock = ScrollLock::new();
        let mut lightbox = Lightbox::new(lock.clone());

        let result = lightbox.open(&list, &ImageId::from("missing"));
        assert!(matches!(result, Err(Error::ImageNotFound(_))));
        assert!(!lightbox.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn open_unknown_id_leaves_previously_open_index_unchanged() {
        let list = list_of(&["A", "B", "C"]);
        let (lock, mut lightbox) = open_lightbox(&list, "B");

        let result = lightbox.open(&list, &ImageId::from("missing"));
        assert!(matches!(result, Err(Error::ImageNotFound(_))));
        assert_eq!(lightbox.current_index(), Some(1));
        assert!(lock.is_locked());
    }

    #[test]
    fn open_on_empty_gallery_is_rejected() {
        let list = list_of(&[]);
        let mut lightbox = Lightbox::new(ScrollLock::new());
        let result = lightbox.open(&list, &ImageId::from("anything"));
        assert!(matches!(result, Err(Error::EmptyGallery)));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn next_walks_forward_and_wraps_to_the_start() {
        let list = list_of(&["A", "B", "C", "D", "E"]);
        let (_lock, mut lightbox) = open_lightbox(&list, "C");

        assert_eq!(lightbox.next(&list), Some(3));
        assert_eq!(lightbox.next(&list), Some(4));
        assert_eq!(lightbox.next(&list), Some(0));
        assert_eq!(lightbox.current_index(), Some(0));
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let list = list_of(&["A", "B", "C"]);
        let (_lock, mut lightbox) = open_lightbox(&list, "A");

        assert_eq!(lightbox.prev(&list), Some(2));
        assert_eq!(lightbox.current_index(), Some(2));
    }

    #[test]
    fn navigation_while_closed_is_a_no_op() {
        let list = list_of(&["A", "B"]);
        let mut lightbox = Lightbox::new(ScrollLock::new());

        assert_eq!(lightbox.next(&list), None);
        assert_eq!(lightbox.prev(&list), None);
        assert!(!lightbox.is_open());
        assert!(!lightbox.is_loading());
    }

    #[test]
    fn close_is_idempotent() {
        let list = list_of(&["A"]);
        let (lock, mut lightbox) = open_lightbox(&list, "A");

        lightbox.close();
        assert!(!lightbox.is_open());
        assert!(!lock.is_locked());

        lightbox.close();
        assert!(!lightbox.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn scroll_lock_is_held_iff_open() {
        let list = list_of(&["A", "B", "C"]);
        let lock = ScrollLock::new();
        let mut lightbox = Lightbox::new(lock.clone());
        assert!(!lock.is_locked());

        lightbox.open(&list, &ImageId::from("A")).unwrap();
        assert!(lock.is_locked());

        lightbox.next(&list);
        lightbox.prev(&list);
        assert!(lock.is_locked());

        lightbox.close();
        assert!(!lock.is_locked());

        lightbox.open(&list, &ImageId::from("C")).unwrap();
        assert!(lock.is_locked());
    }

    #[test]
    fn dropping_an_open_lightbox_releases_the_lock() {
        let list = list_of(&["A", "B"]);
        let (lock, lightbox) = open_lightbox(&list, "A");
        assert!(lock.is_locked());
        drop(lightbox);
        assert!(!lock.is_locked());
    }

    #[test]
    fn reopening_moves_without_stacking_locks() {
        let list = list_of(&["A", "B", "C"]);
        let (lock, mut lightbox) = open_lightbox(&list, "A");

        lightbox.open(&list, &ImageId::from("C")).unwrap();
        assert_eq!(lightbox.current_index(), Some(2));
        assert!(lock.is_locked());

        lightbox.close();
        assert!(!lock.is_locked());
    }

    #[test]
    fn single_image_navigation_stays_put() {
        let list = list_of(&["only"]);
        let (_lock, mut lightbox) = open_lightbox(&list, "only");
        lightbox.image_loaded(0);

        assert_eq!(lightbox.next(&list), None);
        assert_eq!(lightbox.prev(&list), None);
        assert_eq!(lightbox.current_index(), Some(0));
        // No fresh load was requested, so the flag stays clear.
        assert!(!lightbox.is_loading());
    }

    #[test]
    fn image_loaded_clears_loading_for_the_current_index() {
        let list = list_of(&["A", "B"]);
        let (_lock, mut lightbox) = open_lightbox(&list, "A");
        assert!(lightbox.is_loading());

        assert!(lightbox.image_loaded(0));
        assert!(!lightbox.is_loading());
    }

    #[test]
    fn stale_load_completion_is_ignored() {
        let list = list_of(&["A", "B", "C"]);
        let (_lock, mut lightbox) = open_lightbox(&list, "A");

        // Navigate away before the load for index 0 finishes.
        lightbox.next(&list);
        assert!(!lightbox.image_loaded(0));
        assert!(lightbox.is_loading());

        assert!(lightbox.image_loaded(1));
        assert!(!lightbox.is_loading());
    }

    #[test]
    fn stale_load_failure_is_ignored() {
        let list = list_of(&["A", "B"]);
        let (_lock, mut lightbox) = open_lightbox(&list, "A");
        lightbox.next(&list);

        assert!(!lightbox.image_load_failed(0, "timeout".into()));
        assert!(lightbox.load_error().is_none());

        assert!(lightbox.image_load_failed(1, "timeout".into()));
        assert_eq!(lightbox.load_error(), Some("timeout"));
    }

    #[test]
    fn navigation_clears_a_previous_load_error() {
        let list = list_of(&["A", "B"]);
        let (_lock, mut lightbox) = open_lightbox(&list, "A");
        lightbox.image_load_failed(0, "timeout".into());
        assert!(lightbox.load_error().is_some());

        lightbox.next(&list);
        assert!(lightbox.load_error().is_none());
    }

    #[test]
    fn neighbor_indices_wrap_around_the_ends() {
        let list = list_of(&["A", "B", "C", "D", "E"]);
        let (_lock, mut lightbox) = open_lightbox(&list, "A");
        assert_eq!(lightbox.neighbor_indices(&list), vec![1, 4]);

        lightbox.close();
        lightbox.open(&list, &ImageId::from("E")).unwrap();
        assert_eq!(lightbox.neighbor_indices(&list), vec![0, 3]);
    }

    #[test]
    fn neighbor_indices_deduplicate_for_two_images() {
        let list = list_of(&["A", "B"]);
        let (_lock, lightbox) = open_lightbox(&list, "A");
        assert_eq!(lightbox.neighbor_indices(&list), vec![1]);
    }

    #[test]
    fn neighbor_indices_empty_while_closed_or_alone() {
        let pair = list_of(&["A", "B"]);
        let lightbox = Lightbox::new(ScrollLock::new());
        assert!(lightbox.neighbor_indices(&pair).is_empty());

        let single = list_of(&["only"]);
        let (_lock, open_single) = open_lightbox(&single, "only");
        assert!(open_single.neighbor_indices(&single).is_empty());
    }

    #[test]
    fn info_snapshot_reflects_state() {
        let list = list_of(&["A", "B", "C"]);
        let (_lock, mut lightbox) = open_lightbox(&list, "B");

        let info = lightbox.info(&list);
        assert!(info.open);
        assert_eq!(info.current_index, Some(1));
        assert_eq!(info.total_count, 3);
        assert!(info.loading);
        assert!(info.has_neighbors);

        lightbox.close();
        let closed = lightbox.info(&list);
        assert!(!closed.open);
        assert_eq!(closed.current_index, None);
    }
}
