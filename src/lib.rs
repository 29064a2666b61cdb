// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a photography portfolio viewer built with the Iced GUI
//! framework.
//!
//! It renders a remote portfolio manifest as a responsive multi-column
//! gallery with a full-window lightbox, keyboard navigation, and neighbor
//! prefetching into a bounded image cache.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod content;
pub mod error;
pub mod gallery;
pub mod lightbox;
pub mod net;
pub mod ui;
