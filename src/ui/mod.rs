// SPDX-License-Identifier: MPL-2.0
//! User interface views and styling.
//!
//! This module organizes all UI-related code following the Elm-style
//! "state down, messages up" pattern.
//!
//! # Views
//!
//! - [`grid`] - Gallery grid of thumbnails in responsive columns
//! - [`overlay`] - Lightbox overlay with navigation and indicators
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner, scroll gate)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Theme colors and styling helpers

pub mod design_tokens;
pub mod grid;
pub mod overlay;
pub mod styles;
pub mod theme;
pub mod widgets;
