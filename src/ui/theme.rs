// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the gallery grid and the lightbox overlay.

use crate::ui::design_tokens::palette::{self, GRAY_400, GRAY_800, GRAY_900, WHITE};
use iced::Color;

/// Background color of the gallery surface.
pub fn gallery_surface_color() -> Color {
    GRAY_900
}

/// Background color of thumbnail placeholders while fetches are in flight.
pub fn placeholder_color() -> Color {
    GRAY_800
}

/// Color for overlay text and navigation arrows on the dark backdrop.
pub fn overlay_text_color() -> Color {
    WHITE
}

/// Standard color for error text.
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    GRAY_400
}
