// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::radius;
use crate::ui::theme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Flat gallery surface behind the grid.
pub fn surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::gallery_surface_color())),
        ..Default::default()
    }
}

/// Muted block standing in for a thumbnail that has not arrived yet.
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::placeholder_color())),
        text_color: Some(theme::muted_text_color()),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
