// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for overlay buttons (navigation arrows, close control).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border::default(),
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Style for gallery thumbnail cells.
///
/// Transparent at rest so the photograph is the whole surface; a faint
/// white wash on hover marks the cell as clickable.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let wash = match status {
        button::Status::Hovered => 0.08,
        button::Status::Pressed => 0.14,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color { a: wash, ..WHITE })),
        text_color: WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
