// SPDX-License-Identifier: MPL-2.0
//! Styles for the lightbox backdrop, indicators, and banners.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn chip_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

fn chip_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Near-opaque layer separating the lightbox from the grid beneath it.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Generic style for small overlay chips like the position counter and the
/// image title.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(chip_background())),
        text_color: Some(WHITE),
        border: Border {
            color: chip_border(),
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Centered panel carrying a fetch failure message.
pub fn banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(chip_background())),
        text_color: Some(WHITE),
        border: Border {
            color: chip_border(),
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
