// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay: backdrop, focused image, navigation, and indicators.
//!
//! Rendered as a stack of layers above the gallery grid. The view reads a
//! [`LightboxInfo`] snapshot plus whatever image the application has
//! already fetched; it never talks to the controller and never issues
//! fetches of its own.

use crate::app::Message;
use crate::content::ImageRecord;
use crate::lightbox::LightboxInfo;
use crate::net::FetchedImage;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, Column, Container, Image, Space, Stack, Text};
use iced::{Element, Length, Padding};

/// Everything the overlay borrows from application state.
pub struct OverlayContext<'a> {
    pub info: LightboxInfo,
    /// Record of the focused image, for the title chip.
    pub record: Option<&'a ImageRecord>,
    /// Lightbox-width image, once fetched. During navigation this may
    /// still hold the previous image; the loading layer sits on top of it
    /// until the fresh fetch lands.
    pub image: Option<&'a FetchedImage>,
    pub load_error: Option<&'a str>,
    pub spinner_rotation: f32,
}

pub fn view(ctx: OverlayContext<'_>) -> Element<'_, Message> {
    let mut stack = Stack::new().push(backdrop());

    if let Some(image) = ctx.image {
        stack = stack.push(content_layer(image));
    }

    if ctx.info.loading {
        stack = stack.push(loading_layer(ctx.spinner_rotation));
    }

    if let Some(message) = ctx.load_error {
        stack = stack.push(error_layer(message));
    }

    if ctx.info.has_neighbors {
        stack = stack.push(arrow_layer(Side::Previous));
        stack = stack.push(arrow_layer(Side::Next));
    }

    stack = stack.push(close_layer());

    if ctx.info.has_neighbors {
        if let Some(current) = ctx.info.current_index {
            stack = stack.push(counter_layer(current, ctx.info.total_count));
        }
    }

    if let Some(title) = ctx.record.and_then(ImageRecord::title) {
        stack = stack.push(title_layer(title));
    }

    stack.into()
}

/// Near-opaque layer under everything else. Presses that no control above
/// captured land here and close the lightbox, so clicks can never reach
/// the grid through the overlay.
fn backdrop<'a>() -> Element<'a, Message> {
    let surface = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop);

    mouse_area(surface)
        .on_press(Message::LightboxClosed)
        .into()
}

fn content_layer<'a>(image: &FetchedImage) -> Element<'a, Message> {
    // Contain fit keeps the aspect ratio and letterboxes inside the
    // padded area, leaving the arrow zones clear of the photograph.
    Container::new(
        Image::new(image.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG)
    .into()
}

fn loading_layer<'a>(spinner_rotation: f32) -> Element<'a, Message> {
    let spinner =
        AnimatedSpinner::new(theme::overlay_text_color(), spinner_rotation).into_element();

    let caption = Text::new("Loading image…").size(typography::BODY);

    let card = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(spinner)
            .push(caption),
    )
    .padding(spacing::MD)
    .style(styles::overlay::indicator(radius::MD));

    centered(card)
}

fn error_layer(message: &str) -> Element<'_, Message> {
    let heading = Text::new("Could not load image")
        .size(typography::TITLE_MD)
        .color(theme::error_text_color());

    let detail = Text::new(message).size(typography::BODY);

    let card = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(heading)
            .push(detail),
    )
    .padding(spacing::LG)
    .max_width(400.0)
    .style(styles::overlay::banner);

    centered(card)
}

#[derive(Clone, Copy)]
enum Side {
    Previous,
    Next,
}

fn navigation_message(side: Side) -> Message {
    match side {
        Side::Previous => Message::NavigatePrevious,
        Side::Next => Message::NavigateNext,
    }
}

fn arrow_layer<'a>(side: Side) -> Element<'a, Message> {
    let (glyph, align) = match side {
        Side::Previous => ("◀", Horizontal::Left),
        Side::Next => ("▶", Horizontal::Right),
    };

    let arrow = button(Text::new(glyph).size(typography::TITLE_LG))
        .padding(spacing::SM)
        .style(styles::button_overlay(theme::overlay_text_color(), 0.0, 0.5))
        .on_press(navigation_message(side));

    let zone = Container::new(arrow)
        .width(Length::Fixed(sizing::ARROW_ZONE_WIDTH))
        .height(Length::Fill)
        .padding(spacing::SM)
        .align_x(align)
        .align_y(Vertical::Center);

    // The whole zone is clickable, not just the glyph. Presses over the
    // glyph are captured by the button before they reach the zone.
    let clickable_zone = mouse_area(zone).on_press(navigation_message(side));

    Container::new(clickable_zone)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align)
        .into()
}

fn close_layer<'a>() -> Element<'a, Message> {
    let close = button(Text::new("✕").size(typography::TITLE_MD))
        .padding(spacing::SM)
        .style(styles::button_overlay(theme::overlay_text_color(), 0.0, 0.5))
        .on_press(Message::LightboxClosed);

    Container::new(close)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::SM)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .into()
}

fn counter_layer<'a>(current: usize, total: usize) -> Element<'a, Message> {
    let counter = Container::new(
        Text::new(format!("{} / {}", current + 1, total)).size(typography::BODY),
    )
    .padding(Padding {
        top: spacing::XXS,
        right: spacing::XS,
        bottom: spacing::XXS,
        left: spacing::XS,
    })
    .style(styles::overlay::indicator(radius::FULL));

    Container::new(counter)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::SM)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .into()
}

fn title_layer(title: &str) -> Element<'_, Message> {
    let chip = Container::new(Text::new(title).size(typography::CAPTION))
        .padding(Padding {
            top: spacing::XXS,
            right: spacing::XS,
            bottom: spacing::XXS,
            left: spacing::XS,
        })
        .style(styles::overlay::indicator(radius::SM));

    Container::new(chip)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::SM)
        .align_x(Horizontal::Left)
        .align_y(Vertical::Bottom)
        .into()
}

fn centered<'a>(
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
