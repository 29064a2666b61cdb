// SPDX-License-Identifier: MPL-2.0
//! Gallery grid view: thumbnails partitioned into responsive columns.
//!
//! The grid renders whatever the layout engine computed; it never
//! re-partitions on its own. Cells whose thumbnail has not arrived yet get
//! a placeholder sized from the record's aspect ratio, so columns keep
//! their final height while fetches are in flight.

use std::collections::HashMap;

use crate::app::Message;
use crate::content::{ImageFormat, ImageList, ImageRecord, GRID_WIDTH};
use crate::lightbox::ScrollLock;
use crate::net::FetchedImage;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::widgets::{scroll_gate, AnimatedSpinner};
use iced::widget::{button, Column, Container, Image, Row, Scrollable, Space, Text};
use iced::{alignment, Element, Length};

/// Everything the grid view borrows from application state.
pub struct GridContext<'a> {
    pub images: &'a ImageList,
    pub columns: &'a [Vec<usize>],
    pub thumbnails: &'a HashMap<String, FetchedImage>,
    pub image_format: ImageFormat,
    /// Width one column occupies, derived from the window size upstream.
    pub column_width: f32,
    pub scroll_lock: ScrollLock,
}

pub fn view(ctx: GridContext<'_>) -> Element<'_, Message> {
    let images = ctx.images;
    let thumbnails = ctx.thumbnails;
    let image_format = ctx.image_format;
    let column_width = ctx.column_width;

    let mut row = Row::new().spacing(spacing::GRID_GUTTER);
    for column_indices in ctx.columns {
        let mut column = Column::new()
            .spacing(spacing::GRID_GUTTER)
            .width(Length::FillPortion(1));
        for &index in column_indices {
            if let Some(record) = images.get(index) {
                let url = record.display_url(GRID_WIDTH, image_format);
                column = column.push(cell(record, thumbnails.get(&url), column_width));
            }
        }
        row = row.push(column);
    }

    let scrollable = Scrollable::new(
        Container::new(row)
            .width(Length::Fill)
            .padding(spacing::MD),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    // The gate swallows wheel events while the lightbox holds the lock, so
    // the grid cannot drift behind the overlay.
    let gated = scroll_gate(ctx.scroll_lock, scrollable);

    Container::new(gated)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::surface)
        .into()
}

fn cell<'a>(
    record: &'a ImageRecord,
    fetched: Option<&FetchedImage>,
    column_width: f32,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match fetched {
        Some(image) => Image::new(image.handle.clone()).width(Length::Fill).into(),
        None => Container::new(
            Space::new()
                .width(Length::Fill)
                .height(Length::Fixed(cell_height(record, column_width))),
        )
        .width(Length::Fill)
        .style(styles::container::placeholder)
        .into(),
    };

    button(content)
        .padding(0.0)
        .width(Length::Fill)
        .style(styles::button::thumbnail)
        .on_press(Message::ThumbnailClicked(record.id().clone()))
        .into()
}

/// Placeholder height for a cell, from the record's intrinsic aspect ratio.
fn cell_height(record: &ImageRecord, column_width: f32) -> f32 {
    if column_width <= 0.0 {
        return sizing::THUMBNAIL_FALLBACK_HEIGHT;
    }
    let height = column_width / record.aspect_ratio();
    if height.is_finite() && height > 0.0 {
        height
    } else {
        sizing::THUMBNAIL_FALLBACK_HEIGHT
    }
}

/// Full-surface state shown while the manifest request is in flight.
pub fn loading_view<'a>(spinner_rotation: f32) -> Element<'a, Message> {
    let spinner =
        AnimatedSpinner::new(theme::overlay_text_color(), spinner_rotation).into_element();

    let caption = Text::new("Loading portfolio…")
        .size(typography::BODY)
        .color(theme::muted_text_color());

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(caption);

    centered_state(content.into())
}

/// Full-surface state for a portfolio with zero images.
pub fn empty_view<'a>() -> Element<'a, Message> {
    let title = Text::new("No images in this portfolio")
        .size(typography::TITLE_MD)
        .color(theme::muted_text_color());

    let subtitle = Text::new("The manifest loaded but lists nothing to show.")
        .size(typography::BODY)
        .color(theme::muted_text_color());

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle);

    centered_state(content.into())
}

/// Full-surface state for a manifest that could not be loaded.
pub fn manifest_error_view(message: &str) -> Element<'_, Message> {
    let heading = Text::new("Could not load portfolio")
        .size(typography::TITLE_MD)
        .color(theme::error_text_color());

    let detail = Text::new(message)
        .size(typography::BODY)
        .color(theme::muted_text_color());

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(detail);

    centered_state(content.into())
}

fn centered_state(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::surface)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ImageId;

    fn record(width: u32, height: u32) -> ImageRecord {
        ImageRecord::new(
            ImageId::from("cell"),
            "https://cdn.example.com/cell",
            width,
            height,
            None,
        )
    }

    #[test]
    fn cell_height_follows_the_aspect_ratio() {
        let landscape = record(3000, 2000);
        assert!((cell_height(&landscape, 300.0) - 200.0).abs() < 0.01);

        let portrait = record(2000, 3000);
        assert!((cell_height(&portrait, 300.0) - 450.0).abs() < 0.01);
    }

    #[test]
    fn cell_height_falls_back_when_width_is_unknown() {
        let rec = record(3000, 2000);
        assert_eq!(cell_height(&rec, 0.0), sizing::THUMBNAIL_FALLBACK_HEIGHT);
        assert_eq!(cell_height(&rec, -10.0), sizing::THUMBNAIL_FALLBACK_HEIGHT);
    }

    #[test]
    fn cell_height_falls_back_for_degenerate_records() {
        // Zero width with nonzero height yields a zero ratio.
        let rec = record(0, 2000);
        assert_eq!(cell_height(&rec, 300.0), sizing::THUMBNAIL_FALLBACK_HEIGHT);
    }
}
