// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the gallery grid and, while open, the lightbox overlay stacked
//! on top of it. Everything arrives by reference from `App::view`; nothing
//! here mutates state or spawns tasks.

use std::collections::HashMap;

use super::config::Config;
use super::Message;
use crate::content::ImageList;
use crate::lightbox::{Lightbox, ScrollLock};
use crate::net::FetchedImage;
use crate::ui::design_tokens::spacing;
use crate::ui::{grid, overlay};
use iced::widget::Stack;
use iced::Element;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub config: &'a Config,
    pub images: Option<&'a ImageList>,
    pub manifest_error: Option<&'a str>,
    pub columns: &'a [Vec<usize>],
    pub window_size: iced::Size,
    pub lightbox: &'a Lightbox,
    pub lightbox_image: Option<&'a FetchedImage>,
    pub thumbnails: &'a HashMap<String, FetchedImage>,
    pub scroll_lock: ScrollLock,
    pub spinner_rotation: f32,
}

/// Renders the gallery, with the lightbox stacked above it when open.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base = base_view(&ctx);

    if !ctx.lightbox.is_open() {
        return base;
    }
    let Some(list) = ctx.images else {
        return base;
    };

    let info = ctx.lightbox.info(list);
    let record = info.current_index.and_then(|index| list.get(index));

    let lightbox_view = overlay::view(overlay::OverlayContext {
        info,
        record,
        image: ctx.lightbox_image,
        load_error: ctx.lightbox.load_error(),
        spinner_rotation: ctx.spinner_rotation,
    });

    Stack::new().push(base).push(lightbox_view).into()
}

fn base_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if let Some(message) = ctx.manifest_error {
        return grid::manifest_error_view(message);
    }
    let Some(images) = ctx.images else {
        return grid::loading_view(ctx.spinner_rotation);
    };
    if images.is_empty() {
        return grid::empty_view();
    }

    grid::view(grid::GridContext {
        images,
        columns: ctx.columns,
        thumbnails: ctx.thumbnails,
        image_format: ctx.config.general.image_format,
        column_width: column_width(ctx.window_size.width, ctx.columns.len()),
        scroll_lock: ctx.scroll_lock.clone(),
    })
}

/// Width available to one column: the window width minus the grid's outer
/// padding and the gutters between columns. Only used to size thumbnail
/// placeholders; fetched images fill whatever the layout gives them.
fn column_width(window_width: f32, column_count: usize) -> f32 {
    if column_count == 0 {
        return 0.0;
    }
    let gutters = spacing::GRID_GUTTER * (column_count as f32 - 1.0);
    let padding = spacing::MD * 2.0;
    ((window_width - padding - gutters) / column_count as f32).max(0.0)
}
