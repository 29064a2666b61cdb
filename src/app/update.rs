// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! `App::update` stays a thin dispatcher; the handlers here own the actual
//! state transitions. Everything that touches the lightbox goes through the
//! controller so its invariants hold no matter which message arrived.

use super::config::Config;
use super::Message;
use crate::content::{ImageFormat, ImageId, ImageList, GRID_WIDTH, LIGHTBOX_WIDTH};
use crate::error::Error;
use crate::gallery::{compute_columns, Breakpoint};
use crate::lightbox::Lightbox;
use crate::net::{fetch_image, FetchedImage, ImageCache};
use iced::{event, keyboard, Task};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub config: &'a Config,
    pub client: &'a reqwest::Client,
    pub images: &'a mut Option<ImageList>,
    pub manifest_error: &'a mut Option<String>,
    pub columns: &'a mut Vec<Vec<usize>>,
    pub window_size: &'a mut iced::Size,
    pub lightbox: &'a mut Lightbox,
    pub lightbox_image: &'a mut Option<FetchedImage>,
    pub cache: &'a mut ImageCache,
    pub thumbnails: &'a mut HashMap<String, FetchedImage>,
    pub spinner_rotation: &'a mut f32,
}

/// Applies the manifest load result and kicks off the grid thumbnail
/// fetches.
pub fn handle_manifest_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<ImageList, Error>,
) -> Task<Message> {
    *ctx.spinner_rotation = 0.0;
    match result {
        Ok(list) => {
            info!(count = list.len(), "manifest loaded");
            *ctx.manifest_error = None;
            *ctx.images = Some(list);
            recompute_columns(ctx);
            spawn_thumbnail_fetches(ctx)
        }
        Err(err) => {
            warn!(error = %err, "manifest load failed");
            *ctx.manifest_error = Some(err.to_string());
            Task::none()
        }
    }
}

/// One fetch task per grid thumbnail that has not arrived yet.
fn spawn_thumbnail_fetches(ctx: &UpdateContext<'_>) -> Task<Message> {
    let Some(list) = ctx.images.as_ref() else {
        return Task::none();
    };
    let format = ctx.config.general.image_format;
    let client = ctx.client;
    let thumbnails = &*ctx.thumbnails;
    let tasks: Vec<Task<Message>> = list
        .iter()
        .map(|record| record.display_url(GRID_WIDTH, format))
        .filter(|url| !thumbnails.contains_key(url))
        .map(|url| {
            Task::perform(fetch_image(client.clone(), url), |(url, result)| {
                Message::ThumbnailFetched { url, result }
            })
        })
        .collect();
    Task::batch(tasks)
}

/// Opens the lightbox on the clicked image.
///
/// An id that no longer resolves (stale click against a replaced list) is
/// rejected by the controller and leaves all state untouched.
pub fn handle_thumbnail_clicked(ctx: &mut UpdateContext<'_>, id: ImageId) -> Task<Message> {
    let Some(list) = ctx.images.as_ref() else {
        return Task::none();
    };
    match ctx.lightbox.open(list, &id) {
        Ok(index) => {
            debug!(id = %id, index, "lightbox opened");
            show_current_image(ctx, index)
        }
        Err(err) => {
            warn!(id = %id, error = %err, "lightbox open rejected");
            Task::none()
        }
    }
}

pub fn handle_lightbox_closed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.lightbox.close();
    *ctx.lightbox_image = None;
    *ctx.spinner_rotation = 0.0;
    Task::none()
}

pub fn handle_navigate_next(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(list) = ctx.images.as_ref() else {
        return Task::none();
    };
    match ctx.lightbox.next(list) {
        Some(index) => show_current_image(ctx, index),
        None => Task::none(),
    }
}

pub fn handle_navigate_previous(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(list) = ctx.images.as_ref() else {
        return Task::none();
    };
    match ctx.lightbox.prev(list) {
        Some(index) => show_current_image(ctx, index),
        None => Task::none(),
    }
}

/// Resolves the image for the freshly opened index, serving from the cache
/// when possible, and plans the neighbor prefetches.
fn show_current_image(ctx: &mut UpdateContext<'_>, index: usize) -> Task<Message> {
    let url = {
        let Some(list) = ctx.images.as_ref() else {
            return Task::none();
        };
        let Some(record) = list.get(index) else {
            return Task::none();
        };
        record.display_url(LIGHTBOX_WIDTH, ctx.config.general.image_format)
    };

    *ctx.lightbox_image = None;
    let visible = if let Some(image) = ctx.cache.get(&url) {
        let stats = ctx.cache.stats();
        debug!(
            url = %url,
            hits = stats.hits,
            misses = stats.misses,
            evictions = stats.evictions,
            "lightbox image served from cache"
        );
        ctx.lightbox.image_loaded(index);
        *ctx.lightbox_image = Some(image);
        *ctx.spinner_rotation = 0.0;
        Task::none()
    } else {
        Task::perform(
            fetch_image(ctx.client.clone(), url),
            move |(url, result)| Message::ImageFetched { url, index, result },
        )
    };

    let mut tasks = vec![visible];
    if ctx.config.lightbox.prefetch_neighbors {
        tasks.extend(neighbor_prefetch_tasks(ctx, ctx.config.general.image_format));
    }
    Task::batch(tasks)
}

/// Fire-and-forget fetches for the previous and next images, skipping URLs
/// the cache already holds.
fn neighbor_prefetch_tasks(ctx: &UpdateContext<'_>, format: ImageFormat) -> Vec<Task<Message>> {
    let Some(list) = ctx.images.as_ref() else {
        return Vec::new();
    };
    let urls: Vec<String> = ctx
        .lightbox
        .neighbor_indices(list)
        .into_iter()
        .filter_map(|index| list.get(index))
        .map(|record| record.display_url(LIGHTBOX_WIDTH, format))
        .collect();
    let client = ctx.client;
    ctx.cache
        .urls_to_prefetch(&urls)
        .into_iter()
        .map(|url| {
            Task::perform(fetch_image(client.clone(), url), |(url, result)| {
                Message::PrefetchDone { url, result }
            })
        })
        .collect()
}

/// Applies a lightbox fetch completion.
///
/// The controller decides whether the completion matches the open index;
/// a stale success still lands in the cache so revisiting the image is
/// instant, while a stale failure is dropped silently.
pub fn handle_image_fetched(
    ctx: &mut UpdateContext<'_>,
    url: String,
    index: usize,
    result: Result<FetchedImage, Error>,
) -> Task<Message> {
    match result {
        Ok(image) => {
            if ctx.lightbox.image_loaded(index) {
                *ctx.lightbox_image = Some(image.clone());
                *ctx.spinner_rotation = 0.0;
            } else {
                debug!(url = %url, index, "stale image fetch, caching only");
            }
            ctx.cache.insert(image);
        }
        Err(err) => {
            if ctx.lightbox.image_load_failed(index, err.to_string()) {
                warn!(url = %url, error = %err, "lightbox image fetch failed");
                *ctx.spinner_rotation = 0.0;
            } else {
                debug!(url = %url, error = %err, "stale image fetch failure ignored");
            }
        }
    }
    Task::none()
}

/// Stores an arrived grid thumbnail. Failures keep the placeholder cell.
pub fn handle_thumbnail_fetched(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<FetchedImage, Error>,
) -> Task<Message> {
    match result {
        Ok(image) => {
            ctx.thumbnails.insert(url, image);
        }
        Err(err) => {
            debug!(url = %url, error = %err, "thumbnail fetch failed");
        }
    }
    Task::none()
}

/// Lands a prefetch completion in the cache. Prefetch is purely a warming
/// hint, so failures are logged and dropped.
pub fn handle_prefetch_done(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<FetchedImage, Error>,
) -> Task<Message> {
    match result {
        Ok(image) => {
            ctx.cache.insert(image);
            debug!(url = %url, cached = ctx.cache.len(), "neighbor prefetched");
        }
        Err(err) => {
            debug!(url = %url, error = %err, "neighbor prefetch failed");
        }
    }
    Task::none()
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: iced::Size) -> Task<Message> {
    *ctx.window_size = size;
    recompute_columns(ctx);
    Task::none()
}

/// Keyboard shortcuts for the lightbox.
///
/// The open-state guard runs here, on every event, because the lightbox
/// can open or close between two renders while the subscription stays
/// installed.
pub fn handle_raw_event(ctx: &mut UpdateContext<'_>, event: event::Event) -> Task<Message> {
    let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
        return Task::none();
    };
    if !ctx.lightbox.is_open() {
        return Task::none();
    }
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => handle_lightbox_closed(ctx),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => handle_navigate_next(ctx),
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => handle_navigate_previous(ctx),
        _ => Task::none(),
    }
}

/// Advances the loading spinner one step, wrapping at a full turn.
///
/// The tick subscription only runs while a load is pending, so an idle
/// application never reaches this.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.spinner_rotation += SPINNER_SPEED;
    if *ctx.spinner_rotation > std::f32::consts::TAU {
        *ctx.spinner_rotation -= std::f32::consts::TAU;
    }
    Task::none()
}

/// Recomputes the gallery partition for the current width and strategy.
///
/// Loading the config replaces a zero column count before it gets here, so
/// the layout call only fails if that sanitation is bypassed; the grid then
/// renders empty rather than panicking.
pub fn recompute_columns(ctx: &mut UpdateContext<'_>) {
    let Some(list) = ctx.images.as_ref() else {
        ctx.columns.clear();
        return;
    };
    let breakpoint = Breakpoint::for_width(ctx.window_size.width);
    let count = ctx.config.layout.columns.columns_for(breakpoint);
    match compute_columns(list, count, ctx.config.layout.strategy) {
        Ok(columns) => *ctx.columns = columns,
        Err(err) => {
            warn!(error = %err, "gallery layout failed");
            ctx.columns.clear();
        }
    }
}
