// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the grid and the lightbox.
//!
//! The `App` struct owns everything the update loop mutates: the loaded
//! image list, the gallery partition, the lightbox controller, and the two
//! image stores (grid thumbnails and the lightbox cache). This file keeps
//! policy decisions (window sizing, manifest source resolution, theme)
//! close to the main update loop so user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::content::{manifest, ImageList};
use crate::lightbox::{Lightbox, ScrollLock};
use crate::net::{CacheConfig, FetchedImage, ImageCache};
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use tracing::warn;

/// Root Iced application state bridging the gallery grid, the lightbox
/// overlay, and persisted preferences.
pub struct App {
    config: config::Config,
    client: reqwest::Client,
    /// Loaded portfolio, `None` until the manifest arrives.
    images: Option<ImageList>,
    /// Set when the manifest could not be loaded; the grid shows it.
    manifest_error: Option<String>,
    /// Current partition of image indices into grid columns.
    columns: Vec<Vec<usize>>,
    window_size: iced::Size,
    /// Shared flag raised while the lightbox is open; the grid's
    /// scrollable consults it to swallow wheel events.
    scroll_lock: ScrollLock,
    lightbox: Lightbox,
    /// Full-size image currently shown in the lightbox, if loaded.
    lightbox_image: Option<FetchedImage>,
    /// Byte-bounded cache of lightbox-width images.
    cache: ImageCache,
    /// Grid thumbnails keyed by display URL. Thumbnails are small and all
    /// of them stay visible, so they bypass the eviction cache.
    thumbnails: HashMap<String, FetchedImage>,
    /// Rotation of the loading spinner in radians.
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.images.as_ref().map(ImageList::len))
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        let scroll_lock = ScrollLock::new();
        let cache = ImageCache::new(CacheConfig::new(
            config.cache_bytes(),
            config.cache.max_entries,
        ));
        Self {
            client: reqwest::Client::new(),
            images: None,
            manifest_error: None,
            columns: Vec::new(),
            window_size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            lightbox: Lightbox::new(scroll_lock.clone()),
            scroll_lock,
            lightbox_image: None,
            cache,
            thumbnails: HashMap::new(),
            spinner_rotation: 0.0,
            config,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the manifest load based
    /// on `Flags` received from the launcher.
    ///
    /// The `--manifest` flag wins over the configured source. Without
    /// either, the app starts into a persistent error state instead of an
    /// endless loading screen.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_deref().map(PathBuf::from));
        if let Some(message) = config_warning {
            warn!(warning = %message, "configuration adjusted at load");
        }

        let cache = ImageCache::new(CacheConfig::new(
            config.cache_bytes(),
            config.cache.max_entries,
        ));
        let mut app = App {
            cache,
            config,
            ..Self::default()
        };

        let source = flags
            .manifest
            .or_else(|| app.config.general.manifest.clone());
        let task = match source {
            Some(source) => {
                let client = app.client.clone();
                Task::perform(
                    async move { manifest::load(&client, &source).await },
                    Message::ManifestLoaded,
                )
            }
            None => {
                app.manifest_error = Some(
                    "No manifest configured. Pass --manifest <path-or-url> or set \
                     general.manifest in settings.toml."
                        .to_string(),
                );
                Task::none()
            }
        };

        (app, task)
    }

    fn title(&self) -> String {
        const APP_NAME: &str = "Iced Folio";

        let shown = self
            .images
            .as_ref()
            .zip(self.lightbox.current_index())
            .and_then(|(list, index)| list.get(index))
            .and_then(|record| record.title());

        match shown {
            Some(name) => format!("{name} - {APP_NAME}"),
            None => APP_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let manifest_pending = self.images.is_none() && self.manifest_error.is_none();
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            manifest_pending || self.lightbox.is_loading(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            config: &self.config,
            client: &self.client,
            images: &mut self.images,
            manifest_error: &mut self.manifest_error,
            columns: &mut self.columns,
            window_size: &mut self.window_size,
            lightbox: &mut self.lightbox,
            lightbox_image: &mut self.lightbox_image,
            cache: &mut self.cache,
            thumbnails: &mut self.thumbnails,
            spinner_rotation: &mut self.spinner_rotation,
        };

        match message {
            Message::ManifestLoaded(result) => update::handle_manifest_loaded(&mut ctx, result),
            Message::ThumbnailClicked(id) => update::handle_thumbnail_clicked(&mut ctx, id),
            Message::LightboxClosed => update::handle_lightbox_closed(&mut ctx),
            Message::NavigateNext => update::handle_navigate_next(&mut ctx),
            Message::NavigatePrevious => update::handle_navigate_previous(&mut ctx),
            Message::ImageFetched { url, index, result } => {
                update::handle_image_fetched(&mut ctx, url, index, result)
            }
            Message::ThumbnailFetched { url, result } => {
                update::handle_thumbnail_fetched(&mut ctx, url, result)
            }
            Message::PrefetchDone { url, result } => {
                update::handle_prefetch_done(&mut ctx, url, result)
            }
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::RawEvent(event) => update::handle_raw_event(&mut ctx, event),
            Message::Tick(_instant) => update::handle_tick(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            config: &self.config,
            images: self.images.as_ref(),
            manifest_error: self.manifest_error.as_deref(),
            columns: &self.columns,
            window_size: self.window_size,
            lightbox: &self.lightbox,
            lightbox_image: self.lightbox_image.as_ref(),
            thumbnails: &self.thumbnails,
            scroll_lock: self.scroll_lock.clone(),
            spinner_rotation: self.spinner_rotation,
        })
    }
}
