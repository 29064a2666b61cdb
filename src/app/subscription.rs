// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events into top-level messages. Window resizes always
//! reach the update loop because the gallery breakpoint depends on them;
//! keyboard events are forwarded raw and the lightbox open-state guard is
//! applied in `update`, per event, where current state is visible.

use super::Message;
use iced::{event, time, Subscription};

/// Creates the application's event subscription.
///
/// Wheel events are deliberately not routed here: the grid's scrollable
/// consults the scroll-lock flag itself, inside the widget.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = &event {
            return Some(Message::WindowResized(*size));
        }

        match status {
            event::Status::Ignored => match &event {
                event::Event::Keyboard(_) => Some(Message::RawEvent(event.clone())),
                _ => None,
            },
            event::Status::Captured => None,
        }
    })
}

/// Creates the periodic tick subscription driving the loading spinner.
///
/// Active only while something is actually loading, so an idle gallery
/// schedules no wakeups.
pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(std::time::Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
