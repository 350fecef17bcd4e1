// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events (keyboard, file drops) to the workspace and keeps a
//! periodic tick alive while something on screen is time-dependent.

use super::{Message, Screen};
use crate::ui::workspace;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Creates the appropriate event subscription based on the current screen.
///
/// File drops and keyboard shortcuts are only handled on the Workspace
/// screen; the settings screen relies on widget-level input handling and
/// must keep plain keystrokes for its text fields.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Workspace => event::listen_with(|event, status, _window_id| {
            if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
                return Some(Message::FileDropped(path.clone()));
            }

            // Shortcuts only fire when no widget captured the key
            if status == event::Status::Captured {
                return None;
            }

            if let event::Event::Keyboard(keyboard::Event::KeyPressed {
                key, modifiers, ..
            }) = &event
            {
                if modifiers.command() || modifiers.alt() {
                    return None;
                }
                return match key.as_ref() {
                    keyboard::Key::Character("o") => {
                        Some(Message::Workspace(workspace::Message::OpenFileRequested))
                    }
                    keyboard::Key::Character("s") => {
                        Some(Message::Workspace(workspace::Message::SaveRequested))
                    }
                    keyboard::Key::Named(keyboard::key::Named::Enter) => {
                        Some(Message::Workspace(workspace::Message::EnhanceRequested))
                    }
                    _ => None,
                };
            }

            None
        }),
        Screen::Settings => Subscription::none(),
    }
}

/// Creates a periodic tick subscription for the enhance button label revert
/// and notification auto-dismiss.
pub fn create_tick_subscription(
    workspace_needs_tick: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if workspace_needs_tick || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
