// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers `App::update`
//! dispatches to for different parts of the application.

use super::persisted_state::AppState;
use super::{config, notifications, Message, Screen};
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::navbar;
use crate::ui::settings::{self, Event as SettingsEvent, State as SettingsState};
use crate::ui::workspace;
use iced::Task;
use std::path::PathBuf;

/// File name suggested by the Save As dialog for the enhanced image.
pub const DEFAULT_SAVE_FILE_NAME: &str = "enhanced_medical_image.png";

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub config: &'a mut config::Config,
    pub settings: &'a mut SettingsState,
    pub workspace: &'a mut workspace::State,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_workspace_message(
    ctx: &mut UpdateContext<'_>,
    message: workspace::Message,
) -> Task<Message> {
    // Remember the directory of a successfully loaded image for the next
    // open dialog.
    if let workspace::Message::ImageLoaded(Ok((path, _))) = &message {
        ctx.app_state.set_last_open_directory_from_file(path);
        if let Some(key) = ctx.app_state.save() {
            ctx.notifications
                .push(notifications::Notification::warning(&key));
        }
    }

    let (effect, task) = ctx
        .workspace
        .handle_message(message, &ctx.config.service.base_url);
    let workspace_task = task.map(Message::Workspace);

    let side_effect = match effect {
        workspace::Effect::None => Task::none(),
        workspace::Effect::OpenFileDialog => {
            handle_open_file_dialog(ctx.app_state.last_open_directory.clone())
        }
        workspace::Effect::SaveFileDialog => {
            handle_save_file_dialog(ctx.app_state.last_save_directory.clone())
        }
        workspace::Effect::EnhancementComplete => {
            // Tuning values stay session-only; the saved defaults change
            // through the Settings screen.
            ctx.notifications
                .push(notifications::Notification::success(
                    "notification-enhance-success",
                ));
            Task::none()
        }
        workspace::Effect::Notify(notification) => {
            ctx.notifications.push(notification);
            Task::none()
        }
    };

    Task::batch([workspace_task, side_effect])
}

pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match settings::update(message, ctx.settings, ctx.config) {
        SettingsEvent::None => {}
        SettingsEvent::PersistConfig => {
            persist_config(ctx);
        }
        SettingsEvent::LanguageChanged(locale) => {
            ctx.i18n.set_locale(locale);
            persist_config(ctx);
        }
    }
    Task::none()
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match message {
        navbar::Message::OpenWorkspace => *ctx.screen = Screen::Workspace,
        navbar::Message::OpenSettings => *ctx.screen = Screen::Settings,
    }
    Task::none()
}

/// Opens the system file dialog to pick a source image.
pub fn handle_open_file_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog =
                rfd::AsyncFileDialog::new().add_filter("Images", media::IMAGE_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Handles the result of the open file dialog.
pub fn handle_open_file_dialog_result(path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };

    load_image_from_path(path)
}

/// Handles a file dropped on the window. Only the workspace screen
/// subscribes to drop events.
pub fn handle_file_dropped(path: PathBuf) -> Task<Message> {
    load_image_from_path(path)
}

/// Loads an image off the UI thread and reports back to the workspace.
pub fn load_image_from_path(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            let image = media::load_image(&path)?;
            Ok((path, image))
        },
        |result| Message::Workspace(workspace::Message::ImageLoaded(result)),
    )
}

/// Opens the Save As dialog for the enhanced image.
pub fn handle_save_file_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .add_filter("Images", media::IMAGE_EXTENSIONS)
                .set_file_name(DEFAULT_SAVE_FILE_NAME);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::SaveDialogResult,
    )
}

/// Handles the result of the Save As dialog.
pub fn handle_save_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };

    let Some(image) = ctx.workspace.result_image() else {
        // The result was cleared while the dialog was open (e.g. a retry
        // failed in the meantime).
        return Task::none();
    };

    match media::save_image(image, &path) {
        Ok(()) => {
            ctx.notifications
                .push(notifications::Notification::success(
                    "notification-save-success",
                ));

            // Remember the save directory for next time
            ctx.app_state.set_last_save_directory_from_file(&path);
            if let Some(key) = ctx.app_state.save() {
                ctx.notifications
                    .push(notifications::Notification::warning(&key));
            }
        }
        Err(_err) => {
            ctx.notifications.push(notifications::Notification::error(
                "notification-save-error",
            ));
        }
    }
    Task::none()
}

fn persist_config(ctx: &mut UpdateContext<'_>) {
    if config::save(ctx.config).is_err() {
        ctx.notifications.push(notifications::Notification::warning(
            "notification-config-save-error",
        ));
    }
}
