// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the workspace and
//! settings views.
//!
//! The `App` struct wires together the domains (workspace, localization,
//! settings) and translates messages into side effects like config
//! persistence, image loading, or enhancement requests. This file
//! intentionally keeps policy decisions (minimum window size, persistence
//! format, localization switching) close to the main update loop so it is
//! easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::settings::State as SettingsState;
use crate::ui::workspace;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: config::Config,
    settings: SettingsState,
    workspace: workspace::State,
    /// Persisted application state (last open/save directories).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("workspace_stage", &self.workspace.session().stage())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

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
        let workspace = workspace::State::new(&config.enhancement);
        Self {
            i18n: I18n::default(),
            screen: Screen::Workspace,
            settings: SettingsState::from_config(&config),
            workspace,
            config,
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// image loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();

        // A CLI endpoint override applies to this run only and is never
        // written back to the config file.
        if let Some(url) = flags.service_url {
            config.service.base_url = url.trim_end_matches('/').to_string();
        }

        let i18n = I18n::new(flags.lang, &config);
        let (app_state, state_warning) = persisted_state::AppState::load();

        let mut app = App {
            i18n,
            screen: Screen::Workspace,
            settings: SettingsState::from_config(&config),
            workspace: workspace::State::new(&config.enhancement),
            config,
            app_state,
            notifications: notifications::Manager::new(),
        };

        // Show warnings for config/state loading issues
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let task = match flags.file_path {
            Some(path_str) => update::load_image_from_path(PathBuf::from(path_str)),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let file_name = self
            .workspace
            .session()
            .source_path
            .as_ref()
            .and_then(|path| path.file_name().and_then(|name| name.to_str()));

        match file_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.config.general.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub = subscription::create_tick_subscription(
            self.workspace.needs_tick(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            config: &mut self.config,
            settings: &mut self.settings,
            workspace: &mut self.workspace,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Workspace(workspace_message) => {
                update::handle_workspace_message(&mut ctx, workspace_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::OpenFileDialogResult(path) => update::handle_open_file_dialog_result(path),
            Message::SaveDialogResult(path) => update::handle_save_dialog_result(&mut ctx, path),
            Message::FileDropped(path) => {
                if self.screen == Screen::Workspace {
                    update::handle_file_dropped(path)
                } else {
                    Task::none()
                }
            }
            Message::Tick(_instant) => {
                // Forward the tick so the workspace can revert the enhance
                // button label, then let the notification manager handle
                // auto-dismiss.
                let task = update::handle_workspace_message(&mut ctx, workspace::Message::Tick);
                self.notifications.tick();
                task
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            config: &self.config,
            settings: &self.settings,
            workspace: &self.workspace,
            notifications: &self.notifications,
        })
    }
}
