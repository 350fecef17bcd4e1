// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use crate::ui::workspace;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Workspace(workspace::Message),
    Settings(settings::Message),
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// Result from the Save As dialog for the enhanced image.
    SaveDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    Tick(Instant), // Periodic tick for label revert and toast auto-dismiss
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional service base URL override for this run only.
    pub service_url: Option<String>,
    /// Optional image path to preload on startup.
    pub file_path: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `MED_ENHANCER_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `MED_ENHANCER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
