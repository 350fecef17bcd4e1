// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! This module handles transient application state that should persist across
//! sessions but is not user-configurable (unlike preferences in `settings.toml`).
//!
//! State is stored in CBOR (Concise Binary Object Representation) format for:
//! - Compact binary storage
//! - Fast serialization/deserialization
//! - Clear separation from user-editable TOML preferences
//!
//! Persistence is best-effort: failures surface as notification keys, never as
//! fatal errors.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
///
/// Contains transient state that improves UX but is not user-configurable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Last directory used for saving an enhanced result.
    /// Used as the initial directory when opening the save dialog.
    #[serde(default)]
    pub last_save_directory: Option<PathBuf>,

    /// Last directory an image was opened from.
    /// Used as the initial directory when opening the file dialog.
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). If loading fails, returns
    /// default state with a warning key explaining what went wrong.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(_) => (
                        Self::default(),
                        Some("notification-state-parse-error".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("notification-state-read-error".to_string()),
            ),
        }
    }

    /// Saves application state to the default location.
    ///
    /// Creates the parent directory if it doesn't exist.
    /// Returns an optional warning key if save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves application state to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    /// Returns the full path to the state file with optional override.
    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Sets the last save directory from a file path.
    ///
    /// Extracts the parent directory from the given path. If the path has no
    /// parent (e.g., root path), the directory is not updated.
    pub fn set_last_save_directory_from_file(&mut self, file_path: &std::path::Path) {
        if let Some(parent) = file_path.parent() {
            self.last_save_directory = Some(parent.to_path_buf());
        }
    }

    /// Sets the last open directory from a file path.
    pub fn set_last_open_directory_from_file(&mut self, file_path: &std::path::Path) {
        if let Some(parent) = file_path.parent() {
            self.last_open_directory = Some(parent.to_path_buf());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_last_directories() {
        let state = AppState::default();
        assert!(state.last_save_directory.is_none());
        assert!(state.last_open_directory.is_none());
    }

    #[test]
    fn set_last_save_directory_extracts_parent() {
        let mut state = AppState::default();
        state.set_last_save_directory_from_file(std::path::Path::new(
            "/home/user/images/enhanced.png",
        ));
        assert_eq!(
            state.last_save_directory,
            Some(PathBuf::from("/home/user/images"))
        );
    }

    #[test]
    fn set_last_open_directory_extracts_parent() {
        let mut state = AppState::default();
        state.set_last_open_directory_from_file(std::path::Path::new("/data/scans/chest.png"));
        assert_eq!(
            state.last_open_directory,
            Some(PathBuf::from("/data/scans"))
        );
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();

        let state = AppState {
            last_save_directory: Some(PathBuf::from("/tmp/results")),
            last_open_directory: Some(PathBuf::from("/tmp/scans")),
        };

        assert!(state.save_to(Some(base.clone())).is_none());
        let (loaded, warning) = AppState::load_from(Some(base));
        assert!(warning.is_none());
        assert_eq!(loaded, state);
    }

    #[test]
    fn load_from_missing_file_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(state, AppState::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_from_corrupted_file_warns_and_resets() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let state_path = temp_dir.path().join(STATE_FILE);
        fs::write(&state_path, b"not cbor at all").expect("write corrupted state");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(state, AppState::default());
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
    }
}
