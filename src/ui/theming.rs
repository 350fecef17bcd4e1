// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection.
//!
//! The application renders with one of iced's built-in themes; this module
//! only decides which one, either explicitly or by following the OS.

use serde::{Deserialize, Serialize};

/// User-facing theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// i18n key for the mode's display label.
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-mode-light",
            ThemeMode::Dark => "theme-mode-dark",
            ThemeMode::System => "theme-mode-system",
        }
    }

    /// Resolves the preference to a concrete dark/light choice.
    ///
    /// `System` queries the OS; if detection fails we fall back to dark,
    /// which is the gentler default for viewing medical images.
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// The iced theme corresponding to this mode.
    pub fn theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_resolve_without_os_query() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }

        let toml = toml::to_string(&Wrapper {
            mode: ThemeMode::Dark,
        })
        .unwrap();
        assert_eq!(toml.trim(), "mode = \"dark\"");
        let back: Wrapper = toml::from_str("mode = \"system\"").unwrap();
        assert_eq!(back.mode, ThemeMode::System);
    }
}
