// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language, theme, service endpoint and enhancement
//! defaults.
//!
//! The screen edits the [`Config`] in place and reports through [`Event`]
//! when the app should persist it or react to a language change.

use crate::api::Algorithm;
use crate::app::config::defaults::{
    CLIP_LIMIT_STEP, MAX_CLIP_LIMIT, MAX_TILE_SIZE, MIN_CLIP_LIMIT, MIN_TILE_SIZE,
};
use crate::app::config::Config;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, pick_list, slider, text, text_input, Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};
use unic_langid::LanguageIdentifier;

/// Draft inputs that should not hit the config until submitted.
#[derive(Debug, Default, Clone)]
pub struct State {
    /// Service URL as typed; applied to the config on submit.
    pub base_url_input: String,
}

impl State {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url_input: config.service.base_url.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    BaseUrlChanged(String),
    BaseUrlSubmitted,
    DefaultAlgorithmSelected(Algorithm),
    DefaultClipLimitChanged(f64),
    DefaultTileSizeChanged(u32),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The config changed and should be written to disk.
    PersistConfig,
    /// The display language changed; the app switches the i18n locale
    /// (and persists).
    LanguageChanged(LanguageIdentifier),
}

/// Process a settings message, editing the config in place.
pub fn update(message: Message, state: &mut State, config: &mut Config) -> Event {
    match message {
        Message::LanguageSelected(locale) => {
            config.general.language = Some(locale.to_string());
            Event::LanguageChanged(locale)
        }
        Message::ThemeModeSelected(mode) => {
            config.general.theme_mode = mode;
            Event::PersistConfig
        }
        Message::BaseUrlChanged(value) => {
            state.base_url_input = value;
            Event::None
        }
        Message::BaseUrlSubmitted => {
            let trimmed = state.base_url_input.trim();
            if trimmed.is_empty() {
                // Revert to the last good value instead of saving an
                // empty endpoint.
                state.base_url_input = config.service.base_url.clone();
                return Event::None;
            }
            config.service.base_url = trimmed.trim_end_matches('/').to_string();
            state.base_url_input = config.service.base_url.clone();
            Event::PersistConfig
        }
        Message::DefaultAlgorithmSelected(algorithm) => {
            config.enhancement.algorithm = algorithm;
            Event::PersistConfig
        }
        Message::DefaultClipLimitChanged(value) => {
            config.enhancement.clip_limit = crate::app::config::defaults::clamp_clip_limit(value);
            Event::PersistConfig
        }
        Message::DefaultTileSizeChanged(value) => {
            config.enhancement.tile_size = crate::app::config::defaults::clamp_tile_size(value);
            Event::PersistConfig
        }
    }
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let ViewContext { i18n, config, state } = ctx;

    let title = Text::new(i18n.tr("settings-title")).size(typography::TITLE_LG);

    let language_section = language_section(i18n);
    let theme_section = theme_section(i18n, config.general.theme_mode);
    let service_section = service_section(i18n, state);
    let enhancement_section = enhancement_section(i18n, config);

    let content = Column::new()
        .push(title)
        .push(language_section)
        .push(theme_section)
        .push(service_section)
        .push(enhancement_section)
        .spacing(spacing::LG)
        .max_width(560)
        .align_x(Horizontal::Center);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .into()
}

fn language_section(i18n: &I18n) -> Element<'_, Message> {
    let mut column = Column::new()
        .push(Text::new(i18n.tr("settings-language-label")))
        .spacing(spacing::XS);

    for locale in &i18n.available_locales {
        let display_name = locale.to_string();

        // Check for a translated language name, e.g. "language-name-en-US"
        let translated_name = i18n.tr(&format!("language-name-{locale}"));
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone()
        } else {
            format!("{translated_name} ({display_name})")
        };

        let is_current = i18n.current_locale() == locale;
        let language_button = button(Text::new(button_text).size(typography::BODY))
            .on_press(Message::LanguageSelected(locale.clone()))
            .padding(spacing::XS)
            .style(if is_current {
                styles::button::selected
            } else {
                styles::button::unselected
            });

        column = column.push(language_button);
    }

    column.into()
}

fn theme_section(i18n: &I18n, current: ThemeMode) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for mode in ThemeMode::ALL {
        let mode_button = button(Text::new(i18n.tr(mode.i18n_key())).size(typography::BODY))
            .on_press(Message::ThemeModeSelected(mode))
            .padding(spacing::XS)
            .style(if mode == current {
                styles::button::selected
            } else {
                styles::button::unselected
            });
        row = row.push(mode_button);
    }

    Column::new()
        .push(Text::new(i18n.tr("settings-theme-label")))
        .push(row)
        .spacing(spacing::XS)
        .into()
}

fn service_section<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let input = text_input(crate::api::DEFAULT_BASE_URL, &state.base_url_input)
        .on_input(Message::BaseUrlChanged)
        .on_submit(Message::BaseUrlSubmitted)
        .size(typography::BODY_LG)
        .padding(spacing::XS);

    Column::new()
        .push(Text::new(i18n.tr("settings-service-section")).size(typography::TITLE_SM))
        .push(Text::new(i18n.tr("settings-service-url-label")))
        .push(input)
        .push(
            Text::new(i18n.tr("settings-service-url-hint"))
                .size(typography::CAPTION)
                .style(styles::text::secondary),
        )
        .spacing(spacing::XS)
        .into()
}

fn enhancement_section<'a>(i18n: &'a I18n, config: &'a Config) -> Element<'a, Message> {
    let algorithm_row = Row::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("settings-default-algorithm-label")).size(typography::BODY))
        .push(pick_list(
            Algorithm::ALL,
            Some(config.enhancement.algorithm),
            Message::DefaultAlgorithmSelected,
        ));

    let clip_row = Row::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("settings-default-clip-limit-label")).size(typography::BODY))
        .push(
            slider(
                MIN_CLIP_LIMIT..=MAX_CLIP_LIMIT,
                config.enhancement.clip_limit,
                Message::DefaultClipLimitChanged,
            )
            .step(CLIP_LIMIT_STEP),
        )
        .push(text(format!("{:.1}", config.enhancement.clip_limit)).size(typography::BODY_SM));

    let tile_row = Row::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("settings-default-tile-size-label")).size(typography::BODY))
        .push(slider(
            MIN_TILE_SIZE..=MAX_TILE_SIZE,
            config.enhancement.tile_size,
            Message::DefaultTileSizeChanged,
        ))
        .push(text(config.enhancement.tile_size.to_string()).size(typography::BODY_SM));

    Column::new()
        .push(Text::new(i18n.tr("settings-enhancement-section")).size(typography::TITLE_SM))
        .push(algorithm_row)
        .push(clip_row)
        .push(tile_row)
        .spacing(spacing::XS)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_selection_updates_config_and_emits_event() {
        let mut config = Config::default();
        let mut state = State::from_config(&config);
        let locale: LanguageIdentifier = "fr".parse().unwrap();

        let event = update(
            Message::LanguageSelected(locale.clone()),
            &mut state,
            &mut config,
        );

        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert!(matches!(event, Event::LanguageChanged(l) if l == locale));
    }

    #[test]
    fn base_url_applies_on_submit_only() {
        let mut config = Config::default();
        let mut state = State::from_config(&config);
        let original = config.service.base_url.clone();

        let event = update(
            Message::BaseUrlChanged("http://imaging.local:8080/".into()),
            &mut state,
            &mut config,
        );
        assert!(matches!(event, Event::None));
        assert_eq!(config.service.base_url, original);

        let event = update(Message::BaseUrlSubmitted, &mut state, &mut config);
        assert!(matches!(event, Event::PersistConfig));
        assert_eq!(config.service.base_url, "http://imaging.local:8080");
        assert_eq!(state.base_url_input, "http://imaging.local:8080");
    }

    #[test]
    fn empty_base_url_submit_reverts_to_previous_value() {
        let mut config = Config::default();
        let mut state = State::from_config(&config);

        let _ = update(Message::BaseUrlChanged("   ".into()), &mut state, &mut config);
        let event = update(Message::BaseUrlSubmitted, &mut state, &mut config);

        assert!(matches!(event, Event::None));
        assert_eq!(state.base_url_input, config.service.base_url);
    }

    #[test]
    fn enhancement_defaults_are_clamped() {
        let mut config = Config::default();
        let mut state = State::from_config(&config);

        let _ = update(
            Message::DefaultClipLimitChanged(42.0),
            &mut state,
            &mut config,
        );
        assert_eq!(config.enhancement.clip_limit, MAX_CLIP_LIMIT);

        let _ = update(Message::DefaultTileSizeChanged(1), &mut state, &mut config);
        assert_eq!(config.enhancement.tile_size, MIN_TILE_SIZE);
    }

    #[test]
    fn theme_mode_selection_persists() {
        let mut config = Config::default();
        let mut state = State::from_config(&config);

        let event = update(
            Message::ThemeModeSelected(ThemeMode::Dark),
            &mut state,
            &mut config,
        );
        assert!(matches!(event, Event::PersistConfig));
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn settings_view_renders() {
        let i18n = I18n::default();
        let config = Config::default();
        let state = State::from_config(&config);
        let _element = view(ViewContext {
            i18n: &i18n,
            config: &config,
            state: &state,
        });
    }
}
