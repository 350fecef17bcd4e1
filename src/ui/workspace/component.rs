// SPDX-License-Identifier: MPL-2.0
//! Workspace component encapsulating state and update logic.

use super::state::Session;
use super::{controls, empty_state, metrics_panel, panes};
use crate::api::{self, EnhancementOutcome, EnhancementRequest};
use crate::app::config::EnhancementConfig;
use crate::error::{Error, ServiceError};
use crate::i18n::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::Notification;
use iced::widget::{Column, Row};
use iced::{Element, Length, Task};
use std::path::PathBuf;
use std::time::Instant;

/// Messages emitted by workspace widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// Request to open the file dialog (empty state button, toolbar, keyboard).
    OpenFileRequested,
    /// A source image finished loading (file dialog, drag-drop, CLI).
    ImageLoaded(Result<(PathBuf, ImageData), Error>),
    AlgorithmSelected(crate::api::Algorithm),
    ClipLimitChanged(f64),
    TileSizeChanged(u32),
    /// Submit the loaded image to the enhancement service.
    EnhanceRequested,
    EnhanceFinished(Result<EnhancementOutcome, ServiceError>),
    /// Request to save the enhanced image (save dialog handled by the app).
    SaveRequested,
    /// Periodic tick for reverting the confirmation button label.
    Tick,
}

/// Side effects the application should perform after handling a
/// workspace message.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Open the system file dialog to pick a source image.
    OpenFileDialog,
    /// Open the system save dialog for the enhanced image.
    SaveFileDialog,
    /// An enhancement finished successfully: the app shows a success toast.
    EnhancementComplete,
    /// Show a toast notification.
    Notify(Notification),
}

/// Environment information required to render the workspace.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// Complete workspace component state.
#[derive(Debug, Default)]
pub struct State {
    session: Session,
}

impl State {
    /// Creates a workspace seeded with the configured tuning defaults.
    pub fn new(defaults: &EnhancementConfig) -> Self {
        let mut session = Session::default();
        session.algorithm = defaults.algorithm;
        session.set_clip_limit(defaults.clip_limit);
        session.set_tile_size(defaults.tile_size);
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether the app-level tick subscription needs to stay alive for
    /// this component.
    pub fn needs_tick(&self) -> bool {
        self.session.in_flight || self.session.completed_at.is_some()
    }

    /// The enhanced image, when one is on screen.
    pub fn result_image(&self) -> Option<&ImageData> {
        self.session.result.as_ref()
    }

    pub fn handle_message(
        &mut self,
        message: Message,
        base_url: &str,
    ) -> (Effect, Task<Message>) {
        match message {
            Message::OpenFileRequested => (Effect::OpenFileDialog, Task::none()),
            Message::ImageLoaded(Ok((path, image))) => {
                self.session.set_source(image, Some(path));
                (Effect::None, Task::none())
            }
            Message::ImageLoaded(Err(error)) => (
                Effect::Notify(
                    Notification::error("notification-load-error")
                        .with_arg("detail", error.to_string()),
                ),
                Task::none(),
            ),
            Message::AlgorithmSelected(algorithm) => {
                if !self.session.in_flight {
                    self.session.algorithm = algorithm;
                }
                (Effect::None, Task::none())
            }
            Message::ClipLimitChanged(value) => {
                if !self.session.in_flight {
                    self.session.set_clip_limit(value);
                }
                (Effect::None, Task::none())
            }
            Message::TileSizeChanged(value) => {
                if !self.session.in_flight {
                    self.session.set_tile_size(value);
                }
                (Effect::None, Task::none())
            }
            Message::EnhanceRequested => self.start_enhancement(base_url),
            Message::EnhanceFinished(Ok(outcome)) => {
                self.session.in_flight = false;
                self.session.failed = false;
                self.session.result = Some(outcome.image);
                self.session.metrics = outcome.metrics;
                self.session.completed_at = Some(Instant::now());
                (Effect::EnhancementComplete, Task::none())
            }
            Message::EnhanceFinished(Err(error)) => {
                self.session.in_flight = false;
                self.session.failed = true;
                self.session.result = None;
                self.session.metrics = None;
                self.session.completed_at = None;
                (
                    Effect::Notify(
                        Notification::error(error.i18n_key())
                            .with_arg("detail", error.detail()),
                    ),
                    Task::none(),
                )
            }
            Message::SaveRequested => {
                if self.session.can_download() {
                    (Effect::SaveFileDialog, Task::none())
                } else {
                    (Effect::None, Task::none())
                }
            }
            Message::Tick => {
                if !self.session.showing_complete_label() {
                    self.session.completed_at = None;
                }
                (Effect::None, Task::none())
            }
        }
    }

    fn start_enhancement(&mut self, base_url: &str) -> (Effect, Task<Message>) {
        let Some(source) = self.session.source.as_ref() else {
            return (
                Effect::Notify(Notification::warning("notification-no-image")),
                Task::none(),
            );
        };
        if self.session.in_flight {
            // Single submission at a time; the control is disabled but
            // keyboard shortcuts can still race here.
            return (Effect::None, Task::none());
        }

        let request = EnhancementRequest {
            image: source.to_data_uri(),
            algorithm: self.session.algorithm,
            clip_limit: self.session.clip_limit,
            tile_size: self.session.tile_size,
        };

        self.session.in_flight = true;
        self.session.failed = false;
        self.session.result = None;
        self.session.metrics = None;
        self.session.completed_at = None;

        let task = Task::perform(
            api::enhance(base_url.to_owned(), request),
            Message::EnhanceFinished,
        );
        (Effect::None, task)
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let session = &self.session;

        if session.source.is_none() && !session.in_flight {
            return empty_state::view(env.i18n);
        }

        let controls = controls::view(controls::ViewContext {
            i18n: env.i18n,
            session,
        });

        let comparison = panes::view(panes::ViewContext {
            i18n: env.i18n,
            session,
        });

        let mut main_column = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fill)
            .push(comparison);

        if let Some(metrics) = session.metrics.as_ref() {
            main_column = main_column.push(metrics_panel::view(env.i18n, metrics));
        }

        Row::new()
            .spacing(spacing::LG)
            .padding(spacing::MD)
            .push(controls)
            .push(main_column)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Algorithm, EnhancementMetrics};
    use crate::app::config::EnhancementConfig;
    use crate::ui::workspace::Stage;

    const BASE_URL: &str = "http://127.0.0.1:5000";

    fn test_image() -> ImageData {
        let png: &[u8] = &[
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
            0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00,
            0x00, 0x1F, 0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0B, 0x49, 0x44, 0x41, 0x54, 0x78,
            0x9C, 0x63, 0x60, 0x00, 0x02, 0x00, 0x00, 0x05, 0x00, 0x01, 0x7A, 0x5E, 0xAB, 0x3F,
            0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
        ];
        ImageData::from_encoded(png.to_vec()).unwrap()
    }

    fn loaded_state() -> State {
        let mut state = State::new(&EnhancementConfig::default());
        let (_, _) = state.handle_message(
            Message::ImageLoaded(Ok((PathBuf::from("scan.png"), test_image()))),
            BASE_URL,
        );
        state
    }

    fn sample_metrics() -> EnhancementMetrics {
        EnhancementMetrics {
            contrast_original: 10.0,
            contrast_enhanced: 15.0,
            contrast_improvement: 50.0,
            sharpness_original: 1.0,
            sharpness_enhanced: 2.0,
            sharpness_improvement: 100.0,
            entropy_original: 6.0,
            entropy_enhanced: 6.6,
            entropy_improvement: 10.0,
        }
    }

    #[test]
    fn new_state_uses_config_defaults() {
        let defaults = EnhancementConfig {
            algorithm: Algorithm::Gamma,
            clip_limit: 3.5,
            tile_size: 4,
        };
        let state = State::new(&defaults);
        assert_eq!(state.session().algorithm, Algorithm::Gamma);
        assert_eq!(state.session().clip_limit, 3.5);
        assert_eq!(state.session().tile_size, 4);
    }

    #[test]
    fn enhance_without_image_warns_instead_of_submitting() {
        let mut state = State::new(&EnhancementConfig::default());
        let (effect, _task) = state.handle_message(Message::EnhanceRequested, BASE_URL);
        assert!(matches!(effect, Effect::Notify(_)));
        assert!(!state.session().in_flight);
    }

    #[test]
    fn enhance_request_enters_processing_stage() {
        let mut state = loaded_state();
        let (_, _task) = state.handle_message(Message::EnhanceRequested, BASE_URL);
        assert_eq!(state.session().stage(), Stage::Processing);
        assert!(!state.session().can_enhance());
    }

    #[test]
    fn second_enhance_while_in_flight_is_ignored() {
        let mut state = loaded_state();
        let _ = state.handle_message(Message::EnhanceRequested, BASE_URL);
        let (effect, _task) = state.handle_message(Message::EnhanceRequested, BASE_URL);
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn tuning_changes_are_ignored_while_in_flight() {
        let mut state = loaded_state();
        let _ = state.handle_message(Message::EnhanceRequested, BASE_URL);
        let _ = state.handle_message(Message::ClipLimitChanged(5.0), BASE_URL);
        let _ = state.handle_message(Message::AlgorithmSelected(Algorithm::Gamma), BASE_URL);
        assert_eq!(state.session().clip_limit, 2.0);
        assert_eq!(state.session().algorithm, Algorithm::Clahe);
    }

    #[test]
    fn successful_enhancement_shows_result_and_metrics() {
        let mut state = loaded_state();
        let _ = state.handle_message(Message::EnhanceRequested, BASE_URL);
        let outcome = EnhancementOutcome {
            image: test_image(),
            metrics: Some(sample_metrics()),
        };
        let (effect, _task) = state.handle_message(Message::EnhanceFinished(Ok(outcome)), BASE_URL);

        assert!(matches!(effect, Effect::EnhancementComplete));
        assert_eq!(state.session().stage(), Stage::ResultReady);
        assert!(state.session().can_download());
        assert!(state.session().metrics.is_some());
        assert!(state.session().showing_complete_label());
        assert!(state.needs_tick());
    }

    #[test]
    fn failed_enhancement_clears_result_and_notifies() {
        let mut state = loaded_state();
        let _ = state.handle_message(Message::EnhanceRequested, BASE_URL);
        let (effect, _task) = state.handle_message(
            Message::EnhanceFinished(Err(ServiceError::Status(500))),
            BASE_URL,
        );

        match effect {
            Effect::Notify(notification) => {
                assert_eq!(notification.message_key(), "error-service-status");
            }
            other => panic!("expected Notify, got {other:?}"),
        }
        assert_eq!(state.session().stage(), Stage::Failed);
        assert!(!state.session().can_download());
        assert!(state.session().metrics.is_none());
        // Retry stays possible.
        assert!(state.session().can_enhance());
    }

    #[test]
    fn failure_after_previous_success_discards_stale_result() {
        let mut state = loaded_state();
        let _ = state.handle_message(Message::EnhanceRequested, BASE_URL);
        let outcome = EnhancementOutcome {
            image: test_image(),
            metrics: None,
        };
        let _ = state.handle_message(Message::EnhanceFinished(Ok(outcome)), BASE_URL);
        assert_eq!(state.session().stage(), Stage::ResultReady);

        let _ = state.handle_message(Message::EnhanceRequested, BASE_URL);
        let _ = state.handle_message(
            Message::EnhanceFinished(Err(ServiceError::Transport("reset".into()))),
            BASE_URL,
        );
        assert_eq!(state.session().stage(), Stage::Failed);
        assert!(state.result_image().is_none());
    }

    #[test]
    fn save_request_without_result_is_inert() {
        let mut state = loaded_state();
        let (effect, _task) = state.handle_message(Message::SaveRequested, BASE_URL);
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn save_request_with_result_opens_dialog() {
        let mut state = loaded_state();
        let _ = state.handle_message(Message::EnhanceRequested, BASE_URL);
        let outcome = EnhancementOutcome {
            image: test_image(),
            metrics: None,
        };
        let _ = state.handle_message(Message::EnhanceFinished(Ok(outcome)), BASE_URL);

        let (effect, _task) = state.handle_message(Message::SaveRequested, BASE_URL);
        assert!(matches!(effect, Effect::SaveFileDialog));
    }

    #[test]
    fn loading_a_new_image_resets_failure() {
        let mut state = loaded_state();
        let _ = state.handle_message(Message::EnhanceRequested, BASE_URL);
        let _ = state.handle_message(
            Message::EnhanceFinished(Err(ServiceError::Status(500))),
            BASE_URL,
        );
        assert_eq!(state.session().stage(), Stage::Failed);

        let _ = state.handle_message(
            Message::ImageLoaded(Ok((PathBuf::from("other.png"), test_image()))),
            BASE_URL,
        );
        assert_eq!(state.session().stage(), Stage::ImageLoaded);
    }
}
