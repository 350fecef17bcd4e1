// SPDX-License-Identifier: MPL-2.0
//! Slider-specific style definitions.
//!
//! Provides consistent styling for the tuning sliders across the application.

use crate::ui::design_tokens::palette;
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Style for a disabled slider (grayed out, non-interactive).
///
/// Used while an enhancement request is in flight and for algorithms
/// that take no tuning parameters. Adapts to Light/Dark theme.
pub fn disabled() -> impl Fn(&Theme, slider::Status) -> slider::Style {
    move |theme: &Theme, _status: slider::Status| {
        let is_light = matches!(theme, Theme::Light);

        let (rail_bg, handle_bg) = if is_light {
            (
                Color {
                    a: 0.6,
                    ..palette::GRAY_100
                },
                Color {
                    a: 0.5,
                    ..palette::GRAY_200
                },
            )
        } else {
            (
                Color {
                    a: 0.6,
                    ..palette::GRAY_700
                },
                Color {
                    a: 0.5,
                    ..palette::GRAY_400
                },
            )
        };

        slider::Style {
            rail: slider::Rail {
                backgrounds: (Background::Color(rail_bg), Background::Color(rail_bg)),
                width: 4.0,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 2.0.into(),
                },
            },
            handle: slider::Handle {
                shape: slider::HandleShape::Circle { radius: 6.0 },
                background: Background::Color(handle_bg),
                border_width: 1.0,
                border_color: palette::GRAY_400,
            },
        }
    }
}

/// Text style matching the disabled slider appearance.
#[must_use]
pub fn disabled_text_style(theme: &Theme) -> iced::widget::text::Style {
    let is_light = matches!(theme, Theme::Light);
    let color = if is_light {
        palette::GRAY_400
    } else {
        palette::GRAY_200
    };
    iced::widget::text::Style { color: Some(color) }
}
