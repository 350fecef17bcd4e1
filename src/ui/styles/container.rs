// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the controls column and settings sections.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Bordered surface holding one image of the before/after comparison.
pub fn image_pane(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Card surface for a single metric in the metrics panel.
pub fn metric_card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
