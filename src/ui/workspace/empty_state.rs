// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when no image is loaded.
//!
//! Shown on startup without a file argument. Offers a button to open an
//! image via the system dialog and hints that files can be dropped on the
//! window.

use super::component::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Color, Element, Length};

/// Renders the empty state view.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("empty-state-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let subtitle = Text::new(i18n.tr("empty-state-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let open_button = button(Text::new(i18n.tr("empty-state-button")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::OpenFileRequested);

    let drop_hint = Text::new(i18n.tr("empty-state-drop-hint"))
        .size(typography::CAPTION)
        .color(Color {
            a: 0.5,
            ..palette::GRAY_400
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(open_button)
        .push(drop_hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
