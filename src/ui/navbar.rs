// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for app-level navigation.
//!
//! Two tabs at the top of the window: the enhancement workspace and the
//! settings screen. The active tab is highlighted.

use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Background, Color, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub settings_active: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenWorkspace,
    OpenSettings,
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let tab = |label: String, message: Message, active: bool| {
        button(Text::new(label).size(typography::BODY))
            .on_press(message)
            .padding([spacing::XS, spacing::MD])
            .style(if active {
                styles::button::selected
            } else {
                styles::button::unselected
            })
    };

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(tab(
            ctx.i18n.tr("navbar-workspace-button"),
            Message::OpenWorkspace,
            !ctx.settings_active,
        ))
        .push(tab(
            ctx.i18n.tr("navbar-settings-button"),
            Message::OpenSettings,
            ctx.settings_active,
        ));

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(toolbar_style)
        .into()
}

fn toolbar_style(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        ..Default::default()
    }
}
