// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, with the toast overlay stacked on top.

use super::{config::Config, Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::settings::{self, State as SettingsState, ViewContext as SettingsViewContext};
use crate::ui::workspace;
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub config: &'a Config,
    pub settings: &'a SettingsState,
    pub workspace: &'a workspace::State,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Workspace => ctx
            .workspace
            .view(workspace::component::ViewEnv { i18n: ctx.i18n })
            .map(Message::Workspace),
        Screen::Settings => settings::view(SettingsViewContext {
            i18n: ctx.i18n,
            config: ctx.config,
            state: ctx.settings,
        })
        .map(Message::Settings),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        settings_active: ctx.screen == Screen::Settings,
    })
    .map(Message::Navbar);

    let column = Column::new().push(navbar_view).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let base = Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .push(base)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
