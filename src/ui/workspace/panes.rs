// SPDX-License-Identifier: MPL-2.0
//! Before/after comparison panes.
//!
//! The original pane always shows the loaded source. The enhanced pane is
//! driven by the session stage: a waiting placeholder, a processing
//! placeholder, the result image, or the failure placeholder.

use super::component::Message;
use super::state::{Session, Stage};
use crate::i18n::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::image::Viewer;
use iced::widget::{text, Column, Container, Row};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let ViewContext { i18n, session } = ctx;

    let original_content: Element<'a, Message> = match session.source.as_ref() {
        Some(image) => image_view(image),
        None => placeholder(i18n.tr("workspace-placeholder-waiting")),
    };

    let enhanced_content: Element<'a, Message> = match session.stage() {
        Stage::ResultReady => match session.result.as_ref() {
            Some(image) => image_view(image),
            None => placeholder(i18n.tr("workspace-placeholder-waiting")),
        },
        Stage::Processing => placeholder(i18n.tr("workspace-placeholder-processing")),
        Stage::Failed => placeholder(i18n.tr("workspace-placeholder-failed")),
        Stage::NoImage | Stage::ImageLoaded => {
            placeholder(i18n.tr("workspace-placeholder-waiting"))
        }
    };

    Row::new()
        .spacing(spacing::MD)
        .height(Length::Fill)
        .push(pane(i18n.tr("workspace-original-pane-title"), original_content))
        .push(pane(i18n.tr("workspace-enhanced-pane-title"), enhanced_content))
        .into()
}

fn pane<'a>(title: String, content: Element<'a, Message>) -> Element<'a, Message> {
    let body = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::image_pane);

    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(text(title).size(typography::TITLE_SM))
        .push(body)
        .into()
}

fn image_view<'a>(image: &ImageData) -> Element<'a, Message> {
    Viewer::new(image.handle.clone())
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    text(label)
        .size(typography::BODY)
        .style(styles::text::secondary)
        .into()
}
