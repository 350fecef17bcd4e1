// SPDX-License-Identifier: MPL-2.0
//! Tuning controls column: algorithm picker, parameter sliders and action
//! buttons.

use super::component::Message;
use super::state::Session;
use crate::api::Algorithm;
use crate::app::config::defaults::{
    CLIP_LIMIT_STEP, MAX_CLIP_LIMIT, MAX_TILE_SIZE, MIN_CLIP_LIMIT, MIN_TILE_SIZE,
};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, pick_list, slider, text, Column, Container, Row};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let ViewContext { i18n, session } = ctx;

    let open_button = button(text(i18n.tr("workspace-open-button")).size(typography::BODY))
        .on_press(Message::OpenFileRequested)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::button::unselected);

    let algorithm_label = text(i18n.tr("workspace-algorithm-label")).size(typography::BODY);
    let algorithm_picker = pick_list(
        Algorithm::ALL,
        Some(session.algorithm),
        Message::AlgorithmSelected,
    )
    .width(Length::Fill)
    .text_size(typography::BODY);

    // The CLAHE tunables are visually disabled for algorithms that ignore
    // them and while a request is in flight. Value changes arriving anyway
    // are dropped in the update path.
    let tunables_active = session.algorithm.has_tunables() && !session.in_flight;

    let mut clip_slider = slider(
        MIN_CLIP_LIMIT..=MAX_CLIP_LIMIT,
        session.clip_limit,
        Message::ClipLimitChanged,
    )
    .step(CLIP_LIMIT_STEP);
    let mut tile_slider = slider(
        MIN_TILE_SIZE..=MAX_TILE_SIZE,
        session.tile_size,
        Message::TileSizeChanged,
    );
    if !tunables_active {
        clip_slider = clip_slider.style(styles::slider::disabled());
        tile_slider = tile_slider.style(styles::slider::disabled());
    }

    let clip_row = labeled_slider(
        i18n.tr("workspace-clip-limit-label"),
        format!("{:.1}", session.clip_limit),
        clip_slider.into(),
        tunables_active,
    );

    let tile_row = labeled_slider(
        i18n.tr("workspace-tile-size-label"),
        session.tile_size.to_string(),
        tile_slider.into(),
        tunables_active,
    );

    let enhance_label = if session.in_flight {
        i18n.tr("workspace-enhance-processing")
    } else if session.showing_complete_label() {
        i18n.tr("workspace-enhance-complete")
    } else {
        i18n.tr("workspace-enhance-button")
    };
    let mut enhance_button = button(text(enhance_label).size(typography::BODY))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(if session.showing_complete_label() {
            styles::button::success
        } else {
            styles::button::primary
        });
    if session.can_enhance() {
        enhance_button = enhance_button.on_press(Message::EnhanceRequested);
    }

    let mut save_button = button(text(i18n.tr("workspace-save-button")).size(typography::BODY))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::button::unselected);
    if session.can_download() {
        save_button = save_button.on_press(Message::SaveRequested);
    }

    let column = Column::new()
        .spacing(spacing::MD)
        .push(open_button)
        .push(Column::new().spacing(spacing::XXS).push(algorithm_label).push(algorithm_picker))
        .push(clip_row)
        .push(tile_row)
        .push(enhance_button)
        .push(save_button);

    Container::new(column)
        .width(Length::Fixed(sizing::CONTROLS_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

/// A slider with its name on the left and current value on the right.
fn labeled_slider<'a>(
    label: String,
    value: String,
    slider_widget: Element<'a, Message>,
    active: bool,
) -> Element<'a, Message> {
    let mut label_text = text(label).size(typography::BODY_SM);
    let mut value_text = text(value).size(typography::BODY_SM);

    if !active {
        label_text = label_text.style(styles::slider::disabled_text_style);
        value_text = value_text.style(styles::slider::disabled_text_style);
    }

    Column::new()
        .spacing(spacing::XXS)
        .push(
            Row::new()
                .push(label_text)
                .push(iced::widget::space::horizontal())
                .push(value_text),
        )
        .push(slider_widget)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::EnhancementConfig;
    use crate::ui::workspace::State;

    #[test]
    fn controls_build_for_default_session() {
        let i18n = I18n::default();
        let state = State::new(&EnhancementConfig::default());
        let _element: Element<'_, Message> = view(ViewContext {
            i18n: &i18n,
            session: state.session(),
        });
    }
}
