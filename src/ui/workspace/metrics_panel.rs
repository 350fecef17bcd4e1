// SPDX-License-Identifier: MPL-2.0
//! Quality metrics panel rendered under the comparison panes.
//!
//! One card per metric (contrast, sharpness, entropy) with the original and
//! enhanced values and a signed improvement percentage, colored by sign.

use super::component::Message;
use super::state::{format_improvement, format_metric};
use crate::api::EnhancementMetrics;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Container, Row};
use iced::{Element, Length};

pub fn view<'a>(i18n: &'a I18n, metrics: &EnhancementMetrics) -> Element<'a, Message> {
    let cards = Row::new()
        .spacing(spacing::MD)
        .push(card(
            i18n,
            "metric-contrast",
            metrics.contrast_original,
            metrics.contrast_enhanced,
            metrics.contrast_improvement,
        ))
        .push(card(
            i18n,
            "metric-sharpness",
            metrics.sharpness_original,
            metrics.sharpness_enhanced,
            metrics.sharpness_improvement,
        ))
        .push(card(
            i18n,
            "metric-entropy",
            metrics.entropy_original,
            metrics.entropy_enhanced,
            metrics.entropy_improvement,
        ));

    Column::new()
        .spacing(spacing::XS)
        .push(text(i18n.tr("metrics-title")).size(typography::TITLE_SM))
        .push(cards)
        .into()
}

fn card<'a>(
    i18n: &'a I18n,
    name_key: &'static str,
    original: f64,
    enhanced: f64,
    improvement: f64,
) -> Element<'a, Message> {
    let delta = format_improvement(improvement);
    let delta_line = text(i18n.tr_with_args("metric-improvement", &[("delta", delta.as_str())]))
        .size(typography::BODY)
        .style(styles::text::metric_delta(improvement));

    let value_row = |label_key: &'static str, value: f64| {
        Row::new()
            .push(
                text(i18n.tr(label_key))
                    .size(typography::BODY_SM)
                    .style(styles::text::secondary),
            )
            .push(iced::widget::space::horizontal())
            .push(text(format_metric(value)).size(typography::BODY_SM))
    };

    let content = Column::new()
        .spacing(spacing::XXS)
        .push(text(i18n.tr(name_key)).size(typography::BODY))
        .push(value_row("metric-original-label", original))
        .push(value_row("metric-enhanced-label", enhanced))
        .push(delta_line);

    Container::new(content)
        .width(Length::Fixed(sizing::METRIC_CARD_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::metric_card)
        .into()
}
