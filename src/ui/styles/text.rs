// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use crate::ui::design_tokens::palette;
use iced::widget::text;
use iced::Theme;

/// Colors a metric delta by its sign: green when the enhancement improved
/// the metric, red when it regressed, theme default when unchanged.
pub fn metric_delta(delta: f64) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| {
        let color = if delta > 0.0 {
            Some(palette::SUCCESS_500)
        } else if delta < 0.0 {
            Some(palette::ERROR_500)
        } else {
            None
        };
        text::Style { color }
    }
}

/// Muted secondary text (hints, pane placeholders).
pub fn secondary(theme: &Theme) -> text::Style {
    let extended = theme.extended_palette();
    text::Style {
        color: Some(extended.background.strong.color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_sign_picks_color() {
        let theme = Theme::Dark;
        assert_eq!(
            metric_delta(1.5)(&theme).color,
            Some(palette::SUCCESS_500)
        );
        assert_eq!(metric_delta(-0.3)(&theme).color, Some(palette::ERROR_500));
        assert_eq!(metric_delta(0.0)(&theme).color, None);
    }
}
