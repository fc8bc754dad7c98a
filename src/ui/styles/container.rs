// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Catalog card surface.
pub fn card(theme: &Theme) -> container::Style {
    let base = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(base.background.weak.color)),
        border: Border {
            color: base.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        text_color: Some(base.background.base.text),
        ..Default::default()
    }
}

/// Dialog surface floating above the backdrop.
pub fn modal(theme: &Theme) -> container::Style {
    let base = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(base.background.base.color)),
        border: Border {
            color: base.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(base.background.base.text),
        ..Default::default()
    }
}

/// Dimmed backdrop behind a dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Top navigation bar surface.
pub fn toolbar(theme: &Theme) -> container::Style {
    let base = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(base.background.weak.color)),
        text_color: Some(base.background.base.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_translucent() {
        let style = backdrop(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("expected translucent color, got {:?}", other),
        }
    }

    #[test]
    fn card_and_modal_have_rounded_borders() {
        let theme = Theme::Light;
        assert!(card(&theme).border.width > 0.0);
        assert!(modal(&theme).border.width > 0.0);
    }
}
