// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn filled(base: Color, hover: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => hover,
        _ => base,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: background,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: match status {
            button::Status::Hovered => shadow::MD,
            _ => shadow::SM,
        },
        snap: true,
    }
}

/// Primary action (details, dialog submits).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::PRIMARY_500, palette::PRIMARY_400, status)
}

/// Neutral action (pagination, back buttons).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette();
    let background = match status {
        button::Status::Hovered => base.background.strong.color,
        _ => base.background.weak.color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: base.background.base.text,
        border: Border {
            color: base.background.strong.color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Positive action (adopt).
pub fn success(_theme: &Theme, status: button::Status) -> button::Style {
    filled(
        palette::SUCCESS_500,
        Color {
            a: 0.85,
            ..palette::SUCCESS_500
        },
        status,
    )
}

/// Cautionary action (edit).
pub fn warning(_theme: &Theme, status: button::Status) -> button::Style {
    filled(
        palette::WARNING_500,
        Color {
            a: 0.85,
            ..palette::WARNING_500
        },
        status,
    )
}

/// Destructive action (delete).
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    filled(
        palette::ERROR_500,
        Color {
            a: 0.85,
            ..palette::ERROR_500
        },
        status,
    )
}

/// Grayed out, non-interactive.
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Selected/active state (current page button).
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::PRIMARY_600, palette::PRIMARY_500, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_and_selected_are_visually_distinct() {
        let theme = Theme::Dark;
        let primary = primary(&theme, button::Status::Active);
        let selected = selected(&theme, button::Status::Active);
        assert_ne!(primary.background, selected.background);
    }

    #[test]
    fn disabled_style_ignores_status() {
        let theme = Theme::Light;
        let style_fn = disabled();
        let active = style_fn(&theme, button::Status::Active);
        let hovered = style_fn(&theme, button::Status::Hovered);
        assert_eq!(active.background, hovered.background);
    }
}
