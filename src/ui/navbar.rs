// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar.
//!
//! Shows the association brand, the account button (sign in / sign out),
//! and — while an administrator session is active — the button that opens
//! the listing form in add mode.

use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Whether an administrator session is active.
    pub is_admin: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenLogin,
    SignOut,
    AddAnimal,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenLogin,
    SignOut,
    AddAnimal,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenLogin => Event::OpenLogin,
        Message::SignOut => Event::SignOut,
        Message::AddAnimal => Event::AddAnimal,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("navbar-brand")).size(typography::TITLE_MD);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill).height(Length::Shrink));

    if ctx.is_admin {
        let add_button = button(Text::new(ctx.i18n.tr("navbar-add-button")))
            .on_press(Message::AddAnimal)
            .style(styles::button::primary);
        row = row.push(add_button);

        let sign_out_button = button(Text::new(ctx.i18n.tr("navbar-sign-out")))
            .on_press(Message::SignOut)
            .style(styles::button::secondary);
        row = row.push(sign_out_button);
    } else {
        let sign_in_button = button(Text::new(ctx.i18n.tr("navbar-sign-in")))
            .on_press(Message::OpenLogin)
            .style(styles::button::secondary);
        row = row.push(sign_in_button);
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}
