// SPDX-License-Identifier: MPL-2.0
//! Administrator login dialog.
//!
//! The entered credentials are only handed to the parent for the
//! server-side login call; nothing is verified locally.

use crate::domain::Credentials;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Text};
use iced::Element;

/// Login dialog state: the credential form buffer.
#[derive(Debug, Clone, Default)]
pub struct State {
    username: String,
    password: String,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    UsernameChanged(String),
    PasswordChanged(String),
    Submit,
    Close,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Close,
    Submit(Credentials),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::UsernameChanged(value) => {
            state.username = value;
            Event::None
        }
        Message::PasswordChanged(value) => {
            state.password = value;
            Event::None
        }
        Message::Submit => Event::Submit(Credentials {
            username: state.username.clone(),
            password: state.password.clone(),
        }),
        Message::Close => Event::Close,
    }
}

/// Render the dialog: username and password fields plus submit.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("login-title")).size(typography::TITLE_MD);

    let username_label = Text::new(i18n.tr("login-username-label")).size(typography::BODY);
    let username_input = text_input(&i18n.tr("login-username-placeholder"), &state.username)
        .on_input(Message::UsernameChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS);

    let password_label = Text::new(i18n.tr("login-password-label")).size(typography::BODY);
    let password_input = text_input(&i18n.tr("login-password-placeholder"), &state.password)
        .secure(true)
        .on_input(Message::PasswordChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS);

    let submit_button = button(Text::new(i18n.tr("login-submit-button")))
        .on_press(Message::Submit)
        .style(styles::button::primary);

    Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(username_label)
                .push(username_input),
        )
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(password_label)
                .push(password_input),
        )
        .push(submit_button)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_composes_credentials_from_the_buffer() {
        let mut state = State::new();
        update(&mut state, Message::UsernameChanged("admin".to_string()));
        update(&mut state, Message::PasswordChanged("1234".to_string()));

        match update(&mut state, Message::Submit) {
            Event::Submit(credentials) => {
                assert_eq!(credentials.username, "admin");
                assert_eq!(credentials.password, "1234");
            }
            other => panic!("expected Submit, got {:?}", other),
        }
    }

    #[test]
    fn close_emits_close_event() {
        let mut state = State::new();
        assert!(matches!(update(&mut state, Message::Close), Event::Close));
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let state = State::new();
        let _element = view(&state, &i18n);
    }
}
