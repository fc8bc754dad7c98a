// SPDX-License-Identifier: MPL-2.0
//! Adoption request dialog.
//!
//! Three free-text fields; no format validation — the API owns any checks.
//! The buffer starts empty on every open.

use crate::domain::{AdoptionRequest, Animal};
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Text};
use iced::Element;

/// Adoption dialog state: the target animal plus the form buffer.
#[derive(Debug, Clone)]
pub struct State {
    animal: Animal,
    name: String,
    email: String,
    phone: String,
}

impl State {
    /// Opens the form for `animal` with a cleared buffer.
    #[must_use]
    pub fn new(animal: Animal) -> Self {
        Self {
            animal,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
        }
    }

    #[must_use]
    pub fn animal(&self) -> &Animal {
        &self.animal
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    Submit,
    Close,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Close,
    Submit(AdoptionRequest),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => {
            state.name = value;
            Event::None
        }
        Message::EmailChanged(value) => {
            state.email = value;
            Event::None
        }
        Message::PhoneChanged(value) => {
            state.phone = value;
            Event::None
        }
        Message::Submit => Event::Submit(AdoptionRequest {
            animal_id: state.animal.id,
            requester_name: state.name.clone(),
            email: state.email.clone(),
            phone: state.phone.clone(),
        }),
        Message::Close => Event::Close,
    }
}

/// Render the dialog: title and the three-field form.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("adopt-title")).size(typography::TITLE_MD);

    let name_input = labeled_input(
        i18n.tr("adopt-name-label"),
        i18n.tr("adopt-name-placeholder"),
        &state.name,
        Message::NameChanged,
    );
    let email_input = labeled_input(
        i18n.tr("adopt-email-label"),
        i18n.tr("adopt-email-placeholder"),
        &state.email,
        Message::EmailChanged,
    );
    let phone_input = labeled_input(
        i18n.tr("adopt-phone-label"),
        i18n.tr("adopt-phone-placeholder"),
        &state.phone,
        Message::PhoneChanged,
    );

    let submit_button = button(Text::new(i18n.tr("adopt-submit-button")))
        .on_press(Message::Submit)
        .style(styles::button::primary);

    Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(name_input)
        .push(email_input)
        .push(phone_input)
        .push(submit_button)
        .into()
}

/// A label stacked over a text input.
fn labeled_input<'a>(
    label: String,
    placeholder: String,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY))
        .push(
            text_input(&placeholder, value)
                .on_input(on_input)
                .on_submit(Message::Submit)
                .padding(spacing::XS),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AnimalId;

    fn animal() -> Animal {
        Animal {
            id: AnimalId::new(5),
            name: "Luna".to_string(),
            species: "Perro".to_string(),
            breed: "Labrador".to_string(),
            age: 1,
            summary: String::new(),
            detail: String::new(),
            photo: String::new(),
        }
    }

    #[test]
    fn buffer_starts_cleared() {
        let state = State::new(animal());
        assert!(state.name.is_empty());
        assert!(state.email.is_empty());
        assert!(state.phone.is_empty());
    }

    #[test]
    fn submit_composes_the_request_from_the_buffer() {
        let mut state = State::new(animal());
        update(&mut state, Message::NameChanged("Ana".to_string()));
        update(&mut state, Message::EmailChanged("ana@example.com".to_string()));
        update(&mut state, Message::PhoneChanged("555-0100".to_string()));

        match update(&mut state, Message::Submit) {
            Event::Submit(request) => {
                assert_eq!(request.animal_id, AnimalId::new(5));
                assert_eq!(request.requester_name, "Ana");
                assert_eq!(request.email, "ana@example.com");
                assert_eq!(request.phone, "555-0100");
            }
            other => panic!("expected Submit, got {:?}", other),
        }
    }

    #[test]
    fn any_string_is_accepted_without_validation() {
        let mut state = State::new(animal());
        update(&mut state, Message::EmailChanged("not-an-email".to_string()));

        assert!(matches!(
            update(&mut state, Message::Submit),
            Event::Submit(_)
        ));
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let state = State::new(animal());
        let _element = view(&state, &i18n);
    }
}
