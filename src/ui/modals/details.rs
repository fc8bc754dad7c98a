// SPDX-License-Identifier: MPL-2.0
//! Animal details dialog.

use crate::domain::Animal;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Row, Space, Text};
use iced::{Element, Length};

/// Details dialog state: the animal being inspected.
#[derive(Debug, Clone)]
pub struct State {
    animal: Animal,
}

impl State {
    #[must_use]
    pub fn new(animal: Animal) -> Self {
        Self { animal }
    }

    #[must_use]
    pub fn animal(&self) -> &Animal {
        &self.animal
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Close,
}

#[derive(Debug, Clone)]
pub enum Event {
    Close,
}

pub fn update(_state: &mut State, message: Message) -> Event {
    match message {
        Message::Close => Event::Close,
    }
}

/// Render the dialog: identity header, detail text, back button.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr_with_args(
        "details-title",
        &[
            ("name", state.animal.name.as_str()),
            ("breed", state.animal.breed.as_str()),
        ],
    ))
    .size(typography::TITLE_MD);

    let detail = Text::new(state.animal.detail.as_str()).size(typography::BODY);

    let back_button = button(Text::new(i18n.tr("details-back-button")))
        .on_press(Message::Close)
        .style(styles::button::secondary);

    let footer = Row::new()
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(back_button);

    Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(detail)
        .push(footer)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AnimalId;

    fn animal() -> Animal {
        Animal {
            id: AnimalId::new(1),
            name: "Rex".to_string(),
            species: "Perro".to_string(),
            breed: "Labrador".to_string(),
            age: 3,
            summary: String::new(),
            detail: "Rex gets along with children.".to_string(),
            photo: String::new(),
        }
    }

    #[test]
    fn close_message_emits_close_event() {
        let mut state = State::new(animal());
        assert!(matches!(update(&mut state, Message::Close), Event::Close));
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let state = State::new(animal());
        let _element = view(&state, &i18n);
    }
}
