// SPDX-License-Identifier: MPL-2.0
//! Modal dialogs: details, adoption request, administrator login, and the
//! add/edit listing form.
//!
//! The application holds at most one open dialog in an `Option<Modal>`
//! slot, which structurally enforces the one-modal-at-a-time invariant.
//! Dialog submissions surface as [`Event`]s; the application owns the
//! resulting API calls.

pub mod adopt;
pub mod animal_form;
pub mod details;
pub mod login;

use crate::domain::{AdoptionRequest, Animal, Credentials, NewAnimal};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{center, container, mouse_area, opaque, stack};
use iced::{Element, Length};

/// The currently open dialog, if any.
#[derive(Debug, Clone)]
pub enum Modal {
    Details(details::State),
    Adopt(adopt::State),
    Login(login::State),
    AnimalForm(animal_form::State),
}

/// Messages routed to the open dialog.
#[derive(Debug, Clone)]
pub enum Message {
    Details(details::Message),
    Adopt(adopt::Message),
    Login(login::Message),
    AnimalForm(animal_form::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Close the dialog without side effects.
    Close,
    /// Visitor submitted the adoption form.
    SubmitAdoption(AdoptionRequest),
    /// Administrator submitted the login form.
    SubmitLogin(Credentials),
    /// Administrator saved the form in add mode.
    SubmitCreate(NewAnimal),
    /// Administrator saved the form in edit mode.
    SubmitUpdate(Animal),
    /// The form was submitted with a non-numeric age.
    InvalidAge,
    /// The form was submitted without a species selection.
    MissingSpecies,
}

/// Routes a message to the open dialog and lifts its event.
///
/// A message for a dialog other than the open one is dropped; this can
/// only happen when input races a dialog switch.
pub fn update(modal: &mut Modal, message: Message) -> Event {
    match (modal, message) {
        (Modal::Details(state), Message::Details(message)) => match details::update(state, message)
        {
            details::Event::Close => Event::Close,
        },
        (Modal::Adopt(state), Message::Adopt(message)) => match adopt::update(state, message) {
            adopt::Event::None => Event::None,
            adopt::Event::Close => Event::Close,
            adopt::Event::Submit(request) => Event::SubmitAdoption(request),
        },
        (Modal::Login(state), Message::Login(message)) => match login::update(state, message) {
            login::Event::None => Event::None,
            login::Event::Close => Event::Close,
            login::Event::Submit(credentials) => Event::SubmitLogin(credentials),
        },
        (Modal::AnimalForm(state), Message::AnimalForm(message)) => {
            match animal_form::update(state, message) {
                animal_form::Event::None => Event::None,
                animal_form::Event::Close => Event::Close,
                animal_form::Event::Create(animal) => Event::SubmitCreate(animal),
                animal_form::Event::Update(animal) => Event::SubmitUpdate(animal),
                animal_form::Event::InvalidAge => Event::InvalidAge,
                animal_form::Event::MissingSpecies => Event::MissingSpecies,
            }
        }
        _ => Event::None,
    }
}

/// Contextual data needed to render the open dialog.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Species offered by the listing form selector.
    pub species: &'a [String],
}

/// Renders the open dialog's content.
pub fn view<'a>(modal: &'a Modal, ctx: ViewContext<'a>) -> Element<'a, Message> {
    match modal {
        Modal::Details(state) => details::view(state, ctx.i18n).map(Message::Details),
        Modal::Adopt(state) => adopt::view(state, ctx.i18n).map(Message::Adopt),
        Modal::Login(state) => login::view(state, ctx.i18n).map(Message::Login),
        Modal::AnimalForm(state) => {
            animal_form::view(state, ctx.i18n, ctx.species).map(Message::AnimalForm)
        }
    }
}

/// Stacks `dialog` above `base` on a dimmed backdrop.
///
/// Clicking the backdrop emits `on_dismiss`.
pub fn overlay<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    dialog: Element<'a, M>,
    on_dismiss: M,
) -> Element<'a, M> {
    let dialog = container(dialog)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::modal);

    let backdrop = mouse_area(
        container(center(opaque(dialog)))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(on_dismiss);

    stack![base, opaque(backdrop)].into()
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
            detail: "Friendly".to_string(),
            photo: String::new(),
        }
    }

    #[test]
    fn message_for_a_different_dialog_is_dropped() {
        let mut modal = Modal::Details(details::State::new(animal()));
        let event = update(
            &mut modal,
            Message::Login(login::Message::UsernameChanged("admin".to_string())),
        );
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn details_close_lifts_to_close_event() {
        let mut modal = Modal::Details(details::State::new(animal()));
        let event = update(&mut modal, Message::Details(details::Message::Close));
        assert!(matches!(event, Event::Close));
    }

    #[test]
    fn every_dialog_variant_renders() {
        let i18n = I18n::default();
        let species = vec!["Perro".to_string(), "Gato".to_string()];

        let modals = [
            Modal::Details(details::State::new(animal())),
            Modal::Adopt(adopt::State::new(animal())),
            Modal::Login(login::State::new()),
            Modal::AnimalForm(animal_form::State::add()),
            Modal::AnimalForm(animal_form::State::edit(animal())),
        ];

        for modal in &modals {
            let _element = view(
                modal,
                ViewContext {
                    i18n: &i18n,
                    species: &species,
                },
            );
        }
    }
}
