// SPDX-License-Identifier: MPL-2.0
//! Add/edit listing form dialog.
//!
//! Every field is free text except species (a selector over the configured
//! species list) and age. Age stays a raw text buffer while typing; it is
//! parsed on submit, and non-numeric input blocks the submission instead of
//! being coerced.

use crate::domain::{Animal, AnimalId, NewAnimal};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, pick_list, text, text_input, Column, Text};
use iced::{Element, Length, Theme};

/// Whether the form creates a listing or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Add,
    Edit(AnimalId),
}

/// Form dialog state: the edit buffer plus validation flags.
#[derive(Debug, Clone)]
pub struct State {
    mode: Mode,
    name: String,
    species: Option<String>,
    breed: String,
    age_input: String,
    summary: String,
    detail: String,
    photo: String,
    /// Set when the last submit failed to parse the age.
    age_invalid: bool,
}

impl State {
    /// Opens the form in add mode with an empty buffer.
    #[must_use]
    pub fn add() -> Self {
        Self {
            mode: Mode::Add,
            name: String::new(),
            species: None,
            breed: String::new(),
            age_input: String::new(),
            summary: String::new(),
            detail: String::new(),
            photo: String::new(),
            age_invalid: false,
        }
    }

    /// Opens the form pre-populated from an existing listing.
    #[must_use]
    pub fn edit(animal: Animal) -> Self {
        Self {
            mode: Mode::Edit(animal.id),
            name: animal.name,
            species: Some(animal.species),
            breed: animal.breed,
            age_input: animal.age.to_string(),
            summary: animal.summary,
            detail: animal.detail,
            photo: animal.photo,
            age_invalid: false,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    fn buffer_as_new_animal(&self, species: String, age: u32) -> NewAnimal {
        NewAnimal {
            name: self.name.clone(),
            species,
            breed: self.breed.clone(),
            age,
            summary: self.summary.clone(),
            detail: self.detail.clone(),
            photo: self.photo.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    SpeciesSelected(String),
    BreedChanged(String),
    AgeChanged(String),
    SummaryChanged(String),
    DetailChanged(String),
    PhotoChanged(String),
    Submit,
    Close,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Close,
    Create(NewAnimal),
    Update(Animal),
    /// Submission blocked: the age buffer is not a whole number.
    InvalidAge,
    /// Submission blocked: no species selected.
    MissingSpecies,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => {
            state.name = value;
            Event::None
        }
        Message::SpeciesSelected(value) => {
            state.species = Some(value);
            Event::None
        }
        Message::BreedChanged(value) => {
            state.breed = value;
            Event::None
        }
        Message::AgeChanged(value) => {
            state.age_input = value;
            state.age_invalid = false;
            Event::None
        }
        Message::SummaryChanged(value) => {
            state.summary = value;
            Event::None
        }
        Message::DetailChanged(value) => {
            state.detail = value;
            Event::None
        }
        Message::PhotoChanged(value) => {
            state.photo = value;
            Event::None
        }
        Message::Submit => {
            let Some(species) = state.species.clone() else {
                return Event::MissingSpecies;
            };

            let Ok(age) = state.age_input.trim().parse::<u32>() else {
                state.age_invalid = true;
                return Event::InvalidAge;
            };

            let draft = state.buffer_as_new_animal(species, age);
            match state.mode {
                Mode::Add => Event::Create(draft),
                Mode::Edit(id) => Event::Update(draft.with_id(id)),
            }
        }
        Message::Close => Event::Close,
    }
}

/// Render the form dialog.
pub fn view<'a>(state: &'a State, i18n: &'a I18n, species: &'a [String]) -> Element<'a, Message> {
    let title_key = match state.mode {
        Mode::Add => "form-add-title",
        Mode::Edit(_) => "form-edit-title",
    };
    let title = Text::new(i18n.tr(title_key)).size(typography::TITLE_MD);

    let name_input = labeled_input(
        i18n.tr("form-name-label"),
        i18n.tr("form-name-placeholder"),
        &state.name,
        Message::NameChanged,
    );

    let species_picker = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("form-species-label")).size(typography::BODY))
        .push(
            pick_list(species, state.species.clone(), Message::SpeciesSelected)
                .placeholder(i18n.tr("form-species-placeholder"))
                .padding(spacing::XS)
                .width(Length::Fill),
        );

    let breed_input = labeled_input(
        i18n.tr("form-breed-label"),
        i18n.tr("form-breed-placeholder"),
        &state.breed,
        Message::BreedChanged,
    );

    let mut age_column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("form-age-label")).size(typography::BODY))
        .push(
            text_input(&i18n.tr("form-age-placeholder"), &state.age_input)
                .on_input(Message::AgeChanged)
                .padding(spacing::XS),
        );
    if state.age_invalid {
        age_column = age_column.push(
            Text::new(i18n.tr("form-age-invalid"))
                .size(typography::BODY_SM)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    let summary_input = labeled_input(
        i18n.tr("form-summary-label"),
        i18n.tr("form-summary-placeholder"),
        &state.summary,
        Message::SummaryChanged,
    );
    let detail_input = labeled_input(
        i18n.tr("form-detail-label"),
        i18n.tr("form-detail-placeholder"),
        &state.detail,
        Message::DetailChanged,
    );
    let photo_input = labeled_input(
        i18n.tr("form-photo-label"),
        i18n.tr("form-photo-placeholder"),
        &state.photo,
        Message::PhotoChanged,
    );

    let save_button = button(Text::new(i18n.tr("form-save-button")))
        .on_press(Message::Submit)
        .style(styles::button::primary);

    Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(name_input)
        .push(species_picker)
        .push(breed_input)
        .push(age_column)
        .push(summary_input)
        .push(detail_input)
        .push(photo_input)
        .push(save_button)
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
                .padding(spacing::XS),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animal() -> Animal {
        Animal {
            id: AnimalId::new(8),
            name: "Toby".to_string(),
            species: "Perro".to_string(),
            breed: "Poodle".to_string(),
            age: 4,
            summary: "Small and calm".to_string(),
            detail: "Likes short walks.".to_string(),
            photo: "toby.png".to_string(),
        }
    }

    fn filled_add_form() -> State {
        let mut state = State::add();
        update(&mut state, Message::NameChanged("Luna".to_string()));
        update(&mut state, Message::SpeciesSelected("Perro".to_string()));
        update(&mut state, Message::BreedChanged("Labrador".to_string()));
        update(&mut state, Message::AgeChanged("2".to_string()));
        update(&mut state, Message::SummaryChanged("Playful".to_string()));
        update(&mut state, Message::DetailChanged("Loves water.".to_string()));
        update(&mut state, Message::PhotoChanged("luna.png".to_string()));
        state
    }

    #[test]
    fn add_mode_starts_with_an_empty_buffer() {
        let state = State::add();
        assert_eq!(state.mode(), Mode::Add);
        assert!(state.name.is_empty());
        assert!(state.species.is_none());
        assert!(state.age_input.is_empty());
    }

    #[test]
    fn edit_mode_prefills_the_buffer() {
        let state = State::edit(animal());
        assert_eq!(state.mode(), Mode::Edit(AnimalId::new(8)));
        assert_eq!(state.name, "Toby");
        assert_eq!(state.species.as_deref(), Some("Perro"));
        assert_eq!(state.age_input, "4");
    }

    #[test]
    fn submit_in_add_mode_creates_a_draft() {
        let mut state = filled_add_form();
        match update(&mut state, Message::Submit) {
            Event::Create(draft) => {
                assert_eq!(draft.name, "Luna");
                assert_eq!(draft.species, "Perro");
                assert_eq!(draft.age, 2);
            }
            other => panic!("expected Create, got {:?}", other),
        }
    }

    #[test]
    fn submit_in_edit_mode_keeps_the_identifier() {
        let mut state = State::edit(animal());
        update(&mut state, Message::NameChanged("Tobias".to_string()));

        match update(&mut state, Message::Submit) {
            Event::Update(updated) => {
                assert_eq!(updated.id, AnimalId::new(8));
                assert_eq!(updated.name, "Tobias");
            }
            other => panic!("expected Update, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_age_blocks_submission() {
        let mut state = filled_add_form();
        update(&mut state, Message::AgeChanged("three".to_string()));

        assert!(matches!(
            update(&mut state, Message::Submit),
            Event::InvalidAge
        ));
        assert!(state.age_invalid);

        // Typing again clears the inline error.
        update(&mut state, Message::AgeChanged("3".to_string()));
        assert!(!state.age_invalid);
    }

    #[test]
    fn age_input_tolerates_surrounding_whitespace() {
        let mut state = filled_add_form();
        update(&mut state, Message::AgeChanged(" 5 ".to_string()));

        match update(&mut state, Message::Submit) {
            Event::Create(draft) => assert_eq!(draft.age, 5),
            other => panic!("expected Create, got {:?}", other),
        }
    }

    #[test]
    fn missing_species_blocks_submission() {
        let mut state = State::add();
        update(&mut state, Message::AgeChanged("1".to_string()));

        assert!(matches!(
            update(&mut state, Message::Submit),
            Event::MissingSpecies
        ));
    }

    #[test]
    fn view_renders_in_both_modes() {
        let i18n = I18n::default();
        let species = vec!["Perro".to_string(), "Gato".to_string()];

        let add_state = State::add();
        let _add = view(&add_state, &i18n, &species);
        let edit_state = State::edit(animal());
        let _edit = view(&edit_state, &i18n, &species);
    }
}
