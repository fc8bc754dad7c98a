// SPDX-License-Identifier: MPL-2.0
//! Catalog screen state and update logic.
//!
//! The state holds the *filtered* animal list as delivered by the loader,
//! the live search term, and the page cursor. Card actions surface as
//! [`Event`]s for the application to orchestrate (open a dialog, issue a
//! delete).

mod view;

pub use view::{view, ViewContext};

use crate::domain::{Animal, AnimalId, Pagination};

/// Catalog screen state.
#[derive(Debug)]
pub struct State {
    animals: Vec<Animal>,
    search_term: String,
    pagination: Pagination,
}

impl State {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            animals: Vec::new(),
            search_term: String::new(),
            pagination: Pagination::new(page_size),
        }
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Replaces the active list and re-clamps the page cursor so a
    /// narrowed result set can never show an empty page.
    pub fn set_animals(&mut self, animals: Vec<Animal>) {
        self.animals = animals;
        self.pagination.clamp(self.animals.len());
    }

    #[must_use]
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    /// Animals visible on the current page.
    #[must_use]
    pub fn page_animals(&self) -> &[Animal] {
        self.pagination.slice(&self.animals)
    }

    #[must_use]
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    #[must_use]
    pub fn animal(&self, id: AnimalId) -> Option<&Animal> {
        self.animals.iter().find(|animal| animal.id == id)
    }
}

/// Messages emitted by the catalog screen.
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    PageSelected(usize),
    PreviousPage,
    NextPage,
    DetailsPressed(AnimalId),
    AdoptPressed(AnimalId),
    EditPressed(AnimalId),
    DeletePressed(AnimalId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The search term changed; the loader must refetch.
    SearchChanged,
    ShowDetails(Animal),
    ShowAdoptForm(Animal),
    EditAnimal(Animal),
    DeleteAnimal(AnimalId),
}

/// Processes a catalog message and returns the resulting event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SearchChanged(term) => {
            state.search_term = term;
            Event::SearchChanged
        }
        Message::PageSelected(page) => {
            let total = state.animals.len();
            state.pagination.set_page(page, total);
            Event::None
        }
        Message::PreviousPage => {
            state.pagination.previous();
            Event::None
        }
        Message::NextPage => {
            let total = state.animals.len();
            state.pagination.next(total);
            Event::None
        }
        Message::DetailsPressed(id) => match state.animal(id) {
            Some(animal) => Event::ShowDetails(animal.clone()),
            None => Event::None,
        },
        Message::AdoptPressed(id) => match state.animal(id) {
            Some(animal) => Event::ShowAdoptForm(animal.clone()),
            None => Event::None,
        },
        Message::EditPressed(id) => match state.animal(id) {
            Some(animal) => Event::EditAnimal(animal.clone()),
            None => Event::None,
        },
        Message::DeletePressed(id) => Event::DeleteAnimal(id),
    }
}
