// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers receive an [`UpdateContext`] of mutable state references and
//! return the follow-up [`Task`]. Every mutation task resolves to exactly
//! one completion message, which pushes exactly one success-or-failure
//! toast; successful mutations additionally trigger a catalog refresh.

use super::{notifications, Message};
use crate::api::CatalogApi;
use crate::domain::{filter, Animal, LoginOutcome, Session};
use crate::error::Error;
use crate::ui::catalog::{self, Event as CatalogEvent};
use crate::ui::modals::{self, Event as ModalEvent, Modal};
use crate::ui::navbar::{self, Event as NavbarEvent};
use iced::Task;
use std::sync::Arc;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub api: &'a Arc<dyn CatalogApi>,
    pub catalog: &'a mut catalog::State,
    pub modal: &'a mut Option<Modal>,
    pub session: &'a mut Option<Session>,
    pub notifications: &'a mut notifications::Manager,
    pub fetch_seq: &'a mut u64,
}

/// Issues a catalog fetch with a fresh sequence number.
///
/// Responses carry the number back; anything but the latest issued fetch
/// is dropped on arrival, so the last keystroke wins regardless of
/// network ordering.
pub fn refresh_animals(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.fetch_seq += 1;
    let seq = *ctx.fetch_seq;
    Task::perform(ctx.api.list_animals(), move |result| {
        Message::AnimalsLoaded { seq, result }
    })
}

/// Handles catalog screen events.
pub fn handle_catalog_message(
    ctx: &mut UpdateContext<'_>,
    message: catalog::Message,
) -> Task<Message> {
    match catalog::update(ctx.catalog, message) {
        CatalogEvent::None => Task::none(),
        CatalogEvent::SearchChanged => refresh_animals(ctx),
        CatalogEvent::ShowDetails(animal) => {
            *ctx.modal = Some(Modal::Details(modals::details::State::new(animal)));
            Task::none()
        }
        CatalogEvent::ShowAdoptForm(animal) => {
            // The adopt buffer is cleared on every open.
            *ctx.modal = Some(Modal::Adopt(modals::adopt::State::new(animal)));
            Task::none()
        }
        CatalogEvent::EditAnimal(animal) => {
            *ctx.modal = Some(Modal::AnimalForm(modals::animal_form::State::edit(animal)));
            Task::none()
        }
        CatalogEvent::DeleteAnimal(id) => {
            // No confirmation step; the completion toast is the feedback.
            Task::perform(ctx.api.delete_animal(id), Message::AnimalDeleted)
        }
    }
}

/// Handles navbar events.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::OpenLogin => {
            *ctx.modal = Some(Modal::Login(modals::login::State::new()));
        }
        NavbarEvent::SignOut => {
            *ctx.session = None;
            ctx.notifications
                .push(notifications::Notification::info("notification-signed-out"));
        }
        NavbarEvent::AddAnimal => {
            *ctx.modal = Some(Modal::AnimalForm(modals::animal_form::State::add()));
        }
    }
    Task::none()
}

/// Handles messages for the open dialog.
pub fn handle_modal_message(
    ctx: &mut UpdateContext<'_>,
    message: modals::Message,
) -> Task<Message> {
    let Some(modal) = ctx.modal.as_mut() else {
        return Task::none();
    };

    match modals::update(modal, message) {
        ModalEvent::None => Task::none(),
        ModalEvent::Close => {
            *ctx.modal = None;
            Task::none()
        }
        ModalEvent::SubmitAdoption(request) => {
            *ctx.modal = None;
            Task::perform(ctx.api.submit_adoption(request), Message::AdoptionSubmitted)
        }
        ModalEvent::SubmitLogin(credentials) => {
            // The dialog closes regardless of the outcome.
            *ctx.modal = None;
            Task::perform(ctx.api.login(credentials), Message::LoginCompleted)
        }
        ModalEvent::SubmitCreate(draft) => {
            *ctx.modal = None;
            Task::perform(ctx.api.create_animal(draft), Message::AnimalCreated)
        }
        ModalEvent::SubmitUpdate(animal) => {
            *ctx.modal = None;
            Task::perform(ctx.api.update_animal(animal), Message::AnimalUpdated)
        }
        ModalEvent::InvalidAge => {
            // The form stays open with its inline error.
            ctx.notifications.push(notifications::Notification::warning(
                "notification-form-age-invalid",
            ));
            Task::none()
        }
        ModalEvent::MissingSpecies => {
            ctx.notifications.push(notifications::Notification::warning(
                "notification-form-species-missing",
            ));
            Task::none()
        }
    }
}

/// Handles a finished catalog fetch.
pub fn handle_animals_loaded(
    ctx: &mut UpdateContext<'_>,
    seq: u64,
    result: Result<Vec<Animal>, Error>,
) -> Task<Message> {
    if seq != *ctx.fetch_seq {
        // A newer fetch is already in flight; this response is stale.
        return Task::none();
    }

    match result {
        Ok(animals) => {
            let term = ctx.catalog.search_term().to_owned();
            ctx.catalog.set_animals(filter::apply(animals, &term));
        }
        Err(err) => {
            tracing::warn!(%err, "catalog load failed");
            ctx.notifications
                .push(notifications::Notification::error("notification-load-error"));
        }
    }
    Task::none()
}

/// Handles a finished mutation: one toast, and a refresh on success.
fn finish_mutation<T>(
    ctx: &mut UpdateContext<'_>,
    result: Result<T, Error>,
    success_key: &'static str,
    error_key: &'static str,
) -> Task<Message> {
    match result {
        Ok(_) => {
            ctx.notifications
                .push(notifications::Notification::success(success_key));
            refresh_animals(ctx)
        }
        Err(err) => {
            tracing::warn!(%err, key = error_key, "mutation failed");
            ctx.notifications
                .push(notifications::Notification::error(error_key));
            Task::none()
        }
    }
}

pub fn handle_animal_created(
    ctx: &mut UpdateContext<'_>,
    result: Result<Animal, Error>,
) -> Task<Message> {
    finish_mutation(
        ctx,
        result,
        "notification-create-success",
        "notification-create-error",
    )
}

pub fn handle_animal_updated(
    ctx: &mut UpdateContext<'_>,
    result: Result<Animal, Error>,
) -> Task<Message> {
    finish_mutation(
        ctx,
        result,
        "notification-update-success",
        "notification-update-error",
    )
}

pub fn handle_animal_deleted(
    ctx: &mut UpdateContext<'_>,
    result: Result<(), Error>,
) -> Task<Message> {
    finish_mutation(
        ctx,
        result,
        "notification-delete-success",
        "notification-delete-error",
    )
}

/// Handles a finished adoption submission. Unlike the listing mutations it
/// does not change the catalog, so no refresh follows.
pub fn handle_adoption_submitted(
    ctx: &mut UpdateContext<'_>,
    result: Result<(), Error>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            ctx.notifications.push(notifications::Notification::success(
                "notification-adoption-sent",
            ));
        }
        Err(err) => {
            tracing::warn!(%err, "adoption submission failed");
            ctx.notifications.push(notifications::Notification::error(
                "notification-adoption-error",
            ));
        }
    }
    Task::none()
}

/// Handles a finished login attempt.
pub fn handle_login_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<LoginOutcome, Error>,
) -> Task<Message> {
    match result {
        Ok(LoginOutcome::Accepted(session)) => {
            *ctx.session = Some(session);
            ctx.notifications.push(notifications::Notification::success(
                "notification-login-success",
            ));
        }
        Ok(LoginOutcome::Rejected) => {
            *ctx.session = None;
            ctx.notifications.push(notifications::Notification::error(
                "notification-login-failed",
            ));
        }
        Err(err) => {
            // Transport failure: the session state is left untouched.
            tracing::warn!(%err, "login request failed");
            ctx.notifications.push(notifications::Notification::error(
                "notification-login-error",
            ));
        }
    }
    Task::none()
}
