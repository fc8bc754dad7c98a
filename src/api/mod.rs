// SPDX-License-Identifier: MPL-2.0
//! Catalog API port definition.
//!
//! This module defines the [`CatalogApi`] trait the application orchestrates
//! against. The production adapter is [`rest::RestCatalogApi`]; tests use
//! [`memory::InMemoryCatalogApi`] so API-facing behavior can be verified
//! without a network.
//!
//! Methods return boxed futures so the application can hold the adapter as
//! `Arc<dyn CatalogApi>` and hand the futures straight to `iced::Task`.

pub mod memory;
pub mod rest;

pub use memory::InMemoryCatalogApi;
pub use rest::RestCatalogApi;

use crate::domain::{AdoptionRequest, Animal, AnimalId, Credentials, LoginOutcome, NewAnimal};
use crate::error::Result;
use futures_util::future::BoxFuture;

/// Port for the external adoption REST API.
///
/// Implementations must be `Send + Sync`; the application shares one
/// instance across concurrent tasks.
pub trait CatalogApi: Send + Sync {
    /// Fetches the full animal collection.
    fn list_animals(&self) -> BoxFuture<'static, Result<Vec<Animal>>>;

    /// Creates a listing and returns the record the API stored.
    fn create_animal(&self, animal: NewAnimal) -> BoxFuture<'static, Result<Animal>>;

    /// Replaces the listing identified by `animal.id` with the given record.
    fn update_animal(&self, animal: Animal) -> BoxFuture<'static, Result<Animal>>;

    /// Deletes the listing with the given identifier.
    fn delete_animal(&self, id: AnimalId) -> BoxFuture<'static, Result<()>>;

    /// Submits administrator credentials for server-side verification.
    ///
    /// A credential mismatch resolves to `Ok(LoginOutcome::Rejected)`;
    /// only transport failures produce an error.
    fn login(&self, credentials: Credentials) -> BoxFuture<'static, Result<LoginOutcome>>;

    /// Files an adoption inquiry for one animal.
    fn submit_adoption(&self, request: AdoptionRequest) -> BoxFuture<'static, Result<()>>;
}
