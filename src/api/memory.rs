// SPDX-License-Identifier: MPL-2.0
//! In-memory [`CatalogApi`] double.
//!
//! Backs the integration tests: mutations operate on a shared `Mutex`-held
//! collection so a delete or create is observable in the next
//! `list_animals` call, mirroring the reload-after-mutation contract of the
//! real API.

use super::CatalogApi;
use crate::domain::{
    AdoptionRequest, Animal, AnimalId, Credentials, LoginOutcome, NewAnimal, Session,
};
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

/// Test double holding the catalog in memory.
#[derive(Debug, Default)]
pub struct InMemoryCatalogApi {
    animals: Mutex<Vec<Animal>>,
    administrators: Vec<Credentials>,
    inquiries: Mutex<Vec<AdoptionRequest>>,
    next_id: AtomicU32,
    /// When set, every operation fails with a transport error.
    offline: AtomicBool,
}

impl InMemoryCatalogApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the catalog; identifiers for later creations continue past the
    /// highest seeded id.
    #[must_use]
    pub fn with_animals(self, animals: Vec<Animal>) -> Self {
        let highest = animals.iter().map(|a| a.id.value()).max().unwrap_or(0);
        self.next_id.store(highest, Ordering::Relaxed);
        *self.animals.lock().expect("animals lock") = animals;
        self
    }

    /// Registers a credential pair the login endpoint will accept.
    #[must_use]
    pub fn with_administrator(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.administrators.push(Credentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Switches the double into a failing state, simulating an unreachable
    /// backend.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Relaxed);
    }

    /// Inquiries received so far.
    #[must_use]
    pub fn inquiries(&self) -> Vec<AdoptionRequest> {
        self.inquiries.lock().expect("inquiries lock").clone()
    }

    fn guard(&self) -> Result<()> {
        if self.offline.load(Ordering::Relaxed) {
            Err(Error::Http("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Wraps a value in an immediately-ready boxed future.
fn ready<T: Send + 'static>(value: Result<T>) -> BoxFuture<'static, Result<T>> {
    Box::pin(async move { value })
}

impl CatalogApi for InMemoryCatalogApi {
    fn list_animals(&self) -> BoxFuture<'static, Result<Vec<Animal>>> {
        let result = self
            .guard()
            .map(|()| self.animals.lock().expect("animals lock").clone());
        ready(result)
    }

    fn create_animal(&self, animal: NewAnimal) -> BoxFuture<'static, Result<Animal>> {
        let result = self.guard().map(|()| {
            let id = AnimalId::new(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
            let created = animal.with_id(id);
            self.animals
                .lock()
                .expect("animals lock")
                .push(created.clone());
            created
        });
        ready(result)
    }

    fn update_animal(&self, animal: Animal) -> BoxFuture<'static, Result<Animal>> {
        let result = self.guard().and_then(|()| {
            let mut animals = self.animals.lock().expect("animals lock");
            match animals.iter_mut().find(|a| a.id == animal.id) {
                Some(stored) => {
                    *stored = animal.clone();
                    Ok(animal)
                }
                None => Err(Error::Api(404)),
            }
        });
        ready(result)
    }

    fn delete_animal(&self, id: AnimalId) -> BoxFuture<'static, Result<()>> {
        let result = self.guard().and_then(|()| {
            let mut animals = self.animals.lock().expect("animals lock");
            let before = animals.len();
            animals.retain(|a| a.id != id);
            if animals.len() < before {
                Ok(())
            } else {
                Err(Error::Api(404))
            }
        });
        ready(result)
    }

    fn login(&self, credentials: Credentials) -> BoxFuture<'static, Result<LoginOutcome>> {
        let result = self.guard().map(|()| {
            if self.administrators.contains(&credentials) {
                LoginOutcome::Accepted(Session::new(format!("token-{}", credentials.username)))
            } else {
                LoginOutcome::Rejected
            }
        });
        ready(result)
    }

    fn submit_adoption(&self, request: AdoptionRequest) -> BoxFuture<'static, Result<()>> {
        let result = self.guard().map(|()| {
            self.inquiries.lock().expect("inquiries lock").push(request);
        });
        ready(result)
    }
}
