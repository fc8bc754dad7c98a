// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the adoption REST API.
//!
//! Endpoint layout (relative to the configured base URL):
//!
//! - `GET    /mascotas/buscar` → `{ "mascotas": [Animal] }`
//! - `POST   /mascotas/crear`
//! - `PUT    /mascotas/actualizar/{id}`
//! - `DELETE /mascotas/eliminar/{id}`
//! - `POST   /administradores/login`
//! - `POST   /adopciones/crear`

use super::CatalogApi;
use crate::domain::{
    AdoptionRequest, Animal, AnimalId, Credentials, LoginOutcome, NewAnimal, Session,
};
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;
use serde::Deserialize;
use std::time::Duration;

const USER_AGENT: &str = concat!("Pawlist/", env!("CARGO_PKG_VERSION"));

/// Wire envelope of `GET /mascotas/buscar`.
#[derive(Debug, Deserialize)]
struct AnimalsEnvelope {
    mascotas: Vec<Animal>,
}

/// Wire response of `POST /administradores/login`.
#[derive(Debug, Deserialize)]
struct LoginEnvelope {
    #[serde(rename = "autenticado")]
    authenticated: bool,
    #[serde(default)]
    token: Option<String>,
}

/// Production [`CatalogApi`] adapter backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct RestCatalogApi {
    base_url: String,
    timeout: Duration,
}

impl RestCatalogApi {
    /// Creates an adapter for the API at `base_url` (no trailing slash
    /// required).
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Builds a client per request, with an explicit timeout and user agent.
    fn client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(Error::from)
    }
}

/// Maps a non-success status to [`Error::Api`].
fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Api(status.as_u16()))
    }
}

impl CatalogApi for RestCatalogApi {
    fn list_animals(&self) -> BoxFuture<'static, Result<Vec<Animal>>> {
        let client = self.client();
        let url = self.endpoint("mascotas/buscar");

        Box::pin(async move {
            let response = client?.get(&url).send().await?;
            let envelope: AnimalsEnvelope = check_status(response)?.json().await?;
            Ok(envelope.mascotas)
        })
    }

    fn create_animal(&self, animal: NewAnimal) -> BoxFuture<'static, Result<Animal>> {
        let client = self.client();
        let url = self.endpoint("mascotas/crear");

        Box::pin(async move {
            let response = client?.post(&url).json(&animal).send().await?;
            let created = check_status(response)?.json().await?;
            Ok(created)
        })
    }

    fn update_animal(&self, animal: Animal) -> BoxFuture<'static, Result<Animal>> {
        let client = self.client();
        let url = self.endpoint(&format!("mascotas/actualizar/{}", animal.id));

        Box::pin(async move {
            let response = client?.put(&url).json(&animal).send().await?;
            let updated = check_status(response)?.json().await?;
            Ok(updated)
        })
    }

    fn delete_animal(&self, id: AnimalId) -> BoxFuture<'static, Result<()>> {
        let client = self.client();
        let url = self.endpoint(&format!("mascotas/eliminar/{}", id));

        Box::pin(async move {
            let response = client?.delete(&url).send().await?;
            check_status(response)?;
            Ok(())
        })
    }

    fn login(&self, credentials: Credentials) -> BoxFuture<'static, Result<LoginOutcome>> {
        let client = self.client();
        let url = self.endpoint("administradores/login");

        Box::pin(async move {
            let response = client?.post(&url).json(&credentials).send().await?;

            // The API answers a mismatch with 401; that's a decision
            // branch, not a transport failure.
            if response.status() == reqwest::StatusCode::UNAUTHORIZED {
                return Ok(LoginOutcome::Rejected);
            }

            let envelope: LoginEnvelope = check_status(response)?.json().await?;
            match envelope.token {
                Some(token) if envelope.authenticated => {
                    Ok(LoginOutcome::Accepted(Session::new(token)))
                }
                _ => Ok(LoginOutcome::Rejected),
            }
        })
    }

    fn submit_adoption(&self, request: AdoptionRequest) -> BoxFuture<'static, Result<()>> {
        let client = self.client();
        let url = self.endpoint("adopciones/crear");

        Box::pin(async move {
            let response = client?.post(&url).json(&request).send().await?;
            check_status(response)?;
            Ok(())
        })
    }
}
