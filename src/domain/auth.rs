// SPDX-License-Identifier: MPL-2.0
//! Administrator authentication value types.
//!
//! Credentials only exist inside the login form buffer and the request
//! payload; the client never holds the administrator list. A successful
//! login yields an opaque [`Session`] token whose presence gates the
//! management controls.

use serde::Serialize;

/// Username and password entered in the login dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Opaque session token issued by the authentication endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Result of an authentication attempt.
///
/// Rejection is a normal decision branch, not an error: transport failures
/// surface as [`crate::error::Error`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted(Session),
    Rejected,
}
