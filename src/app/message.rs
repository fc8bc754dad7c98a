// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::{Animal, LoginOutcome};
use crate::error::Error;
use crate::ui::catalog;
use crate::ui::modals;
use crate::ui::navbar;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint;
/// the `*Completed`-style variants carry API task results.
#[derive(Debug, Clone)]
pub enum Message {
    Catalog(catalog::Message),
    Navbar(navbar::Message),
    Modal(modals::Message),
    Notification(notifications::Message),
    /// Close the open dialog (backdrop click or Escape).
    DismissModal,
    /// Result of a catalog fetch, tagged with its request sequence number
    /// so stale responses can be dropped.
    AnimalsLoaded {
        seq: u64,
        result: Result<Vec<Animal>, Error>,
    },
    AnimalCreated(Result<Animal, Error>),
    AnimalUpdated(Result<Animal, Error>),
    AnimalDeleted(Result<(), Error>),
    LoginCompleted(Result<LoginOutcome, Error>),
    AdoptionSubmitted(Result<(), Error>),
    /// Periodic tick driving notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional API base URL override.
    /// Takes precedence over the `[api] base_url` config entry.
    pub api_url: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `PAWLIST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
