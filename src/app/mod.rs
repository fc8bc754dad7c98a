// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the catalog screen, modal dialogs,
//! administrator session, localization, and the API adapter, and translates
//! messages into side effects like HTTP calls and toast notifications. This
//! file intentionally keeps policy decisions (window sizing, which dialog a
//! card action opens, session handling) close to the main update loop so it
//! is easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::{CatalogApi, RestCatalogApi};
use crate::domain::Session;
use crate::i18n::I18n;
use crate::ui::catalog;
use crate::ui::modals::Modal;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 700;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    api: Arc<dyn CatalogApi>,
    catalog: catalog::State,
    /// The open dialog; `None` means the plain catalog is showing. A single
    /// slot structurally enforces one-modal-at-a-time.
    modal: Option<Modal>,
    /// Active administrator session; management controls render iff `Some`.
    session: Option<Session>,
    theme_mode: ThemeMode,
    /// Species offered by the listing form (from config).
    species: Vec<String>,
    /// Directory the animal photo filenames resolve against.
    images_dir: PathBuf,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Sequence number of the most recently issued catalog fetch.
    fetch_seq: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("animals", &self.catalog.animals().len())
            .field("modal_open", &self.modal.is_some())
            .field("is_admin", &self.session.is_some())
            .finish()
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from config and flags, and kicks off
    /// the initial catalog fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let base_url = flags
            .api_url
            .clone()
            .unwrap_or_else(|| config.api_base_url());
        let api: Arc<dyn CatalogApi> = Arc::new(RestCatalogApi::new(
            base_url.clone(),
            config.api_timeout_secs(),
        ));

        tracing::info!(%base_url, "starting catalog client");

        let mut app = App {
            i18n,
            api,
            catalog: catalog::State::new(config.page_size()),
            modal: None,
            session: None,
            theme_mode: config.general.theme_mode,
            species: config.species(),
            images_dir: config.images_dir(),
            notifications: notifications::Manager::new(),
            fetch_seq: 0,
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let task = update::refresh_animals(&mut app.update_context());
        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            api: &self.api,
            catalog: &mut self.catalog,
            modal: &mut self.modal,
            session: &mut self.session,
            notifications: &mut self.notifications,
            fetch_seq: &mut self.fetch_seq,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        let keyboard_sub = subscription::create_keyboard_subscription(self.modal.is_some());

        Subscription::batch([tick_sub, keyboard_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Catalog(catalog_message) => {
                update::handle_catalog_message(&mut self.update_context(), catalog_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut self.update_context(), navbar_message)
            }
            Message::Modal(modal_message) => {
                update::handle_modal_message(&mut self.update_context(), modal_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::DismissModal => {
                self.modal = None;
                Task::none()
            }
            Message::AnimalsLoaded { seq, result } => {
                update::handle_animals_loaded(&mut self.update_context(), seq, result)
            }
            Message::AnimalCreated(result) => {
                update::handle_animal_created(&mut self.update_context(), result)
            }
            Message::AnimalUpdated(result) => {
                update::handle_animal_updated(&mut self.update_context(), result)
            }
            Message::AnimalDeleted(result) => {
                update::handle_animal_deleted(&mut self.update_context(), result)
            }
            Message::LoginCompleted(result) => {
                update::handle_login_completed(&mut self.update_context(), result)
            }
            Message::AdoptionSubmitted(result) => {
                update::handle_adoption_submitted(&mut self.update_context(), result)
            }
            Message::Tick(_instant) => {
                // Tick notification manager to handle auto-dismiss
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            modal: self.modal.as_ref(),
            is_admin: self.session.is_some(),
            species: &self.species,
            images_dir: &self.images_dir,
            notifications: &self.notifications,
        })
    }
}
