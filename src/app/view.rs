// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the navbar and catalog screen, layers the open dialog above
//! them on a dimmed backdrop, and stacks the toast overlay on top.

use super::Message;
use crate::i18n::I18n;
use crate::ui::catalog::{self, ViewContext as CatalogViewContext};
use crate::ui::modals::{self, Modal, ViewContext as ModalViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use iced::widget::{stack, Column};
use iced::{Element, Length};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a catalog::State,
    pub modal: Option<&'a Modal>,
    pub is_admin: bool,
    pub species: &'a [String],
    pub images_dir: &'a Path,
    pub notifications: &'a Manager,
}

/// Renders the full application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        is_admin: ctx.is_admin,
    })
    .map(Message::Navbar);

    let catalog_view = catalog::view(CatalogViewContext {
        i18n: ctx.i18n,
        state: ctx.catalog,
        images_dir: ctx.images_dir,
        is_admin: ctx.is_admin,
    })
    .map(Message::Catalog);

    let base: Element<'_, Message> = Column::new()
        .push(navbar_view)
        .push(catalog_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    let screen: Element<'_, Message> = match ctx.modal {
        Some(modal) => {
            let dialog = modals::view(
                modal,
                ModalViewContext {
                    i18n: ctx.i18n,
                    species: ctx.species,
                },
            )
            .map(Message::Modal);

            modals::overlay(base, dialog, Message::DismissModal)
        }
        None => base,
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    stack![screen, toasts].into()
}
