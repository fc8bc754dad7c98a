// SPDX-License-Identifier: MPL-2.0
//! `pawlist` is a desktop catalog client for a pet-adoption association,
//! built with the Iced GUI framework.
//!
//! Visitors browse, search, and paginate through adoptable animals and submit
//! adoption inquiries; administrators sign in to create, edit, and delete
//! listings. All data lives behind an external REST API — this crate is the
//! presentation and orchestration layer, with internationalization via
//! Fluent and user preferences in a TOML config file.

pub mod api;
pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
