// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading
//! and saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[api]` - Base URL and request timeout of the adoption REST API
//! - `[catalog]` - Page size, species list, and image directory
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `PAWLIST_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "es").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Adoption API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the REST API.
    #[serde(default = "default_base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(
        default = "default_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Catalog display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Animals shown per page.
    #[serde(default = "default_page_size", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,

    /// Species offered by the listing form (wire values).
    #[serde(default = "default_species", skip_serializing_if = "Option::is_none")]
    pub species: Option<Vec<String>>,

    /// Directory holding the animal photos.
    #[serde(default = "default_images_dir", skip_serializing_if = "Option::is_none")]
    pub images_dir: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            species: default_species(),
            images_dir: default_images_dir(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Effective API base URL.
    #[must_use]
    pub fn api_base_url(&self) -> String {
        self.api
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    /// Effective request timeout.
    #[must_use]
    pub fn api_timeout_secs(&self) -> u64 {
        self.api.timeout_secs.unwrap_or(DEFAULT_API_TIMEOUT_SECS)
    }

    /// Effective catalog page size (never zero).
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.catalog
            .page_size
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Effective species list; an empty configured list falls back to the
    /// defaults so the form always offers a choice.
    #[must_use]
    pub fn species(&self) -> Vec<String> {
        match &self.catalog.species {
            Some(species) if !species.is_empty() => species.clone(),
            _ => DEFAULT_SPECIES.iter().map(ToString::to_string).collect(),
        }
    }

    /// Effective image directory.
    #[must_use]
    pub fn images_dir(&self) -> PathBuf {
        self.catalog
            .images_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR))
    }
}

fn default_base_url() -> Option<String> {
    Some(DEFAULT_API_BASE_URL.to_string())
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_API_TIMEOUT_SECS)
}

fn default_page_size() -> Option<usize> {
    Some(DEFAULT_PAGE_SIZE)
}

fn default_species() -> Option<Vec<String>> {
    Some(DEFAULT_SPECIES.iter().map(ToString::to_string).collect())
}

fn default_images_dir() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_IMAGES_DIR))
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional warning key). If loading fails,
/// returns the default config with a warning key explaining what went
/// wrong, so the caller can surface a notification.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.api_base_url(), "http://localhost:8000");
        assert_eq!(config.api_timeout_secs(), DEFAULT_API_TIMEOUT_SECS);
        assert_eq!(config.page_size(), 3);
        assert_eq!(config.species(), vec!["Perro", "Gato"]);
        assert_eq!(config.images_dir(), PathBuf::from("imagenes"));
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("es".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            api: ApiConfig {
                base_url: Some("http://shelter.example:9000".to_string()),
                timeout_secs: Some(5),
            },
            catalog: CatalogConfig {
                page_size: Some(6),
                species: Some(vec!["Perro".to_string(), "Gato".to_string(), "Ave".to_string()]),
                images_dir: Some(PathBuf::from("/srv/photos")),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
        assert_eq!(loaded.page_size(), 6);
        assert_eq!(loaded.species().len(), 3);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(
            warning,
            Some("notification-config-load-error".to_string())
        );
        assert_eq!(config, Config::default());
    }

    #[test]
    fn zero_page_size_falls_back_to_default() {
        let config = Config {
            catalog: CatalogConfig {
                page_size: Some(0),
                ..CatalogConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn empty_species_list_falls_back_to_default() {
        let config = Config {
            catalog: CatalogConfig {
                species: Some(Vec::new()),
                ..CatalogConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.species(), vec!["Perro", "Gato"]);
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"es\"\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("load partial config");
        assert_eq!(loaded.general.language, Some("es".to_string()));
        assert_eq!(loaded.api_base_url(), "http://localhost:8000");
        assert_eq!(loaded.page_size(), 3);
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save config");
        let content = fs::read_to_string(&config_path).expect("read config");

        assert!(content.contains("[general]"), "should have [general] section");
        assert!(content.contains("[api]"), "should have [api] section");
        assert!(content.contains("[catalog]"), "should have [catalog] section");
    }
}
