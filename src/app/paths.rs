// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! Resolution priority:
//! 1. Explicit override passed to `_with_override()` functions (tests)
//! 2. `--config-dir` CLI argument, set once via [`init_cli_override`]
//! 3. `PAWLIST_CONFIG_DIR` environment variable
//! 4. Platform config directory via the `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Pawlist";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PAWLIST_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// Call once at startup, before any path resolution. Later calls are
/// ignored so tests can construct the app repeatedly.
pub fn init_cli_override(config_dir: Option<String>) {
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var(ENV_CONFIG_DIR)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application config directory.
///
/// Platform defaults:
/// - Linux: `~/.config/Pawlist/`
/// - macOS: `~/Library/Application Support/Pawlist/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Pawlist\`
#[must_use]
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory, preferring `base_dir` when given.
#[must_use]
pub fn get_app_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Some(dir) = cli_config_dir() {
        return Some(dir);
    }
    if let Some(dir) = env_config_dir() {
        return Some(dir);
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let dir = PathBuf::from("/tmp/pawlist-test-config");
        let resolved = get_app_config_dir_with_override(Some(dir.clone()));
        assert_eq!(resolved, Some(dir));
    }

    #[test]
    fn init_cli_override_is_idempotent() {
        init_cli_override(None);
        // Second call must not panic.
        init_cli_override(Some("/tmp/ignored".to_string()));
    }
}
