// SPDX-License-Identifier: MPL-2.0
//! Default values for the configuration file.

/// Base URL of the adoption REST API.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Per-request timeout in seconds.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

/// Animals shown per catalog page.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Directory holding the animal photos, relative to the working directory.
pub const DEFAULT_IMAGES_DIR: &str = "imagenes";

/// Species offered by the listing form when the config does not override
/// them. These are wire values, not display strings: the backend stores
/// them verbatim.
pub const DEFAULT_SPECIES: [&str; 2] = ["Perro", "Gato"];
