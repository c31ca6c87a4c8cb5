// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Tenable SC Config Authors

mod credentials;
mod error;
mod loader;
pub mod singleton;
mod template;
mod validation;

pub use credentials::*;
pub use error::*;
pub use loader::*;
pub use template::*;
pub use validation::*;

use std::{env, path::PathBuf};

pub const DEFAULT_FILE_NAME: &str = "TenableSCConfig.ini";
pub const CONFIG_OVERRIDE_ENV_VAR: &str = "TENABLE_SC_CONFIG";

pub const SECURITY_CENTER_SECTION: &str = "SecurityCenter";
pub const USER_SECTION: &str = "User";

pub const HOSTNAME: &str = "hostname";
pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";
pub const PASSWORD64: &str = "password64";
pub const ACCESS_KEY: &str = "access_key";
pub const SECRET_KEY: &str = "secret_key";

// Values written to a freshly generated example file
pub const PLACEHOLDER_HOSTNAME: &str = "<server address>";
pub const PLACEHOLDER_USERNAME: &str = "<user name>";
pub const PLACEHOLDER_PASSWORD: &str = "<password>";
pub const PLACEHOLDER_ACCESS_KEY: &str = "<access key>";
pub const PLACEHOLDER_SECRET_KEY: &str = "<secret key>";

pub const PLACEHOLDERS: [&str; 5] = [
    PLACEHOLDER_HOSTNAME,
    PLACEHOLDER_USERNAME,
    PLACEHOLDER_PASSWORD,
    PLACEHOLDER_ACCESS_KEY,
    PLACEHOLDER_SECRET_KEY,
];

/// Path used when the caller gives none: the file named by the
/// `TENABLE_SC_CONFIG` environment variable if set, otherwise
/// [`DEFAULT_FILE_NAME`] in the working directory.
pub fn default_path() -> PathBuf {
    match env::var(CONFIG_OVERRIDE_ENV_VAR) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_FILE_NAME),
    }
}
