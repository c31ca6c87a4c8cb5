// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Tenable SC Config Authors

//! Process-wide configuration slot.
//!
//! Nothing is loaded implicitly: the slot stays empty until one of the
//! `initialize_*` functions succeeds, and can only be filled once.
//! Passing an [`ScConfig`] to whatever needs it is preferred; this module
//! exists for applications that want a single startup load.

use super::{default_path, load, Result, ScConfig, ScConfigError};
use log::*;
use std::path::Path;
use std::sync::OnceLock;

static GLOBAL_CONFIG: OnceLock<ScConfig> = OnceLock::new();

/// Store an already loaded configuration.
///
/// # Errors
///
/// Returns `ScConfigError::SingletonAlreadyInitialized` if the slot is
/// already filled.
pub fn initialize_config(config: ScConfig) -> Result<&'static ScConfig> {
    GLOBAL_CONFIG
        .set(config)
        .map_err(|_| ScConfigError::SingletonAlreadyInitialized)?;
    GLOBAL_CONFIG
        .get()
        .ok_or(ScConfigError::SingletonAlreadyInitialized)
}

/// Load the file at `path` into the slot.
///
/// A missing file is skipped: `Ok(None)` is returned and the slot stays
/// empty. A file that is present must validate, load and hold no
/// placeholder values.
pub fn initialize_from_file(
    path: impl AsRef<Path>,
) -> Result<Option<&'static ScConfig>> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(
            "No configuration file at {}, leaving global configuration unset",
            path.display()
        );
        return Ok(None);
    }

    let config = load(path)?.require_customized()?;
    let config = initialize_config(config)?;
    info!("Global configuration loaded from {}", path.display());
    Ok(Some(config))
}

/// [`initialize_from_file`] on [`default_path`].
pub fn initialize_default() -> Result<Option<&'static ScConfig>> {
    initialize_from_file(default_path())
}

/// The stored configuration, if one has been initialized.
pub fn get_config() -> Option<&'static ScConfig> {
    GLOBAL_CONFIG.get()
}

pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
