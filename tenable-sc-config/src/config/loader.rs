// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Tenable SC Config Authors

use super::{
    validate, validate_document, Result, ScConfig, ScConfigError,
    ValidatedDocument, ACCESS_KEY, HOSTNAME, PASSWORD, PASSWORD64,
    SECRET_KEY, USERNAME,
};
use crate::document::{Document, Section};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::*;
use std::path::{Path, PathBuf};

// Where a configuration comes from. A file is read and validated first,
// a plain document is validated first, a validated one is used as is.
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    Document(Document),
    Validated(ValidatedDocument),
}

impl From<PathBuf> for ConfigSource {
    fn from(path: PathBuf) -> Self {
        ConfigSource::File(path)
    }
}

impl From<&Path> for ConfigSource {
    fn from(path: &Path) -> Self {
        ConfigSource::File(path.to_path_buf())
    }
}

impl From<&str> for ConfigSource {
    fn from(path: &str) -> Self {
        ConfigSource::File(PathBuf::from(path))
    }
}

impl From<Document> for ConfigSource {
    fn from(document: Document) -> Self {
        ConfigSource::Document(document)
    }
}

impl From<ValidatedDocument> for ConfigSource {
    fn from(document: ValidatedDocument) -> Self {
        ConfigSource::Validated(document)
    }
}

/// Load a configuration from a file or a document.
///
/// # Errors
///
/// Any validation error, an I/O or parse error while reading the file, a
/// `password64` value that does not decode to UTF-8 text, or
/// `UnsupportedSource` when the path names a directory.
pub fn load(source: impl Into<ConfigSource>) -> Result<ScConfig> {
    let validated = match source.into() {
        ConfigSource::File(path) => {
            if path.is_dir() {
                return Err(ScConfigError::UnsupportedSource(format!(
                    "directory {}",
                    path.display()
                )));
            }
            debug!("Loading configuration from {}", path.display());
            validate(&path)?
        }
        ConfigSource::Document(document) => validate_document(document)?,
        ConfigSource::Validated(validated) => validated,
    };
    load_validated(&validated)
}

/// Extract the configuration from a validated document.
///
/// `password64` is Base64 decoded and replaces `password` when both are
/// present. Valueless entries read as empty strings.
pub fn load_validated(document: &ValidatedDocument) -> Result<ScConfig> {
    let security_center = document.security_center();
    let user = document.user();

    let mut config = ScConfig::new(value(security_center, HOSTNAME));

    if user.contains_key_ignore_case(ACCESS_KEY) {
        if user.contains_key_ignore_case(SECRET_KEY) {
            config.set_api_keys(value(user, ACCESS_KEY), value(user, SECRET_KEY));
        } else {
            warn!("Ignoring '{ACCESS_KEY}' without '{SECRET_KEY}'");
        }
    }

    if user.contains_key_ignore_case(USERNAME) {
        let password = if user.contains_key_ignore_case(PASSWORD64) {
            decode_password64(value(user, PASSWORD64))?
        } else {
            value(user, PASSWORD).to_string()
        };
        config.set_password(value(user, USERNAME), password);
    }

    if config.is_placeholder() {
        warn!(
            "Configuration for {} still contains placeholder values",
            config.hostname()
        );
    }

    debug!(
        "Loaded configuration for {} using {} credentials",
        config.hostname(),
        config.select().kind()
    );
    Ok(config)
}

fn value<'a>(section: &'a Section, key: &str) -> &'a str {
    section.get_ignore_case(key).unwrap_or_default()
}

fn decode_password64(encoded: &str) -> Result<String> {
    let bytes = STANDARD.decode(encoded.trim())?;
    Ok(String::from_utf8(bytes)?)
}
