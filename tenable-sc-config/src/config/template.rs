// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Tenable SC Config Authors

use super::{
    Result, ScConfigError, ACCESS_KEY, HOSTNAME, PASSWORD,
    PLACEHOLDER_ACCESS_KEY, PLACEHOLDER_HOSTNAME, PLACEHOLDER_PASSWORD,
    PLACEHOLDER_SECRET_KEY, PLACEHOLDER_USERNAME, SECRET_KEY,
    SECURITY_CENTER_SECTION, USERNAME, USER_SECTION,
};
use crate::{document::Document, file_ops};
use std::path::Path;

/// Example configuration document.
///
/// Every required key holds a placeholder value and is preceded by
/// comment entries describing it, so the saved file passes structural
/// validation but is reported as a placeholder until edited.
pub fn create_new() -> Document {
    let mut document = Document::new();

    let security_center = document.section_entry(SECURITY_CENTER_SECTION);
    security_center.set(
        "# Do not include http:// or https:// with 'hostname'",
        None,
    );
    security_center.set(HOSTNAME, Some(PLACEHOLDER_HOSTNAME.to_string()));

    let user = document.section_entry(USER_SECTION);
    user.set(
        "# Provide 'username' with a password, or an 'access_key' and 'secret_key' pair",
        None,
    );
    user.set(
        "# API keys are used over 'username' if both are present",
        None,
    );
    user.set(USERNAME, Some(PLACEHOLDER_USERNAME.to_string()));
    user.set("# Valid password keys are 'password' and 'password64'", None);
    user.set(
        "# 'password64' is a Base64 encoded password and will be used over 'password' if both are present",
        None,
    );
    user.set(PASSWORD, Some(PLACEHOLDER_PASSWORD.to_string()));
    user.set(ACCESS_KEY, Some(PLACEHOLDER_ACCESS_KEY.to_string()));
    user.set(SECRET_KEY, Some(PLACEHOLDER_SECRET_KEY.to_string()));

    document
}

/// Save [`create_new`] to `path`, replacing any existing file.
///
/// # Errors
///
/// Any failure to write the file is returned as `UnableToCreateFile`.
pub fn write_example(path: impl AsRef<Path>) -> Result<()> {
    file_ops::save(&create_new(), path).map_err(|e| match e {
        ScConfigError::Io(err) => ScConfigError::UnableToCreateFile(err),
        other => other,
    })
}
