// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Tenable SC Config Authors

//! Structural validation of configuration documents.
//!
//! Checks run in a fixed order and the first failure is returned:
//!
//! 1. a `[SecurityCenter]` section exists
//! 2. a `[User]` section exists
//! 3. `[SecurityCenter]` has a `hostname`
//! 4. `[User]` has a complete credential pair: `username` with `password`
//!    or `password64`, or else `access_key` with `secret_key`
//!
//! Section names and keys are matched ignoring ASCII case. Unknown keys
//! are left alone. Placeholder values are not checked here, see
//! [`ScConfig::require_customized`](super::ScConfig::require_customized).

use super::{
    Result, ScConfigError, ACCESS_KEY, HOSTNAME, PASSWORD, PASSWORD64,
    SECRET_KEY, SECURITY_CENTER_SECTION, USERNAME, USER_SECTION,
};
use crate::{
    document::{Document, Section},
    file_ops,
};
use log::*;
use std::path::Path;

/// A document that passed [`validate_document`].
///
/// Only obtainable through validation, so the loader can rely on both
/// sections and the required keys being present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDocument {
    document: Document,
    security_center: usize,
    user: usize,
}

impl ValidatedDocument {
    pub fn security_center(&self) -> &Section {
        self.document.section_at(self.security_center)
    }

    pub fn user(&self) -> &Section {
        self.document.section_at(self.user)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// Read the file at `path` and validate it.
///
/// A missing file fails with "[SecurityCenter] section not found".
pub fn validate(path: impl AsRef<Path>) -> Result<ValidatedDocument> {
    let path = path.as_ref();
    debug!("Validating configuration file {}", path.display());
    validate_document(file_ops::read(path)?)
}

pub fn validate_document(document: Document) -> Result<ValidatedDocument> {
    let Some(security_center) =
        document.find_section_position(SECURITY_CENTER_SECTION)
    else {
        return Err(ScConfigError::invalid(format!(
            "[{SECURITY_CENTER_SECTION}] section not found"
        )));
    };
    let Some(user) = document.find_section_position(USER_SECTION) else {
        return Err(ScConfigError::invalid(format!(
            "[{USER_SECTION}] section not found"
        )));
    };

    if !document
        .section_at(security_center)
        .contains_key_ignore_case(HOSTNAME)
    {
        return Err(ScConfigError::invalid("hostname parameter not found"));
    }

    validate_credentials(document.section_at(user))?;

    Ok(ValidatedDocument {
        document,
        security_center,
        user,
    })
}

fn validate_credentials(user: &Section) -> Result<()> {
    if user.contains_key_ignore_case(USERNAME) {
        if !user.contains_key_ignore_case(PASSWORD)
            && !user.contains_key_ignore_case(PASSWORD64)
        {
            return Err(ScConfigError::invalid(
                "username provided but password parameter not found",
            ));
        }
    } else if user.contains_key_ignore_case(ACCESS_KEY) {
        if !user.contains_key_ignore_case(SECRET_KEY) {
            return Err(ScConfigError::invalid(
                "api access key provided but secret key parameter not found",
            ));
        }
    } else {
        return Err(ScConfigError::invalid(
            "configuration file must include username/password or API keypair",
        ));
    }
    Ok(())
}
