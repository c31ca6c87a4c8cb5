// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Tenable SC Config Authors

use crate::config::{Result, ScConfigError};
use crate::document::Document;
use log::*;
use std::{fs, io::ErrorKind, path::Path};

/// Read and parse an INI file.
///
/// A missing file reads as an empty document, so an absent file and an
/// empty one are reported the same way by validation.
pub fn read(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Configuration file {} not found", path.display());
            return Ok(Document::new());
        }
        Err(e) => return Err(ScConfigError::Io(e)),
    };

    debug!("Parsing configuration file {}", path.display());
    Document::parse(&text).map_err(|source| ScConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `document` to `path`, replacing any existing file.
pub fn save(document: &Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, document.to_string())?;
    info!("Configuration written to {}", path.display());
    Ok(())
}
