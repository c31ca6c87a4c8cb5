// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Tenable SC Config Authors

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScConfigError {
    // A required section or key is missing, a credential pair is
    // incomplete, or the file still holds the example values
    #[error("Invalid Configuration File: {0}")]
    InvalidConfigurationFile(String),

    // Writing an example file failed
    #[error("Unable to Create File: {0}")]
    UnableToCreateFile(#[source] std::io::Error),

    #[error("File Error: {0}")]
    Io(#[from] std::io::Error),

    // The file exists but is not valid INI text
    #[error("Unable to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: ini::ParseError,
    },

    #[error("Unable to decode 'password64' value: {0}")]
    Password64Decode(#[from] base64::DecodeError),

    #[error("Decoded 'password64' value is not UTF-8 text: {0}")]
    Password64Utf8(#[from] std::string::FromUtf8Error),

    // Source handed to the loader is neither a file nor a document
    #[error("Unable to load configuration from {0}")]
    UnsupportedSource(String),

    // Configuration singleton already initialized
    #[error("Configuration singleton already initialized")]
    SingletonAlreadyInitialized,
}

impl ScConfigError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        ScConfigError::InvalidConfigurationFile(reason.into())
    }

    /// Rule that rejected the file, for `InvalidConfigurationFile` errors.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ScConfigError::InvalidConfigurationFile(reason) => Some(reason),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScConfigError>;
