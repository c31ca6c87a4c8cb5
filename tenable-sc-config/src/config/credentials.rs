// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Tenable SC Config Authors

use super::{Result, ScConfigError, PLACEHOLDERS};
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
struct PasswordLogin {
    username: String,
    password: String,
}

#[derive(Clone, PartialEq, Eq)]
struct ApiKeys {
    access_key: String,
    secret_key: String,
}

/// Connection settings for a Tenable.sc server.
///
/// Built by the loader from a validated document. Credentials are stored
/// as pairs, so a username never exists without its password and an
/// access key never exists without its secret key. Both pairs may be set
/// when the file supplies both; [`ScConfig::select`] decides which one is
/// used.
#[derive(Clone, PartialEq, Eq)]
pub struct ScConfig {
    hostname: String,
    login: Option<PasswordLogin>,
    api_keys: Option<ApiKeys>,
}

impl ScConfig {
    pub(crate) fn new(hostname: impl Into<String>) -> Self {
        ScConfig {
            hostname: hostname.into(),
            login: None,
            api_keys: None,
        }
    }

    pub(crate) fn set_password(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) {
        self.login = Some(PasswordLogin {
            username: username.into(),
            password: password.into(),
        });
    }

    pub(crate) fn set_api_keys(
        &mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) {
        self.api_keys = Some(ApiKeys {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        });
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn username(&self) -> Option<&str> {
        self.login.as_ref().map(|l| l.username.as_str())
    }

    pub fn password(&self) -> Option<&str> {
        self.login.as_ref().map(|l| l.password.as_str())
    }

    pub fn access_key(&self) -> Option<&str> {
        self.api_keys.as_ref().map(|k| k.access_key.as_str())
    }

    pub fn secret_key(&self) -> Option<&str> {
        self.api_keys.as_ref().map(|k| k.secret_key.as_str())
    }

    /// Whether the hostname or any credential that is set still holds one
    /// of the example-file values.
    pub fn is_placeholder(&self) -> bool {
        let mut values = vec![self.hostname.as_str()];
        if let Some(login) = &self.login {
            values.push(&login.username);
            values.push(&login.password);
        }
        if let Some(keys) = &self.api_keys {
            values.push(&keys.access_key);
            values.push(&keys.secret_key);
        }
        values.iter().any(|v| PLACEHOLDERS.contains(v))
    }

    /// Pick the credentials to authenticate with.
    ///
    /// A configuration with any placeholder value yields
    /// [`Credentials::None`]. Otherwise the API keypair is preferred over
    /// the username and password.
    pub fn select(&self) -> Credentials<'_> {
        if self.is_placeholder() {
            return Credentials::None;
        }
        if let Some(keys) = &self.api_keys {
            return Credentials::Api {
                access_key: &keys.access_key,
                secret_key: &keys.secret_key,
            };
        }
        if let Some(login) = &self.login {
            return Credentials::Password {
                username: &login.username,
                password: &login.password,
            };
        }
        Credentials::None
    }

    /// Reject a configuration that still holds example-file values.
    pub fn require_customized(self) -> Result<Self> {
        if self.is_placeholder() {
            return Err(ScConfigError::invalid(
                "configuration file still contains placeholder values",
            ));
        }
        Ok(self)
    }
}

impl fmt::Debug for ScConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScConfig")
            .field("hostname", &self.hostname)
            .field("username", &self.username())
            .field("password", &self.login.as_ref().map(|_| "<redacted>"))
            .field("access_key", &self.access_key())
            .field(
                "secret_key",
                &self.api_keys.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    Api,
    Password,
    None,
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            CredentialKind::Api => "api",
            CredentialKind::Password => "password",
            CredentialKind::None => "none",
        };
        write!(f, "{kind}")
    }
}

/// Credentials chosen by [`ScConfig::select`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Credentials<'a> {
    Api {
        access_key: &'a str,
        secret_key: &'a str,
    },
    Password {
        username: &'a str,
        password: &'a str,
    },
    None,
}

impl<'a> Credentials<'a> {
    pub fn kind(&self) -> CredentialKind {
        match self {
            Credentials::Api { .. } => CredentialKind::Api,
            Credentials::Password { .. } => CredentialKind::Password,
            Credentials::None => CredentialKind::None,
        }
    }

    /// `(access_key, secret_key)` or `(username, password)`.
    pub fn pair(&self) -> Option<(&'a str, &'a str)> {
        match *self {
            Credentials::Api {
                access_key,
                secret_key,
            } => Some((access_key, secret_key)),
            Credentials::Password { username, password } => {
                Some((username, password))
            }
            Credentials::None => None,
        }
    }
}

impl fmt::Debug for Credentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Api { access_key, .. } => f
                .debug_struct("Api")
                .field("access_key", access_key)
                .finish_non_exhaustive(),
            Credentials::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .finish_non_exhaustive(),
            Credentials::None => write!(f, "None"),
        }
    }
}
