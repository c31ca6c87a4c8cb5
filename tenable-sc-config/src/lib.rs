// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Tenable SC Config Authors

//! Load and validate the INI file holding the address of a Tenable.sc
//! server and the credentials used to log in to it.
//!
//! ```no_run
//! use tenable_sc_config::config::{self, Credentials};
//!
//! let config = config::load(config::default_path())?;
//! match config.select() {
//!     Credentials::Api { access_key, .. } => println!("API key {access_key}"),
//!     Credentials::Password { username, .. } => println!("user {username}"),
//!     Credentials::None => eprintln!("{} is not configured yet", config.hostname()),
//! }
//! # Ok::<(), tenable_sc_config::config::ScConfigError>(())
//! ```

pub mod config;
pub mod document;
pub mod file_ops;
