// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Tenable SC Config Authors

//! # tenable-sc-config
//!
//! Writes an example Tenable.sc connection file, or checks an edited one.

#![deny(
    nonstandard_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_allocation,
    unused_comparisons,
    unused_parens,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]

use clap::{Parser, Subcommand};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tenable_sc_config::config::{
    self, default_path, ScConfigError, CONFIG_OVERRIDE_ENV_VAR,
    DEFAULT_FILE_NAME,
};

/// Create or check Tenable.sc connection files
#[derive(Debug, Parser)]
#[command(
    name = "tenable-sc-config",
    version,
    about = "Create or check the INI file used to log in to Tenable.sc",
    after_long_help = "Without a subcommand an example file is written to the \
        default location: $TENABLE_SC_CONFIG if set, otherwise \
        TenableSCConfig.ini in the current directory."
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Write an example configuration file holding placeholder values
    Create {
        #[arg(
            value_name = "FILE",
            env = CONFIG_OVERRIDE_ENV_VAR,
            default_value = DEFAULT_FILE_NAME
        )]
        file: PathBuf,
    },
    /// Validate a configuration file and show the credentials it selects
    Check {
        #[arg(
            value_name = "FILE",
            env = CONFIG_OVERRIDE_ENV_VAR,
            default_value = DEFAULT_FILE_NAME
        )]
        file: PathBuf,
    },
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    pretty_env_logger::formatted_builder()
        .filter_level(log_level)
        .target(pretty_env_logger::env_logger::Target::Stderr)
        .init();
}

fn create(file: &Path) -> Result<(), ScConfigError> {
    println!("Generating default example configuration file ...");
    config::write_example(file)?;
    println!("File created: {}", file.display());
    Ok(())
}

fn check(file: &Path) -> Result<(), ScConfigError> {
    let config = config::load(file)?.require_customized()?;
    println!("Configuration: {}", file.display());
    println!("Hostname:      {}", config.hostname());
    println!("Credentials:   {}", config.select().kind());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    debug!("{cli:?}");

    let result = match cli.command {
        Some(Commands::Create { file }) => create(&file),
        Some(Commands::Check { file }) => check(&file),
        None => create(&default_path()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
