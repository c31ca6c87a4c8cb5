// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Tenable SC Config Authors

//! Integration tests for the tenable-sc-config binary.

#![allow(deprecated)] // cargo_bin deprecation — replacement API not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

/// Command running in a temporary directory with no override set.
fn cli_in_clean_dir(tmpdir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tenable-sc-config").unwrap(); //#[allow_ci]
    cmd.current_dir(tmpdir.path());
    cmd.env_remove("TENABLE_SC_CONFIG");
    cmd
}

#[test]
fn test_no_args_creates_default_file() {
    let tmpdir = tempfile::tempdir().unwrap(); //#[allow_ci]
    cli_in_clean_dir(&tmpdir)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generating default example configuration file ...",
        ))
        .stdout(predicate::str::contains("File created: TenableSCConfig.ini"));

    let text =
        std::fs::read_to_string(tmpdir.path().join("TenableSCConfig.ini"))
            .unwrap(); //#[allow_ci]
    assert!(text.contains("[SecurityCenter]"));
    assert!(text.contains("hostname = <server address>"));
}

#[test]
fn test_create_at_path() {
    let tmpdir = tempfile::tempdir().unwrap(); //#[allow_ci]
    cli_in_clean_dir(&tmpdir)
        .args(["create", "custom.ini"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File created: custom.ini"));
    assert!(tmpdir.path().join("custom.ini").exists());
}

#[test]
fn test_create_uses_env_override() {
    let tmpdir = tempfile::tempdir().unwrap(); //#[allow_ci]
    let target = tmpdir.path().join("from-env.ini");
    cli_in_clean_dir(&tmpdir)
        .env("TENABLE_SC_CONFIG", &target)
        .assert()
        .success();
    assert!(target.exists());
}

#[test]
fn test_create_failure_exits_non_zero() {
    let tmpdir = tempfile::tempdir().unwrap(); //#[allow_ci]
    cli_in_clean_dir(&tmpdir)
        .args(["create", "no-such-dir/sc.ini"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unable to Create File:"));
}

#[test]
fn test_check_template_reports_placeholder() {
    let tmpdir = tempfile::tempdir().unwrap(); //#[allow_ci]
    cli_in_clean_dir(&tmpdir).assert().success();
    cli_in_clean_dir(&tmpdir)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid Configuration File: configuration file still contains placeholder values",
        ));
}

#[test]
fn test_check_missing_file() {
    let tmpdir = tempfile::tempdir().unwrap(); //#[allow_ci]
    cli_in_clean_dir(&tmpdir)
        .args(["check", "absent.ini"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid Configuration File: [SecurityCenter] section not found",
        ));
}

#[test]
fn test_check_valid_file() {
    let tmpdir = tempfile::tempdir().unwrap(); //#[allow_ci]
    std::fs::write(
        tmpdir.path().join("sc.ini"),
        "[SecurityCenter]\nhostname = scanner.example.com\n\n[User]\nusername = alice\npassword = s3cret\n",
    )
    .unwrap(); //#[allow_ci]

    cli_in_clean_dir(&tmpdir)
        .args(["check", "sc.ini"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scanner.example.com"))
        .stdout(predicate::str::contains("Credentials:   password"))
        .stdout(predicate::str::contains("s3cret").not());
}
