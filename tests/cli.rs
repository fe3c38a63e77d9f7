//! CLI smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn command_center() -> Command {
    Command::cargo_bin("command-center").unwrap()
}

#[test]
fn test_help() {
    command_center()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_version() {
    command_center().arg("--version").assert().success();
}

#[test]
fn test_serve_help_mentions_port_and_dev() {
    command_center()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--dev"));
}

#[test]
fn test_unknown_subcommand_fails() {
    command_center().arg("frobnicate").assert().failure();
}
