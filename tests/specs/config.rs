//! Behavioral specs for configuration.
//!
//! Tests that shellsub correctly handles:
//! - Config discovery and explicit paths
//! - The `[exec]` table
//! - Validation errors

use crate::prelude::*;

/// > [exec].env is passed to commands
#[test]
fn config_exec_env_reaches_commands() {
    let temp = Project::with_config("version = 1\n[exec]\nenv = { GREETING = \"hi\" }\n");
    temp.cmd()
        .args(["expand", "$(echo $GREETING)"])
        .assert()
        .success()
        .stdout("hi\n");
}

/// > [exec].cwd is resolved relative to the config file
#[test]
fn config_exec_cwd_is_relative_to_config() {
    let temp = Project::with_config("version = 1\n[exec]\ncwd = \"sub\"\n");
    temp.file("sub/marker.txt", "");
    temp.cmd()
        .args(["expand", "$(ls)"])
        .assert()
        .success()
        .stdout("marker.txt\n");
}

/// > Config is discovered from a parent directory
#[test]
fn config_is_discovered_from_parent() {
    let temp = Project::with_config("version = 1\nstrategy = \"widening\"\n");
    temp.file("nested/deeper/.keep", "");
    temp.cmd()
        .current_dir(temp.path().join("nested/deeper"))
        .args(["expand", "$(x $(echo b) $(echo c))"])
        .assert()
        .success()
        .stdout("$(x b c)\n");
}

/// > -C selects an explicit config file
#[test]
fn config_flag_selects_file() {
    let temp = Project::empty();
    temp.file("custom.toml", "version = 1\n[exec]\nenv = { WHO = \"custom\" }\n");
    temp.cmd()
        .args(["-C", "custom.toml", "expand", "$(echo $WHO)"])
        .assert()
        .success()
        .stdout("custom\n");
}

/// > SHELLSUB_CONFIG selects an explicit config file
#[test]
fn config_env_var_selects_file() {
    let temp = Project::empty();
    temp.file("custom.toml", "version = 1\n[exec]\nenv = { WHO = \"env\" }\n");
    temp.cmd()
        .env("SHELLSUB_CONFIG", temp.path().join("custom.toml"))
        .args(["expand", "$(echo $WHO)"])
        .assert()
        .success()
        .stdout("env\n");
}

/// > Command-line flags override the config file
#[test]
fn cli_strategy_overrides_config() {
    let temp = Project::with_config("version = 1\nstrategy = \"widening\"\n");
    temp.cmd()
        .args(["--strategy", "depth", "expand", "$(echo $(echo b) $(echo c))"])
        .assert()
        .success()
        .stdout("b c\n");
}

/// > Unsupported versions are rejected
#[test]
fn config_rejects_unsupported_version() {
    let temp = Project::with_config("version = 2\n");
    temp.cmd()
        .args(["expand", "x"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("unsupported config version 2"));
}

/// > Unknown keys are rejected
#[test]
fn config_rejects_unknown_keys() {
    let temp = Project::with_config("version = 1\nstratgey = \"depth\"\n");
    temp.cmd()
        .args(["expand", "x"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("failed to parse"))
        .stderr(predicates::str::contains("stratgey"));
}

/// > A missing explicit config file is an error
#[test]
fn config_missing_explicit_file_fails() {
    let temp = Project::empty();
    temp.cmd()
        .args(["-C", "nope.toml", "expand", "x"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("failed to read nope.toml"));
}
