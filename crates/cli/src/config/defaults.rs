// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! Config structs and the CLI delegate to these constants.

/// Config file name looked up by discovery.
pub const CONFIG_FILE: &str = "shellsub.toml";

/// Only supported config schema version.
pub const VERSION: u32 = 1;

/// Shell used to run command lines (`<shell> -c <command line>`).
pub const SHELL: &str = "sh";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SHELLSUB_LOG";
