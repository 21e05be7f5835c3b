// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolve `$(...)` command interpolation markers in text.
//!
//! ```ignore
//! use shellsub::{ShellExecutor, interpolate};
//!
//! let value = interpolate("SHA=$(git rev-parse --short HEAD)", &ShellExecutor::default())?;
//! ```
//!
//! Markers nest to any depth; the outermost marker is handed whole to the
//! executor. `\$(...)` is left untouched. Malformed markers pass through as
//! literal text, while a failing command fails the whole call.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod dotenv;
pub mod error;
pub mod escape;
pub mod exec;
pub mod interpolate;
pub mod matcher;

#[cfg(test)]
pub mod test_utils;

pub use error::{Error, ExecError, Result};
pub use exec::{Executor, ShellExecutor};
pub use interpolate::{Interpolator, interpolate};
pub use matcher::{MarkerMatch, Matcher, Strategy};
