// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for interpolation and command execution.

use std::time::Duration;

/// Result alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the interpolation pipeline.
///
/// Malformed or absent markers are never errors; they pass through as
/// literal text. Only execution failures, caller-supplied patterns and
/// markers past the widening size budget can fail a call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A marker's command failed; the whole interpolation is aborted.
    #[error("command `{command}` failed")]
    Exec {
        command: String,
        #[source]
        source: ExecError,
    },

    /// A caller-supplied inner hole did not compile.
    #[error("invalid inner hole pattern `{pattern}`")]
    Pattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    /// A marker was too large to embed in the next widening round.
    #[error("marker of {bytes} bytes is too large for the widening strategy")]
    Widen {
        bytes: usize,
        #[source]
        source: Box<regex::Error>,
    },

    /// A dotenv entry failed to resolve.
    #[error("line {line}: failed to resolve {key}")]
    Entry {
        line: usize,
        key: String,
        #[source]
        source: Box<Error>,
    },
}

/// Failures reported by a command executor.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("failed to launch `{shell}`")]
    Spawn {
        shell: String,
        #[source]
        source: std::io::Error,
    },

    #[error("exited with code {code}{}", stderr_suffix(.stderr))]
    ExitCode { code: i32, stderr: String },

    #[error("terminated by signal{}", stderr_suffix(.stderr))]
    Signal { stderr: String },

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("I/O error while running command")]
    Io(#[from] std::io::Error),

    /// Free-form failure, for executors that are not processes.
    #[error("{0}")]
    Other(String),
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() { String::new() } else { format!(": {trimmed}") }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
