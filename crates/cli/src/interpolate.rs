// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Left-to-right interpolation of `$(...)` markers.
//!
//! The scanner asks the matcher for the next marker in the unscanned tail,
//! copies the literal text before it, then either keeps the marker verbatim
//! (escaped) or replaces it with the executor's output. Command output is
//! never re-scanned.

use crate::error::{Error, Result};
use crate::exec::Executor;
use crate::matcher::Matcher;

/// Resolves markers in texts with a fixed matcher and executor.
///
/// Holds no mutable state: one instance can serve many calls, and calls
/// can run in parallel when the executor allows it.
#[derive(Debug, Clone)]
pub struct Interpolator<E> {
    matcher: Matcher,
    executor: E,
}

impl<E: Executor> Interpolator<E> {
    /// Interpolator using the default (depth) matcher.
    pub fn new(executor: E) -> Self {
        Self { matcher: Matcher::default(), executor }
    }

    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Replace every non-escaped marker in `text` with its command output.
    ///
    /// The first failing command aborts the call; no partial output is
    /// returned.
    pub fn interpolate(&self, text: &str) -> Result<String> {
        scan(&self.matcher, &self.executor, text)
    }
}

/// Interpolate `text` with the default matcher.
pub fn interpolate<E>(text: &str, executor: &E) -> Result<String>
where
    E: Executor + ?Sized,
{
    scan(&Matcher::default(), executor, text)
}

fn scan<E>(matcher: &Matcher, executor: &E, text: &str) -> Result<String>
where
    E: Executor + ?Sized,
{
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(found) = matcher.find(&text[cursor..])? {
        out.push_str(&text[cursor..cursor + found.span.start]);

        if found.escaped {
            out.push_str(found.matched_text);
        } else {
            let command = found.command_line();
            let output = executor
                .execute(command)
                .map_err(|source| Error::Exec { command: command.to_string(), source })?;
            tracing::debug!(command, bytes = output.len(), "interpolated marker");
            out.push_str(&output);
        }

        cursor += found.span.end;
    }

    out.push_str(&text[cursor..]);
    Ok(out)
}

#[cfg(test)]
#[path = "interpolate_tests.rs"]
mod tests;
