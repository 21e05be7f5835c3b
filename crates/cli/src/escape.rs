// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Literal escaping for dynamically built patterns.

/// Escape `text` so that, compiled as a regex, it matches exactly `text`.
///
/// Every regex metacharacter is backslash-escaped; everything else is kept
/// as-is. Total and side-effect free.
pub fn escape_literal(text: &str) -> String {
    regex::escape(text)
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
