// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dotenv files with command-interpolated values.
//!
//! Supported line forms:
//! - `KEY=value` and `export KEY=value`
//! - `KEY='literal'` (never interpolated)
//! - `KEY="quoted"` (interpolated; `\"` and `\n` are unescaped)
//! - blank lines and `# comments`; unquoted values drop a trailing ` # comment`

use serde::Serialize;

use crate::error::{Error, Result};
use crate::exec::Executor;
use crate::interpolate::Interpolator;

/// One `KEY=VALUE` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 1-based line number.
    pub line: usize,
    pub key: String,
    pub value: Value,
}

/// Raw value of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Single-quoted: used verbatim.
    Literal(String),
    /// Double-quoted or unquoted: markers are resolved.
    Interpolated(String),
}

/// A resolved variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub key: String,
    pub value: String,
}

/// Parse dotenv content. Malformed lines are skipped with a warning.
pub fn parse(content: &str) -> Vec<Entry> {
    let mut entries = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let assignment = trimmed.strip_prefix("export ").map(str::trim_start).unwrap_or(trimmed);
        let Some((key, value)) = assignment.split_once('=') else {
            tracing::warn!(line, "skipping line without `=`");
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            tracing::warn!(line, "skipping line with empty key");
            continue;
        }

        entries.push(Entry { line, key: key.to_string(), value: parse_value(value.trim()) });
    }

    entries
}

fn parse_value(raw: &str) -> Value {
    if let Some(inner) = quoted(raw, '\'') {
        return Value::Literal(inner.to_string());
    }
    if let Some(inner) = quoted(raw, '"') {
        return Value::Interpolated(inner.replace("\\\"", "\"").replace("\\n", "\n"));
    }
    let unquoted = match raw.find(" #") {
        Some(pos) => raw[..pos].trim_end(),
        None => raw,
    };
    Value::Interpolated(unquoted.to_string())
}

fn quoted(raw: &str, quote: char) -> Option<&str> {
    if raw.len() >= 2 {
        raw.strip_prefix(quote)?.strip_suffix(quote)
    } else {
        None
    }
}

/// Parse `content` and resolve every value in file order.
///
/// The first failing command aborts the whole file.
pub fn resolve<E: Executor>(content: &str, interpolator: &Interpolator<E>) -> Result<Vec<Resolved>> {
    parse(content)
        .into_iter()
        .map(|entry| {
            let value = match entry.value {
                Value::Literal(text) => text,
                Value::Interpolated(text) => interpolator.interpolate(&text).map_err(|source| {
                    Error::Entry { line: entry.line, key: entry.key.clone(), source: Box::new(source) }
                })?,
            };
            Ok(Resolved { key: entry.key, value })
        })
        .collect()
}

#[cfg(test)]
#[path = "dotenv_tests.rs"]
mod tests;
