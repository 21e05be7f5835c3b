// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Balanced `$(...)` marker matching.
//!
//! Two strategies find the same kind of span:
//! - `depth`: single linear pass tracking parenthesis depth (default)
//! - `widening`: regex search that re-runs itself with the previous match
//!   as a literal inner hole, one nesting level at a time

pub mod depth;
pub mod widening;

use std::ops::Range;

use serde::{Deserialize, Serialize};

pub use widening::{DEFAULT_INNER_HOLE, WideningMatcher};

use crate::error::Result;

/// One interpolation marker found in a text.
///
/// Offsets are byte offsets into the text given to the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerMatch<'a> {
    /// Byte range of the whole marker, including `$` and any leading backslash.
    pub span: Range<usize>,
    /// A literal backslash immediately precedes the `$`.
    pub escaped: bool,
    /// The balanced group, from `(` through its matching `)`.
    pub command_text: &'a str,
    /// The full marker text, `&text[span]`.
    pub matched_text: &'a str,
}

impl<'a> MarkerMatch<'a> {
    /// The command line: `command_text` without its outer parentheses.
    pub fn command_line(&self) -> &'a str {
        let inner = self.command_text.strip_prefix('(').unwrap_or(self.command_text);
        inner.strip_suffix(')').unwrap_or(inner)
    }
}

/// Which matching algorithm to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Linear bracket-depth scan.
    #[default]
    Depth,
    /// Recursive regex widening.
    Widening,
}

/// A configured matcher ready to search texts.
#[derive(Debug, Clone, Default)]
pub enum Matcher {
    #[default]
    Depth,
    Widening(WideningMatcher),
}

impl Matcher {
    /// Build a matcher for `strategy`.
    ///
    /// `inner_hole` only applies to the widening strategy; `None` uses
    /// [`DEFAULT_INNER_HOLE`].
    pub fn new(strategy: Strategy, inner_hole: Option<&str>) -> Result<Self> {
        match strategy {
            Strategy::Depth => {
                if let Some(hole) = inner_hole {
                    tracing::warn!(hole, "inner hole ignored by the depth strategy");
                }
                Ok(Matcher::Depth)
            }
            Strategy::Widening => Ok(Matcher::Widening(WideningMatcher::new(
                inner_hole.unwrap_or(DEFAULT_INNER_HOLE),
            )?)),
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Matcher::Depth => Strategy::Depth,
            Matcher::Widening(_) => Strategy::Widening,
        }
    }

    /// Find the leftmost outermost marker in `text`.
    pub fn find<'a>(&self, text: &'a str) -> Result<Option<MarkerMatch<'a>>> {
        match self {
            Matcher::Depth => Ok(depth::find_marker(text)),
            Matcher::Widening(m) => m.find(text),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
