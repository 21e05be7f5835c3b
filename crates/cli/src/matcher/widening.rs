// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive-widening marker matching.
//!
//! The regex crate has no recursive groups, so a balanced span is found
//! from the inside out: match a parenthesized group whose only nested
//! content is the inner hole, then search again with the matched group
//! (escaped) as the new inner hole. Each round finds the span one nesting
//! level up; the last round that succeeds is the outermost span.
//!
//! Limitation: each round allows exactly one nested group per level, so a
//! marker with two sibling groups inside (`$(a $(b) $(c))`) resolves to its
//! first inner marker. The depth strategy has no such limit.

use regex::{Regex, RegexBuilder};

use super::MarkerMatch;
use crate::error::{Error, Result};
use crate::escape::escape_literal;

/// Default inner hole: any single character that is not a parenthesis.
pub const DEFAULT_INNER_HOLE: &str = "[^()]";

/// Compiled-size budget per byte of pattern source. Widened holes embed
/// whole markers, so the regex crate's fixed default is too small for
/// large ones.
const SIZE_LIMIT_PER_BYTE: usize = 256;

/// Floor for the compiled-size budget (the regex crate's default).
const MIN_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Widening matcher with a validated inner hole.
#[derive(Debug, Clone)]
pub struct WideningMatcher {
    inner_hole: String,
}

impl WideningMatcher {
    /// Create a matcher, checking that `inner_hole` compiles.
    pub fn new(inner_hole: &str) -> Result<Self> {
        compile_hole(inner_hole)?;
        Ok(Self { inner_hole: inner_hole.to_string() })
    }

    pub fn inner_hole(&self) -> &str {
        &self.inner_hole
    }

    pub fn find<'a>(&self, text: &'a str) -> Result<Option<MarkerMatch<'a>>> {
        match_marker(text, &self.inner_hole)
    }
}

impl Default for WideningMatcher {
    fn default() -> Self {
        Self { inner_hole: DEFAULT_INNER_HOLE.to_string() }
    }
}

/// A group found by one widening round.
struct Candidate<'a> {
    start: usize,
    end: usize,
    escaped: bool,
    /// Preceded by `$`. Only anchored candidates are markers.
    anchored: bool,
    command_text: &'a str,
}

/// Find the leftmost outermost marker whose innermost group matches `inner_hole`.
pub fn match_marker<'a>(text: &'a str, inner_hole: &str) -> Result<Option<MarkerMatch<'a>>> {
    let pattern = compile_hole(inner_hole)?;
    let Some(found) = widen(text, &pattern)? else {
        return Ok(None);
    };
    Ok(Some(MarkerMatch {
        span: found.start..found.end,
        escaped: found.escaped,
        command_text: found.command_text,
        matched_text: &text[found.start..found.end],
    }))
}

fn widen<'a>(text: &'a str, pattern: &Regex) -> Result<Option<Candidate<'a>>> {
    let Some(caps) = pattern.captures(text) else {
        return Ok(None);
    };
    let (Some(whole), Some(cmd)) = (caps.get(0), caps.name("cmd")) else {
        return Ok(None);
    };

    let candidate = Candidate {
        start: whole.start(),
        end: whole.end(),
        escaped: caps.name("backslash").is_some(),
        anchored: caps.name("dollar").is_some(),
        command_text: cmd.as_str(),
    };

    // Probe one level up: is this group the hole of a larger balanced group?
    let outer = build_pattern(&escape_literal(candidate.command_text)).map_err(|source| {
        Error::Widen { bytes: candidate.command_text.len(), source: Box::new(source) }
    })?;
    if let Some(found) = widen(text, &outer)? {
        return Ok(Some(found));
    }

    // Fixed point. A bare group has no command context.
    Ok(candidate.anchored.then_some(candidate))
}

/// Compile a caller-supplied hole.
fn compile_hole(inner_hole: &str) -> Result<Regex> {
    build_pattern(inner_hole).map_err(|source| Error::Pattern {
        pattern: inner_hole.to_string(),
        source: Box::new(source),
    })
}

fn build_pattern(inner_hole: &str) -> std::result::Result<Regex, regex::Error> {
    let source = format!(r"(?<backslash>\\)?(?<dollar>\$)?(?<cmd>\([^()]*(?:{inner_hole})[^()]*\))");
    let limit = source.len().saturating_mul(SIZE_LIMIT_PER_BYTE).max(MIN_SIZE_LIMIT);
    RegexBuilder::new(&source).size_limit(limit).dfa_size_limit(limit).build()
}

#[cfg(test)]
#[path = "widening_tests.rs"]
mod tests;
