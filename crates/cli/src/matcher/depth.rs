// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bracket-depth marker matching.
//!
//! One pass over the text pairs every `(` with its closing `)` using a
//! stack. Only groups opened right after a `$` are candidates. The leftmost
//! candidate that closes wins, which is also the outermost one since any
//! enclosing candidate starts further left.

use memchr::memmem;

use super::MarkerMatch;

/// An unclosed `(` on the stack.
struct Open {
    pos: usize,
    /// Opened directly after a `$`.
    candidate: bool,
}

/// Find the leftmost outermost balanced `$(...)` marker in `text`.
///
/// Groups that never close, and groups with nothing but parentheses inside
/// (`$()`, `$(())`), are not markers. Byte scanning is safe on UTF-8 since
/// all delimiters are ASCII.
pub fn find_marker(text: &str) -> Option<MarkerMatch<'_>> {
    let bytes = text.as_bytes();
    let first = memmem::find(bytes, b"$(")?;

    let mut stack: Vec<Open> = Vec::new();
    let mut open_candidates = 0usize;
    // Leftmost closed candidate seen while an outer candidate was still open.
    let mut best: Option<(usize, usize)> = None;

    for (pos, &byte) in bytes.iter().enumerate().skip(first + 1) {
        match byte {
            b'(' => {
                let candidate = bytes[pos - 1] == b'$';
                if candidate {
                    open_candidates += 1;
                }
                stack.push(Open { pos, candidate });
            }
            b')' => {
                // Stray close: nothing open to balance
                let Some(open) = stack.pop() else {
                    continue;
                };
                if !open.candidate {
                    continue;
                }
                open_candidates -= 1;
                if !has_content(&bytes[open.pos + 1..pos]) {
                    continue;
                }
                if open_candidates == 0 {
                    return Some(build_match(text, open.pos, pos));
                }
                if best.is_none_or(|(left, _)| open.pos < left) {
                    best = Some((open.pos, pos));
                }
            }
            _ => {}
        }
    }

    best.map(|(open, close)| build_match(text, open, close))
}

/// At least one byte that is not a parenthesis.
fn has_content(inner: &[u8]) -> bool {
    inner.iter().any(|&b| b != b'(' && b != b')')
}

/// Build the match for the group `open..=close`, where `open - 1` is the `$`.
fn build_match(text: &str, open: usize, close: usize) -> MarkerMatch<'_> {
    let dollar = open - 1;
    let escaped = dollar > 0 && text.as_bytes()[dollar - 1] == b'\\';
    let start = if escaped { dollar - 1 } else { dollar };
    let end = close + 1;

    MarkerMatch {
        span: start..end,
        escaped,
        command_text: &text[open..end],
        matched_text: &text[start..end],
    }
}

#[cfg(test)]
#[path = "depth_tests.rs"]
mod tests;
