// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `shellsub match`.

use crate::prelude::*;

fn match_json(args: &[&str]) -> serde_json::Value {
    let output = shellsub_cmd().arg("match").args(args).output().expect("command should run");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

/// > match reports the leftmost outermost marker
#[test]
fn match_reports_outermost_marker() {
    let json = match_json(&["x $(echo $(echo y))"]);
    assert_eq!(
        json,
        serde_json::json!({
            "span": { "start": 2, "end": 19 },
            "escaped": false,
            "matched_text": "$(echo $(echo y))",
            "command_text": "(echo $(echo y))",
            "command_line": "echo $(echo y)",
        })
    );
}

/// > Escaped markers are reported with the backslash in the span
#[test]
fn match_reports_escaped_marker() {
    let json = match_json(&[r"\$(a)"]);
    assert_eq!(json["escaped"], true);
    assert_eq!(json["span"]["start"], 0);
    assert_eq!(json["matched_text"], r"\$(a)");
}

/// > No marker prints null
#[test]
fn match_prints_null_without_marker() {
    shellsub_cmd().args(["match", "plain (text)"]).assert().success().stdout("null\n");
}

/// > --inner-hole narrows the widening search
#[test]
fn match_widening_with_inner_hole() {
    let json = match_json(&["--strategy", "widening", "--inner-hole", "echo", "$(ls) $(echo a)"]);
    assert_eq!(json["command_line"], "echo a");
    assert_eq!(json["span"]["start"], 6);
}

/// > An invalid inner hole is reported
#[test]
fn match_rejects_invalid_inner_hole() {
    shellsub_cmd()
        .args(["--strategy", "widening", "match", "--inner-hole", "(", "$(a)"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("invalid inner hole pattern `(`"));
}

/// > --inner-hole alone selects the widening strategy
#[test]
fn match_inner_hole_implies_widening() {
    let json = match_json(&["--inner-hole", "echo", "$(ls) $(echo a)"]);
    assert_eq!(json["command_line"], "echo a");
}

/// > An inner hole under an explicit depth strategy is ignored with a warning
#[test]
fn match_depth_warns_about_ignored_inner_hole() {
    shellsub_cmd()
        .args(["--strategy", "depth", "match", "--inner-hole", "echo", "$(ls) $(echo a)"])
        .assert()
        .success()
        .stdout(predicates::str::contains("\"command_line\": \"ls\""))
        .stderr(predicates::str::contains("inner hole ignored"));
}
