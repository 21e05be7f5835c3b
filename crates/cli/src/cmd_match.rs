// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match command implementation.

use std::io::Write;

use serde_json::json;

use shellsub::cli::MatchArgs;
use shellsub::config::Config;

/// Run the match command. Prints `null` when the text has no marker.
pub fn run(config: &Config, args: &MatchArgs) -> anyhow::Result<()> {
    let matcher = config.matcher()?;

    let report = match matcher.find(&args.text)? {
        Some(found) => json!({
            "span": { "start": found.span.start, "end": found.span.end },
            "escaped": found.escaped,
            "matched_text": found.matched_text,
            "command_text": found.command_text,
            "command_line": found.command_line(),
        }),
        None => serde_json::Value::Null,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &report)?;
    writeln!(out)?;
    Ok(())
}
