// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Env command implementation.

use std::io::Write;

use anyhow::Context;

use shellsub::Interpolator;
use shellsub::cli::{EnvArgs, OutputFormat};
use shellsub::config::Config;
use shellsub::dotenv;

/// Run the env command.
pub fn run(config: &Config, args: &EnvArgs) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let interpolator = Interpolator::new(config.executor()).with_matcher(config.matcher()?);
    let resolved = dotenv::resolve(&content, &interpolator)
        .with_context(|| format!("failed to resolve {}", args.file.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.output {
        OutputFormat::Text => {
            for entry in &resolved {
                writeln!(out, "{}={}", entry.key, entry.value)?;
            }
        }
        OutputFormat::Json => {
            // Later duplicates win, as when the file is sourced
            let object: serde_json::Map<String, serde_json::Value> = resolved
                .into_iter()
                .map(|entry| (entry.key, serde_json::Value::String(entry.value)))
                .collect();
            serde_json::to_writer_pretty(&mut out, &object)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
