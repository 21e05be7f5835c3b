// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expand command implementation.

use std::io::{BufRead, Write};

use anyhow::Context;

use shellsub::cli::ExpandArgs;
use shellsub::config::Config;
use shellsub::{Interpolator, ShellExecutor};

/// Run the expand command.
pub fn run(config: &Config, args: &ExpandArgs) -> anyhow::Result<()> {
    let interpolator = Interpolator::new(config.executor()).with_matcher(config.matcher()?);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.texts.is_empty() {
        for line in std::io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            writeln!(out, "{}", expand(&interpolator, &line)?)?;
        }
    } else {
        for text in &args.texts {
            writeln!(out, "{}", expand(&interpolator, text)?)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn expand(interpolator: &Interpolator<ShellExecutor>, text: &str) -> anyhow::Result<String> {
    interpolator.interpolate(text).with_context(|| format!("failed to expand {text:?}"))
}
