// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locate `shellsub.toml` for the current directory.
//!
//! The nearest ancestor holding the file wins. The search never leaves the
//! enclosing git repository, so a config in a parent checkout is ignored.

use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE;

/// Nearest config file at or above `start_dir`, bounded by the git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "discovered config");
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            tracing::debug!(root = %dir.display(), "no config up to git root");
            return None;
        }
    }
    None
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
