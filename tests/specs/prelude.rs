// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns a Command configured to run the shellsub binary.
///
/// Ambient `SHELLSUB_*` variables are cleared so the host environment
/// cannot leak into a spec.
pub fn shellsub_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("shellsub"));
    cmd.env_remove("SHELLSUB_CONFIG").env_remove("SHELLSUB_LOG");
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Scratch project directory. Marked as a git root so config discovery
/// never walks above it.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn with_config(content: &str) -> Self {
        let project = Self::empty();
        project.file("shellsub.toml", content);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// shellsub command running inside this project.
    pub fn cmd(&self) -> Command {
        let mut cmd = shellsub_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}
