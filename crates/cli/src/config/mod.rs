// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading for `shellsub.toml`.

pub mod defaults;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

use crate::exec::ShellExecutor;
use crate::matcher::{Matcher, Strategy};

/// Root configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Schema version (must be 1).
    #[serde(default = "Config::default_version")]
    pub version: u32,

    /// Marker matching strategy.
    #[serde(default)]
    pub strategy: Strategy,

    /// Inner hole pattern for the widening strategy.
    #[serde(default)]
    pub inner_hole: Option<String>,

    /// Command execution settings.
    #[serde(default)]
    pub exec: ExecConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            strategy: Strategy::default(),
            inner_hole: None,
            exec: ExecConfig::default(),
        }
    }
}

impl Config {
    pub(crate) fn default_version() -> u32 {
        defaults::VERSION
    }

    /// Build the matcher described by this config.
    pub fn matcher(&self) -> crate::Result<Matcher> {
        Matcher::new(self.strategy, self.inner_hole.as_deref())
    }

    /// Build the shell executor described by this config.
    pub fn executor(&self) -> ShellExecutor {
        let mut exec = ShellExecutor::new(self.exec.shell.clone())
            .with_env(self.exec.env.clone())
            .with_timeout(self.exec.timeout());
        if let Some(dir) = &self.exec.cwd {
            exec = exec.with_cwd(dir.clone());
        }
        exec
    }
}

/// `[exec]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExecConfig {
    /// Shell program (default: "sh").
    #[serde(default = "ExecConfig::default_shell")]
    pub shell: String,

    /// Per-command timeout in seconds (default: none).
    #[serde(default)]
    pub timeout: Option<u64>,

    /// Working directory for commands, relative to the config file.
    #[serde(default)]
    pub cwd: Option<PathBuf>,

    /// Extra environment variables for commands.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self { shell: Self::default_shell(), timeout: None, cwd: None, env: BTreeMap::new() }
    }
}

impl ExecConfig {
    pub(crate) fn default_shell() -> String {
        defaults::SHELL.to_string()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// Parse config content. `path` locates the file for messages and for
/// resolving relative paths.
pub fn parse(content: &str, path: &Path) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(content)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    if config.version != defaults::VERSION {
        anyhow::bail!(
            "{}: unsupported config version {} (expected {})",
            path.display(),
            config.version,
            defaults::VERSION
        );
    }
    if config.exec.timeout == Some(0) {
        anyhow::bail!("{}: exec.timeout must be at least 1 second", path.display());
    }
    if config.exec.shell.trim().is_empty() {
        anyhow::bail!("{}: exec.shell must not be empty", path.display());
    }
    config.matcher().with_context(|| format!("{}: invalid inner_hole", path.display()))?;

    if let Some(dir) = config.exec.cwd.take() {
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.exec.cwd = Some(if dir.is_absolute() { dir } else { base.join(dir) });
    }

    Ok(config)
}

/// Load and validate a config file.
pub fn load(path: &Path) -> anyhow::Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = parse(&content, path)?;
    tracing::debug!(path = %path.display(), strategy = ?config.strategy, "loaded config");
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
