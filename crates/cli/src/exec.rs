// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command execution for interpolation markers.
//!
//! The scanner only sees the [`Executor`] trait. [`ShellExecutor`] is the
//! process-backed implementation; tests substitute closures.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::{after, select, tick};

use crate::error::ExecError;

/// How often a child with a deadline is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs a command line and returns its captured output.
///
/// Implementations block until the command finishes, return stdout with
/// trailing line terminators removed, and fail when the command cannot be
/// launched or exits unsuccessfully.
pub trait Executor {
    fn execute(&self, command_line: &str) -> Result<String, ExecError>;
}

impl<F> Executor for F
where
    F: Fn(&str) -> Result<String, ExecError>,
{
    fn execute(&self, command_line: &str) -> Result<String, ExecError> {
        self(command_line)
    }
}

/// Remove the trailing run of `\r` and `\n` characters.
pub fn trim_line_endings(output: &str) -> &str {
    output.trim_end_matches(['\r', '\n'])
}

/// Executes command lines with `<shell> -c <command line>`.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: String,
    cwd: Option<PathBuf>,
    env: BTreeMap<String, String>,
    timeout: Option<Duration>,
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new(crate::config::defaults::SHELL)
    }
}

impl ShellExecutor {
    pub fn new(shell: impl Into<String>) -> Self {
        Self { shell: shell.into(), cwd: None, env: BTreeMap::new(), timeout: None }
    }

    /// Run commands in `dir` instead of the current directory.
    pub fn with_cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Add environment variables on top of the inherited environment.
    pub fn with_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env.extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Kill commands that run longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn command(&self, command_line: &str) -> Command {
        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c")
            .arg(command_line)
            .envs(&self.env)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl Executor for ShellExecutor {
    fn execute(&self, command_line: &str) -> Result<String, ExecError> {
        tracing::debug!(shell = %self.shell, command = command_line, "executing");

        let mut child = self
            .command(command_line)
            .spawn()
            .map_err(|source| ExecError::Spawn { shell: self.shell.clone(), source })?;

        let (status, stdout, stderr) = match self.timeout {
            None => {
                let output = child.wait_with_output()?;
                (output.status, output.stdout, output.stderr)
            }
            Some(limit) => {
                let stdout = drain(child.stdout.take());
                let stderr = drain(child.stderr.take());
                let status = wait_until(&mut child, limit)?;
                (status, join(stdout)?, join(stderr)?)
            }
        };

        let stderr = String::from_utf8_lossy(&stderr).into_owned();
        if !status.success() {
            return Err(match status.code() {
                Some(code) => ExecError::ExitCode { code, stderr },
                None => ExecError::Signal { stderr },
            });
        }
        if !stderr.is_empty() {
            tracing::debug!(command = command_line, stderr = %stderr.trim_end(), "command stderr");
        }

        let stdout = String::from_utf8(stdout)?;
        Ok(trim_line_endings(&stdout).to_string())
    }
}

/// Read a child pipe to the end on a background thread.
fn drain<R>(pipe: Option<R>) -> JoinHandle<std::io::Result<Vec<u8>>>
where
    R: Read + Send + 'static,
{
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf)?;
        }
        Ok(buf)
    })
}

fn join(handle: JoinHandle<std::io::Result<Vec<u8>>>) -> Result<Vec<u8>, ExecError> {
    let bytes = handle
        .join()
        .map_err(|_| ExecError::Other("output reader thread panicked".to_string()))??;
    Ok(bytes)
}

/// Wait for `child` to exit, killing it once `limit` has elapsed.
fn wait_until(child: &mut std::process::Child, limit: Duration) -> Result<ExitStatus, ExecError> {
    let ticker = tick(POLL_INTERVAL);
    let deadline = after(limit);
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        select! {
            recv(ticker) -> _ => {}
            recv(deadline) -> _ => {
                // Already exited between polls: kill fails, wait reaps
                let _ = child.kill();
                let _ = child.wait();
                return Err(ExecError::Timeout(limit));
            }
        }
    }
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
