//! Shared unit test utilities.
//!
//! Provides temp projects and stub executors for unit tests in this crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::error::ExecError;
use crate::exec::Executor;

/// Creates a temp directory with a minimal shellsub.toml.
pub fn temp_project() -> TempDir {
    temp_project_with_config("version = 1\n")
}

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("shellsub.toml"), config).unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Executor returning fixed outputs for fixed command lines.
///
/// Records every command line it receives. Unknown commands fail.
#[derive(Default)]
pub struct StubExecutor {
    outputs: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl StubExecutor {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            outputs: pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Command lines received so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Executor for StubExecutor {
    fn execute(&self, command_line: &str) -> Result<String, ExecError> {
        self.calls.borrow_mut().push(command_line.to_string());
        self.outputs
            .get(command_line)
            .cloned()
            .ok_or_else(|| ExecError::Other(format!("no stub for `{command_line}`")))
    }
}

/// Executor that echoes like `echo`: strips a leading `echo ` and returns the rest.
pub fn echo_executor(command_line: &str) -> Result<String, ExecError> {
    command_line
        .strip_prefix("echo ")
        .map(str::to_string)
        .ok_or_else(|| ExecError::ExitCode { code: 127, stderr: format!("{command_line}: not found") })
}
