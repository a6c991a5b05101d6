//! Recording executor for tests.
//!
//! `RecordingExecutor` implements [`Executor`] without spawning anything. It
//! records every call and answers with a configured exit code per command
//! string (zero unless told otherwise). A command can also be given a
//! directory to create when it succeeds, standing in for a real download.
//!
//! # Example
//!
//! ```
//! use prereqs::shell::CommandOptions;
//! use prereqs::sync::{Executor, RecordingExecutor};
//!
//! let mut exec = RecordingExecutor::new();
//! exec.set_exit_code("git diff --quiet", 1);
//!
//! let opts = CommandOptions::in_dir("/tmp");
//! assert!(!exec.run("git diff --quiet", &opts).unwrap().success);
//! assert!(exec.run("git pull", &opts).unwrap().success);
//! assert_eq!(exec.commands(), vec!["git diff --quiet", "git pull"]);
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;
use crate::shell::{CommandOptions, CommandResult};

use super::Executor;

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub command: String,
    pub cwd: PathBuf,
    pub env: Vec<(String, String)>,
}

impl RecordedCall {
    /// Value of an extra environment variable passed to this call.
    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Executor that records calls instead of running them.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    calls: Vec<RecordedCall>,
    exit_codes: HashMap<String, Option<i32>>,
    creates: HashMap<String, PathBuf>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command` exit with `code`.
    pub fn set_exit_code(&mut self, command: &str, code: i32) {
        self.exit_codes.insert(command.to_string(), Some(code));
    }

    /// Make `command` look killed by a signal (no exit code).
    pub fn set_killed(&mut self, command: &str) {
        self.exit_codes.insert(command.to_string(), None);
    }

    /// Make a successful `command` create `dir`, as a download would.
    pub fn set_creates(&mut self, command: &str, dir: impl Into<PathBuf>) {
        self.creates.insert(command.to_string(), dir.into());
    }

    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }

    /// Command strings in call order.
    pub fn commands(&self) -> Vec<&str> {
        self.calls.iter().map(|c| c.command.as_str()).collect()
    }
}

impl Executor for RecordingExecutor {
    fn run(&mut self, command: &str, options: &CommandOptions) -> Result<CommandResult> {
        self.calls.push(RecordedCall {
            command: command.to_string(),
            cwd: options.cwd.clone(),
            env: options.env.clone(),
        });

        match self.exit_codes.get(command).copied().unwrap_or(Some(0)) {
            Some(0) => {
                if let Some(dir) = self.creates.get(command) {
                    std::fs::create_dir_all(dir)?;
                }
                Ok(CommandResult::success(Duration::ZERO))
            }
            code => Ok(CommandResult::failure(code, Duration::ZERO)),
        }
    }
}
