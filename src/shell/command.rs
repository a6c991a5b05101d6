//! Shell command execution.

use crate::error::{PrereqError, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, duration: Duration) -> Self {
        Self {
            exit_code,
            duration,
            success: false,
        }
    }

    /// Turn a failed result into a `CommandFailed` error.
    pub fn into_checked(self, command: &str) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(PrereqError::CommandFailed {
                command: command.to_string(),
                code: self.exit_code,
            })
        }
    }
}

/// Options for command execution.
///
/// The working directory is always explicit. The process-wide current
/// directory is never changed.
#[derive(Debug, Clone)]
pub struct CommandOptions {
    /// Working directory for the child.
    pub cwd: PathBuf,

    /// Extra environment variables (merged over the inherited env).
    pub env: Vec<(String, String)>,
}

impl CommandOptions {
    /// Options with only a working directory.
    pub fn in_dir(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            env: Vec::new(),
        }
    }

    /// Add an environment variable.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }
}

/// Execute a shell command with inherited stdio.
///
/// A nonzero exit is not an error here; inspect [`CommandResult::success`]
/// or use [`CommandResult::into_checked`].
///
/// # Errors
///
/// Returns `CommandSpawn` if the shell could not be started, which includes
/// a working directory that does not exist.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let (shell, flag) = shell_invocation();

    tracing::debug!("Running `{}` in {}", command, options.cwd.display());

    let mut cmd = Command::new(&shell);
    cmd.arg(flag)
        .arg(command)
        .current_dir(&options.cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    let status = cmd.status().map_err(|source| PrereqError::CommandSpawn {
        command: command.to_string(),
        source,
    })?;

    let duration = start.elapsed();
    tracing::debug!(
        "`{}` exited with {:?} after {:?}",
        command,
        status.code(),
        duration
    );

    if status.success() {
        Ok(CommandResult::success(duration))
    } else {
        Ok(CommandResult::failure(status.code(), duration))
    }
}

/// Shell executable and the flag that makes it run a command string.
///
/// Unix uses `/bin/sh -c`, the same shell `system(3)` uses, so manifests
/// behave the same regardless of the user's login shell.
fn shell_invocation() -> (String, &'static str) {
    if cfg!(target_os = "windows") {
        (
            std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string()),
            "/C",
        )
    } else {
        ("/bin/sh".to_string(), "-c")
    }
}
