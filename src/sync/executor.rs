//! Command execution seam for the synchronizer.

use crate::error::Result;
use crate::shell::{execute, CommandOptions, CommandResult};

/// Runs one shell command to completion.
///
/// The synchronizer talks to subprocesses only through this trait, so tests
/// can substitute a recorder and assert on exactly which commands ran.
pub trait Executor {
    /// Run `command` with the given options and report how it exited.
    ///
    /// A nonzero exit is a normal return value; only failure to start the
    /// command is an error.
    fn run(&mut self, command: &str, options: &CommandOptions) -> Result<CommandResult>;
}

/// Executor backed by the host shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellExecutor;

impl Executor for ShellExecutor {
    fn run(&mut self, command: &str, options: &CommandOptions) -> Result<CommandResult> {
        execute(command, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn shell_executor_reports_exit_code() {
        let temp = TempDir::new().unwrap();
        let mut executor = ShellExecutor;
        let options = CommandOptions::in_dir(temp.path());

        assert!(executor.run("exit 0", &options).unwrap().success);
        assert_eq!(executor.run("exit 4", &options).unwrap().exit_code, Some(4));
    }
}
