//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
///
/// Failures travel as `Err`; a completed command only carries the process
/// exit status.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code to use.
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self::with_code(0)
    }

    /// Completed run that reports a count through its exit status.
    pub fn with_code(exit_code: u8) -> Self {
        Self { exit_code }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    manifest: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            manifest: None,
        }
    }

    /// Use an explicit manifest path instead of the default.
    pub fn with_manifest(mut self, manifest: Option<PathBuf>) -> Self {
        self.manifest = manifest;
        self
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manifest = self.manifest.as_deref();
        match &cli.command {
            Some(Commands::Sync) | None => {
                let cmd = super::sync::SyncCommand::new(&self.project_root, manifest);
                cmd.execute(ui)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(&self.project_root, manifest, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success_exits_zero() {
        assert_eq!(CommandResult::success().exit_code, 0);
    }

    #[test]
    fn command_result_with_code() {
        assert_eq!(CommandResult::with_code(3).exit_code, 3);
    }

    #[test]
    fn no_subcommand_runs_sync() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let cli = Cli::parse_from(["prereqs"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert_eq!(result, CommandResult::success());
        assert!(ui.has_warning("Assuming no dependencies"));
    }

    #[test]
    fn manifest_override_is_used() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("deps.json"), "[]").unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf())
            .with_manifest(Some(PathBuf::from("deps.json")));
        let cli = Cli::parse_from(["prereqs", "sync"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert_eq!(result, CommandResult::success());
        assert!(ui.warnings().is_empty());
        assert!(ui.has_message("Prerequisites updated or changed: 0"));
    }
}
