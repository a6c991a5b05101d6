//! Sync command implementation.
//!
//! The `prereqs sync` command (also the default) downloads, updates and
//! builds every dependency in the manifest. Its exit status is the number of
//! dependencies that changed.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::layout::Layout;
use crate::manifest::{load_manifest, manifest_path};
use crate::sync::{ShellExecutor, Synchronizer};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The sync command implementation.
pub struct SyncCommand {
    project_root: PathBuf,
    manifest: PathBuf,
}

impl SyncCommand {
    /// Create a new sync command.
    pub fn new(project_root: &Path, manifest_override: Option<&Path>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            manifest: manifest_path(project_root, manifest_override),
        }
    }

    /// Resolved manifest path.
    pub fn manifest(&self) -> &Path {
        &self.manifest
    }
}

impl Command for SyncCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(manifest) = load_manifest(&self.manifest)? else {
            let shown = self
                .manifest
                .strip_prefix(&self.project_root)
                .unwrap_or(&self.manifest);
            ui.warning(&format!(
                "Could not open {}. Assuming no dependencies.",
                shown.display()
            ));
            return Ok(CommandResult::success());
        };

        let layout = Layout::new(&self.project_root);
        let mut synchronizer = Synchronizer::new(&layout, ShellExecutor);
        let report = synchronizer.sync(&manifest, ui)?;

        Ok(CommandResult::with_code(report.exit_code()))
    }
}
