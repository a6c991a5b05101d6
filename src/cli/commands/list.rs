//! List command implementation.
//!
//! The `prereqs list` command shows manifest entries and whether each one
//! already has a checkout. It never runs any manifest command.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::{PrereqError, Result};
use crate::layout::Layout;
use crate::manifest::{load_manifest, manifest_path, Manifest};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// One row of `prereqs list` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub name: String,
    pub fetched: bool,
    pub build_steps: usize,
}

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    manifest: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, manifest_override: Option<&Path>, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            manifest: manifest_path(project_root, manifest_override),
            args,
        }
    }

    /// Build the rows for a manifest against the on-disk layout.
    pub fn entries(layout: &Layout, manifest: &Manifest) -> Vec<ListEntry> {
        manifest
            .iter()
            .map(|dep| ListEntry {
                name: dep.name.clone(),
                fetched: layout.is_fetched(&dep.name),
                build_steps: dep.build_commands.len(),
            })
            .collect()
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manifest = match load_manifest(&self.manifest)? {
            Some(m) => m,
            None if self.args.json => Manifest::default(),
            None => {
                let shown = self
                    .manifest
                    .strip_prefix(&self.project_root)
                    .unwrap_or(&self.manifest);
                ui.warning(&format!(
                    "Could not open {}. Assuming no dependencies.",
                    shown.display()
                ));
                return Ok(CommandResult::success());
            }
        };

        let layout = Layout::new(&self.project_root);
        let entries = Self::entries(&layout, &manifest);

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|e| PrereqError::Other(e.into()))?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        if entries.is_empty() {
            ui.message("No dependencies declared.");
            return Ok(CommandResult::success());
        }

        ui.message("Prerequisites:");
        for entry in &entries {
            let state = if entry.fetched { "fetched" } else { "missing" };
            ui.message(&format!(
                "  {:<24} {:<8} {} build step(s)",
                entry.name, state, entry.build_steps
            ));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"[
        {"name": "zlib", "update-needed": "exit 1", "update": "u", "download": "d", "build": ["make"]},
        {"name": "png", "update-needed": "exit 1", "update": "u", "download": "d", "build": []}
    ]"#;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("prereqs.json"), MANIFEST).unwrap();
        temp
    }

    #[test]
    fn entries_report_fetched_state() {
        let temp = project();
        let layout = Layout::new(temp.path());
        fs::create_dir_all(layout.source_dir("zlib")).unwrap();
        let manifest = load_manifest(&temp.path().join("prereqs.json"))
            .unwrap()
            .unwrap();

        let entries = ListCommand::entries(&layout, &manifest);

        assert_eq!(
            entries,
            vec![
                ListEntry {
                    name: "zlib".into(),
                    fetched: true,
                    build_steps: 1
                },
                ListEntry {
                    name: "png".into(),
                    fetched: false,
                    build_steps: 0
                },
            ]
        );
    }

    #[test]
    fn human_output_lists_each_dependency() {
        let temp = project();
        let cmd = ListCommand::new(temp.path(), None, ListArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result, CommandResult::success());
        assert!(ui.has_message("zlib"));
        assert!(ui.has_message("missing"));
        assert!(ui.messages().iter().any(|m| m.contains("png")));
    }

    #[test]
    fn list_never_creates_layout() {
        let temp = project();
        let cmd = ListCommand::new(temp.path(), None, ListArgs::default());

        cmd.execute(&mut MockUI::new()).unwrap();

        assert!(!temp.path().join(".prereqs").exists());
    }

    #[test]
    fn missing_manifest_warns() {
        let temp = TempDir::new().unwrap();
        let cmd = ListCommand::new(temp.path(), None, ListArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result, CommandResult::success());
        assert!(ui.has_warning("Assuming no dependencies"));
    }

    #[test]
    fn empty_manifest_says_so() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("prereqs.json"), "[]").unwrap();
        let cmd = ListCommand::new(temp.path(), None, ListArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("No dependencies declared."));
    }
}
