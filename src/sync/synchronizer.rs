//! The prerequisite synchronization loop.
//!
//! For each dependency, in manifest order:
//!
//! 1. No checkout yet: run `download` from the sources root.
//! 2. Checkout exists: run `update-needed` inside it. Exit zero means current.
//!    Any other exit, including a broken check, runs `update`.
//! 3. After a download or update, run every `build` command inside the
//!    checkout with `TARGETDIR` pointing at the platform artifact root.
//!
//! The first failing download, update or build aborts the whole run. Nothing
//! is rolled back.

use crate::error::{PrereqError, Result};
use crate::layout::{Layout, TARGET_DIR_ENV};
use crate::manifest::{Dependency, Manifest};
use crate::shell::CommandOptions;
use crate::ui::UserInterface;

use super::report::{DependencyReport, Outcome, SyncReport};
use super::Executor;

/// Drives one synchronization run over a manifest.
pub struct Synchronizer<'a, E: Executor> {
    layout: &'a Layout,
    executor: E,
}

impl<'a, E: Executor> Synchronizer<'a, E> {
    pub fn new(layout: &'a Layout, executor: E) -> Self {
        Self { layout, executor }
    }

    /// Borrow the executor, e.g. to inspect a recorder after a run.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Process every dependency in order.
    ///
    /// Creates the layout roots first. Returns the per-dependency report; its
    /// [`SyncReport::changed_count`] is the run's result.
    pub fn sync(&mut self, manifest: &Manifest, ui: &mut dyn UserInterface) -> Result<SyncReport> {
        for dir in self.layout.ensure_dirs()? {
            ui.message(&format!(
                "Creating directory {}",
                self.layout.relative(&dir).display()
            ));
        }

        ui.message("Updating prerequisites...");
        let mut report = SyncReport::default();

        for dep in manifest {
            let entry = self.sync_one(dep, ui)?;
            tracing::debug!(dependency = %entry.name, outcome = %entry.outcome, "synchronized");
            report.push(entry);
        }

        ui.message(&format!(
            "Prerequisites updated or changed: {}",
            report.changed_count()
        ));
        Ok(report)
    }

    fn sync_one(&mut self, dep: &Dependency, ui: &mut dyn UserInterface) -> Result<DependencyReport> {
        ui.dependency(&dep.name);
        let source_dir = self.layout.source_dir(&dep.name);

        let outcome = if self.layout.is_fetched(&dep.name) {
            let check = self
                .executor
                .run(&dep.update_check_command, &CommandOptions::in_dir(&source_dir))?;

            if check.success {
                ui.phase("no update needed");
                Outcome::UpToDate
            } else {
                tracing::debug!(
                    "Update check for '{}' exited with {:?}",
                    dep.name,
                    check.exit_code
                );
                ui.phase("updating...");
                self.executor
                    .run(&dep.update_command, &CommandOptions::in_dir(&source_dir))?
                    .into_checked(&dep.update_command)?;
                Outcome::Updated
            }
        } else {
            ui.phase("downloading...");
            self.executor
                .run(
                    &dep.download_command,
                    &CommandOptions::in_dir(self.layout.sources_dir()),
                )?
                .into_checked(&dep.download_command)?;
            Outcome::Downloaded
        };

        let builds_run = if outcome.is_changed() {
            self.build(dep, ui)?
        } else {
            0
        };

        Ok(DependencyReport {
            name: dep.name.clone(),
            outcome,
            builds_run,
        })
    }

    fn build(&mut self, dep: &Dependency, ui: &mut dyn UserInterface) -> Result<usize> {
        // The checkout must exist here even when there is nothing to build.
        let source_dir = self.layout.source_dir(&dep.name);
        if !self.layout.is_fetched(&dep.name) {
            return Err(PrereqError::MissingCheckout {
                name: dep.name.clone(),
                path: source_dir,
            });
        }

        ui.phase("building...");
        let options = CommandOptions::in_dir(source_dir).with_env(
            TARGET_DIR_ENV,
            self.layout.target_dir().to_string_lossy().into_owned(),
        );

        for command in &dep.build_commands {
            ui.command(command);
            self.executor
                .run(command, &options)?
                .into_checked(command)?;
        }

        Ok(dep.build_commands.len())
    }
}
