//! On-disk layout of fetched and built prerequisites.
//!
//! ```text
//! <root>/.prereqs/
//!     Sources/<name>/    one checkout per dependency
//!     <OS-name>/         build output, passed to builds as TARGETDIR
//! ```

use crate::error::Result;
use crate::shell::os_name;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding everything prereqs manages.
pub const PREREQS_DIR: &str = ".prereqs";

/// Subdirectory of [`PREREQS_DIR`] holding source checkouts.
pub const SOURCES_DIR: &str = "Sources";

/// Environment variable carrying the artifact root to build commands.
pub const TARGET_DIR_ENV: &str = "TARGETDIR";

/// Resolved directory roots for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
    sources_dir: PathBuf,
    target_dir: PathBuf,
}

impl Layout {
    /// Layout for the host platform.
    pub fn new(root: &Path) -> Self {
        Self::with_os(root, os_name())
    }

    /// Layout for an explicit platform name.
    pub fn with_os(root: &Path, os: &str) -> Self {
        let base = root.join(PREREQS_DIR);
        Self {
            root: root.to_path_buf(),
            sources_dir: base.join(SOURCES_DIR),
            target_dir: base.join(os),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Root of all source checkouts. Downloads run here.
    pub fn sources_dir(&self) -> &Path {
        &self.sources_dir
    }

    /// Per-platform artifact root.
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Checkout directory for a named dependency.
    pub fn source_dir(&self, name: &str) -> PathBuf {
        self.sources_dir.join(name)
    }

    /// Whether a dependency has been fetched before.
    ///
    /// Any existing path counts, not only directories.
    pub fn is_fetched(&self, name: &str) -> bool {
        self.source_dir(name).exists()
    }

    /// Create the sources and target roots if missing.
    ///
    /// Returns the directories that were actually created, in creation order.
    pub fn ensure_dirs(&self) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();
        for dir in [&self.sources_dir, &self.target_dir] {
            if !dir.exists() {
                tracing::debug!("Creating {}", dir.display());
                fs::create_dir_all(dir)?;
                created.push(dir.clone());
            }
        }
        Ok(created)
    }

    /// Display form of a path relative to the project root.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
