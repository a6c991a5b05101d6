//! prereqs - fetch, update and build project prerequisites.
//!
//! A manifest (`prereqs.json`) lists dependencies, each with shell commands
//! to download, check for updates, update and build it. Checkouts live in
//! `.prereqs/Sources/<name>`; builds install into `.prereqs/<OS-name>`, passed
//! to them as `TARGETDIR`. The process exit status is the number of
//! dependencies that were downloaded or updated.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`http_stub`] - Single-route HTTP server for integration tests
//! - [`layout`] - On-disk directory layout
//! - [`manifest`] - Manifest loading, parsing, and validation
//! - [`shell`] - Shell command execution
//! - [`sync`] - The synchronization loop
//! - [`ui`] - Progress output
//!
//! # Example
//!
//! ```
//! use prereqs::layout::Layout;
//! use prereqs::manifest::{Dependency, Manifest};
//! use prereqs::sync::{RecordingExecutor, Synchronizer};
//! use prereqs::ui::MockUI;
//!
//! let temp = tempfile::TempDir::new().unwrap();
//! let layout = Layout::new(temp.path());
//! let manifest = Manifest::new(vec![Dependency {
//!     name: "zlib".into(),
//!     update_check_command: "git diff --quiet".into(),
//!     update_command: "git pull".into(),
//!     download_command: "git clone zlib".into(),
//!     build_commands: vec!["make install".into()],
//! }]);
//!
//! let mut exec = RecordingExecutor::new();
//! exec.set_creates("git clone zlib", layout.source_dir("zlib"));
//!
//! let mut sync = Synchronizer::new(&layout, exec);
//! let report = sync.sync(&manifest, &mut MockUI::new()).unwrap();
//!
//! assert_eq!(report.changed_count(), 1);
//! assert_eq!(sync.executor().commands(), vec!["git clone zlib", "make install"]);
//! ```

pub mod cli;
pub mod error;
pub mod http_stub;
pub mod layout;
pub mod manifest;
pub mod shell;
pub mod sync;
pub mod ui;

pub use error::{PrereqError, Result};
