//! Manifest schema definitions.
//!
//! These structs map one-to-one onto the `prereqs.json` format. Field names
//! in the file are kebab-cased (`update-needed`), so the Rust names carry
//! explicit renames.

use serde::{Deserialize, Serialize};

/// A single dependency entry in the manifest.
///
/// Every command field is an opaque shell string. Nothing here is parsed
/// beyond being a string; the host shell interprets pipes, globs and quoting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dependency {
    /// Unique name, also the checkout directory under `.prereqs/Sources`.
    pub name: String,

    /// Exit 0 means the checkout is current; anything else means update.
    #[serde(rename = "update-needed")]
    pub update_check_command: String,

    /// Brings an existing checkout up to date.
    #[serde(rename = "update")]
    pub update_command: String,

    /// Fetches a fresh checkout, run from inside the sources root.
    #[serde(rename = "download")]
    pub download_command: String,

    /// Build steps, run in order after a download or update.
    #[serde(rename = "build")]
    pub build_commands: Vec<String>,
}

/// The ordered list of dependencies read from a manifest file.
///
/// Order is significant: dependencies are processed exactly in the order
/// they appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    pub dependencies: Vec<Dependency>,
}

impl Manifest {
    /// Build a manifest from an already-ordered list.
    pub fn new(dependencies: Vec<Dependency>) -> Self {
        Self { dependencies }
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dependency> {
        self.dependencies.iter()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a Dependency;
    type IntoIter = std::slice::Iter<'a, Dependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
