//! Manifest loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use prereqs::manifest::{load_manifest, DEFAULT_MANIFEST};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join(DEFAULT_MANIFEST);
//!
//! // A missing manifest means "no dependencies", not an error.
//! assert!(load_manifest(&path).unwrap().is_none());
//!
//! fs::write(&path, r#"[{"name": "zlib", "update-needed": "exit 0",
//!     "update": "git pull", "download": "git clone zlib", "build": ["make"]}]"#).unwrap();
//! let manifest = load_manifest(&path).unwrap().unwrap();
//! assert_eq!(manifest.dependencies[0].name, "zlib");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{load_manifest, manifest_path, parse_manifest, ManifestFormat, DEFAULT_MANIFEST};
pub use schema::{Dependency, Manifest};
pub use validator::{validate, validate_manifest, ValidationError};
