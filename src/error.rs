//! Error types for prereqs operations.
//!
//! This module defines [`PrereqError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing manifest is not an error: loaders return `Ok(None)`
//! - Manifest problems surface at load time as `ManifestParse` / `ManifestInvalid`
//! - Any external command failure is fatal and aborts the run
//! - So is a download that exits zero without producing a checkout

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for prereqs operations.
#[derive(Debug, Error)]
pub enum PrereqError {
    /// Manifest file could not be parsed.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// Manifest parsed but violates a structural rule.
    #[error("Invalid manifest: {message}")]
    ManifestInvalid { message: String },

    /// Shell command exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Shell command could not be started at all.
    #[error("Could not run '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A download or update succeeded but left no checkout to build in.
    #[error("No checkout for '{name}' at {path}")]
    MissingCheckout { name: String, path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for prereqs operations.
pub type Result<T> = std::result::Result<T, PrereqError>;
