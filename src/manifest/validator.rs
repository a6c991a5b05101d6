//! Manifest validation rules.
//!
//! Checks that serde cannot express on its own:
//! - Names must be non-empty
//! - Names must be a single path component
//! - Names must be unique

use crate::error::{PrereqError, Result};
use crate::manifest::schema::Manifest;
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: &'static str,
    /// Human-readable error message
    pub message: String,
    /// Zero-based position of the offending entry
    pub index: usize,
}

/// Validate a manifest and return every violation found.
pub fn validate_manifest(manifest: &Manifest) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, dep) in manifest.iter().enumerate() {
        let name = dep.name.as_str();

        if name.trim().is_empty() {
            errors.push(ValidationError {
                rule: "empty-name",
                message: format!("Entry #{} has an empty name", index + 1),
                index,
            });
            continue;
        }

        if !is_single_component(name) {
            errors.push(ValidationError {
                rule: "path-name",
                message: format!(
                    "Dependency name '{}' must be a plain directory name",
                    name
                ),
                index,
            });
        }

        if !seen.insert(name) {
            errors.push(ValidationError {
                rule: "duplicate-name",
                message: format!("Duplicate dependency name '{}'", name),
                index,
            });
        }
    }

    errors
}

/// Validate a manifest, failing on the first batch of errors.
pub fn validate(manifest: &Manifest) -> Result<()> {
    let errors = validate_manifest(manifest);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(PrereqError::ManifestInvalid { message })
}

fn is_single_component(name: &str) -> bool {
    name != "." && name != ".." && !name.contains(['/', '\\'])
}
