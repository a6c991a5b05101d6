//! Manifest discovery and loading.

use crate::error::{PrereqError, Result};
use crate::manifest::schema::Manifest;
use crate::manifest::validator::validate;
use std::fs;
use std::path::{Path, PathBuf};

/// Default manifest file name, looked up in the project root.
pub const DEFAULT_MANIFEST: &str = "prereqs.json";

/// On-disk format of a manifest, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Yaml,
}

impl ManifestFormat {
    /// Pick a format from the file extension. Unknown extensions are JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yml") | Some("yaml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Resolve the manifest path for a project.
///
/// An explicit override wins; relative overrides are taken relative to the
/// project root, not the process working directory.
pub fn manifest_path(project_root: &Path, override_path: Option<&Path>) -> PathBuf {
    match override_path {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => project_root.join(p),
        None => project_root.join(DEFAULT_MANIFEST),
    }
}

/// Load and validate a manifest file.
///
/// Returns `Ok(None)` when the file does not exist. Callers treat that as a
/// manifest with zero dependencies.
///
/// # Errors
///
/// Returns `ManifestParse` if the content is malformed, `ManifestInvalid` if
/// it parses but breaks a validation rule, and `Io` for other read failures.
pub fn load_manifest(path: &Path) -> Result<Option<Manifest>> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No manifest at {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(PrereqError::Io(e)),
    };

    let manifest = parse_manifest(&content, path)?;
    validate(&manifest)?;
    tracing::debug!(
        "Loaded {} dependencies from {}",
        manifest.len(),
        path.display()
    );
    Ok(Some(manifest))
}

/// Parse manifest content without touching the filesystem.
///
/// # Arguments
///
/// * `content` - Raw file content
/// * `source_path` - Path used for format detection and error reporting
pub fn parse_manifest(content: &str, source_path: &Path) -> Result<Manifest> {
    let parsed = match ManifestFormat::from_path(source_path) {
        ManifestFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        ManifestFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| PrereqError::ManifestParse {
        path: source_path.to_path_buf(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const JSON: &str = r#"[
        {
            "name": "zlib",
            "update-needed": "exit 0",
            "update": "git pull",
            "download": "git clone zlib",
            "build": ["make", "make install"]
        }
    ]"#;

    const YAML: &str = r#"
- name: zlib
  update-needed: exit 0
  update: git pull
  download: git clone zlib
  build:
    - make
    - make install
"#;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            ManifestFormat::from_path(Path::new("prereqs.json")),
            ManifestFormat::Json
        );
        assert_eq!(
            ManifestFormat::from_path(Path::new("prereqs.YAML")),
            ManifestFormat::Yaml
        );
        assert_eq!(
            ManifestFormat::from_path(Path::new("prereqs.yml")),
            ManifestFormat::Yaml
        );
        assert_eq!(
            ManifestFormat::from_path(Path::new("prereqs")),
            ManifestFormat::Json
        );
    }

    #[test]
    fn manifest_path_defaults_to_project_root() {
        let root = Path::new("/work/app");
        assert_eq!(
            manifest_path(root, None),
            PathBuf::from("/work/app/prereqs.json")
        );
    }

    #[test]
    fn manifest_path_resolves_relative_override() {
        let root = Path::new("/work/app");
        assert_eq!(
            manifest_path(root, Some(Path::new("ci/deps.yml"))),
            PathBuf::from("/work/app/ci/deps.yml")
        );
    }

    #[test]
    fn manifest_path_keeps_absolute_override() {
        let root = Path::new("/work/app");
        let abs = if cfg!(windows) {
            PathBuf::from("C:\\deps.json")
        } else {
            PathBuf::from("/etc/deps.json")
        };
        assert_eq!(manifest_path(root, Some(&abs)), abs);
    }

    #[test]
    fn missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        let result = load_manifest(&temp.path().join("prereqs.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn loads_json_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prereqs.json");
        fs::write(&path, JSON).unwrap();

        let manifest = load_manifest(&path).unwrap().unwrap();
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.dependencies[0].build_commands, vec!["make", "make install"]);
    }

    #[test]
    fn yaml_and_json_agree() {
        let json = parse_manifest(JSON, Path::new("prereqs.json")).unwrap();
        let yaml = parse_manifest(YAML, Path::new("prereqs.yaml")).unwrap();
        assert_eq!(json, yaml);
    }

    #[test]
    fn empty_array_is_empty_manifest() {
        let manifest = parse_manifest("[]", Path::new("prereqs.json")).unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn malformed_json_reports_path() {
        let err = parse_manifest("[{", Path::new("/p/prereqs.json")).unwrap_err();
        match err {
            PrereqError::ManifestParse { path, .. } => {
                assert_eq!(path, PathBuf::from("/p/prereqs.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn object_instead_of_list_is_parse_error() {
        let err = parse_manifest(r#"{"name": "zlib"}"#, Path::new("prereqs.json")).unwrap_err();
        assert!(matches!(err, PrereqError::ManifestParse { .. }));
    }

    #[test]
    fn duplicate_names_fail_at_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prereqs.json");
        let entry = r#"{"name": "a", "update-needed": "true", "update": "u", "download": "d", "build": []}"#;
        fs::write(&path, format!("[{entry}, {entry}]")).unwrap();

        let err = load_manifest(&path).unwrap_err();
        assert!(matches!(err, PrereqError::ManifestInvalid { .. }));
    }
}
