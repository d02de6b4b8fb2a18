use anyhow::{Context, Result};
use envseed_manifest::EnvironmentDescriptor;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{DESCRIPTOR_JSON, DESCRIPTOR_TOML, DESCRIPTOR_YAML};

/// Finds and loads a descriptor following the discovery precedence rules.
pub fn find_and_load_descriptor(start_dir: &Path) -> Result<(PathBuf, EnvironmentDescriptor)> {
    let candidates = vec![DESCRIPTOR_TOML, DESCRIPTOR_JSON, DESCRIPTOR_YAML];

    for filename in candidates {
        let path = start_dir.join(filename);
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading descriptor");
            return load_descriptor(&path).map(|d| (path, d));
        }
    }

    anyhow::bail!("No descriptor (envseed.toml) found in {:?}", start_dir)
}

/// Falls back to the built-in descriptor when the directory has none.
/// Returns the path only when a file was actually read.
pub fn load_or_default(start_dir: &Path) -> Result<(Option<PathBuf>, EnvironmentDescriptor)> {
    for filename in [DESCRIPTOR_TOML, DESCRIPTOR_JSON, DESCRIPTOR_YAML] {
        let path = start_dir.join(filename);
        if path.exists() {
            return load_descriptor(&path).map(|d| (Some(path), d));
        }
    }
    tracing::debug!("no descriptor file found, using the built-in one");
    Ok((None, EnvironmentDescriptor::default()))
}

/// Loads a descriptor from a specific path, detecting format by extension.
pub fn load_descriptor(path: &Path) -> Result<EnvironmentDescriptor> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read descriptor file: {:?}", path))?;

    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    match ext {
        "toml" => toml::from_str(&content).with_context(|| "Failed to parse TOML descriptor"),
        "json" => serde_json::from_str(&content).with_context(|| "Failed to parse JSON descriptor"),
        "yaml" | "yml" => {
            serde_yaml::from_str(&content).with_context(|| "Failed to parse YAML descriptor")
        }
        _ => anyhow::bail!("Unsupported descriptor format: {}", ext),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_toml_precedes_json() {
        let dir = tempfile::tempdir().unwrap();
        let descriptor = EnvironmentDescriptor::default();

        fs::write(
            dir.path().join(DESCRIPTOR_TOML),
            toml::to_string_pretty(&descriptor).unwrap(),
        )
        .unwrap();
        fs::write(dir.path().join(DESCRIPTOR_JSON), "{ not json at all").unwrap();

        let (path, loaded) = find_and_load_descriptor(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), DESCRIPTOR_TOML);
        assert_eq!(loaded, descriptor);
    }

    #[test]
    fn test_missing_descriptor_bails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_and_load_descriptor(dir.path()).is_err());
    }

    #[test]
    fn test_load_or_default_uses_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let (path, loaded) = load_or_default(dir.path()).unwrap();
        assert!(path.is_none());
        assert_eq!(loaded, EnvironmentDescriptor::default());
    }

    #[test]
    fn test_malformed_descriptor_is_an_error_not_a_fallback() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DESCRIPTOR_TOML), "systems = 7").unwrap();
        assert!(load_or_default(dir.path()).is_err());
    }

    #[test]
    fn test_json_descriptor_loads() {
        let dir = tempfile::tempdir().unwrap();
        let descriptor = EnvironmentDescriptor::default();
        fs::write(
            dir.path().join(DESCRIPTOR_JSON),
            serde_json::to_string(&descriptor).unwrap(),
        )
        .unwrap();

        let (path, loaded) = find_and_load_descriptor(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), DESCRIPTOR_JSON);
        assert_eq!(loaded, descriptor);
    }
}
