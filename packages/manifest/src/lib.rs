pub mod types;
pub use types::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use url::Url;

/// A pinned, declarative development-environment descriptor.
///
/// The descriptor holds no state and performs no I/O: it records which
/// packages a shell session should see and which upstream sources they are
/// resolved against. Evaluation is done per platform by the `domain` crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentDescriptor {
    /// Platform identifiers this descriptor supports (e.g. `x86_64-linux`).
    /// Declared before the table-valued fields so TOML serialization stays
    /// well-formed.
    #[serde(default)]
    pub systems: Vec<String>,

    /// Environment identity (name, version, etc.)
    #[serde(default)]
    pub project: ProjectMetadata,

    /// Pinned upstream sources, fetched by the invoking tool.
    #[serde(default)]
    pub inputs: BTreeMap<String, SourceInput>,

    /// The default installable artifact.
    #[serde(rename = "default-artifact")]
    pub default_artifact: DefaultArtifact,

    /// The dev-shell specification.
    pub shell: ShellSpec,
}

/// Platform families a `[shell.target]` table may name.
pub const KNOWN_FAMILIES: &[&str] = &["linux", "darwin"];

/// Author-time mistakes caught before any resolution is attempted.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("descriptor declares no supported systems")]
    NoSystems,

    #[error("shell hook must be a single non-empty command")]
    InvalidHook,

    #[error("shell declares no packages")]
    NoShellPackages,

    #[error("unknown platform family `{family}` in shell target table")]
    UnknownFamily { family: String },
}

impl EnvironmentDescriptor {
    /// Check the authoring invariants that hold for every descriptor,
    /// independent of any platform. Pin validity is the locking layer's
    /// concern, not checked here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.systems.is_empty() {
            return Err(ValidationError::NoSystems);
        }

        let hook = self.shell.hook.trim();
        if hook.is_empty() || hook.contains('\n') {
            return Err(ValidationError::InvalidHook);
        }

        if self.shell.packages.is_empty() {
            return Err(ValidationError::NoShellPackages);
        }

        for family in self.shell.target.keys() {
            if !KNOWN_FAMILIES.contains(&family.as_str()) {
                return Err(ValidationError::UnknownFamily {
                    family: family.clone(),
                });
            }
        }

        Ok(())
    }
}

impl Default for EnvironmentDescriptor {
    /// The built-in descriptor: a Python dev shell with no interpreter-level
    /// libraries pre-installed, `uv` for dependency management, `ruff` for
    /// formatting, `libffi` for C interop, and the two Apple framework
    /// references only on the Darwin family.
    fn default() -> Self {
        let mut inputs = BTreeMap::new();
        inputs.insert(
            "pkgs".to_string(),
            SourceInput {
                url: Url::parse("https://github.com/NixOS/nixpkgs")
                    .expect("hardcoded input url"),
                pin: Pin::Channel("nixpkgs-unstable".to_string()),
            },
        );
        inputs.insert(
            "utils".to_string(),
            SourceInput {
                url: Url::parse("https://github.com/numtide/flake-utils")
                    .expect("hardcoded input url"),
                pin: Pin::Rev("11707dc2f618dd54ca8739b309ec4fc024de578b".to_string()),
            },
        );

        let mut target = BTreeMap::new();
        target.insert(
            "darwin".to_string(),
            TargetPackages {
                packages: vec![PackageRef::from("IOKit"), PackageRef::from("Security")],
            },
        );

        Self {
            project: ProjectMetadata {
                name: "dev-shell".to_string(),
                version: semver::Version::new(0, 1, 0),
                description: "Reproducible Python development shell".to_string(),
            },
            inputs,
            systems: vec![
                "x86_64-linux".to_string(),
                "aarch64-linux".to_string(),
                "x86_64-darwin".to_string(),
                "aarch64-darwin".to_string(),
            ],
            default_artifact: DefaultArtifact {
                package: PackageRef::from("python3"),
                libraries: Vec::new(),
            },
            shell: ShellSpec {
                packages: vec![
                    PackageRef::from("python3"),
                    PackageRef::from("uv"),
                    PackageRef::from("ruff"),
                    PackageRef::from("libffi"),
                ],
                target,
                hook: "exec zsh".to_string(),
            },
        }
    }
}
