use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named pointer into the external package collection.
///
/// The name is opaque to the descriptor; it is resolved to a concrete build
/// artifact by the collection at evaluation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
#[serde(transparent)]
pub struct PackageRef(String);

impl PackageRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for PackageRef {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// The distinguished installable artifact: a base interpreter environment.
///
/// `libraries` lists interpreter-level libraries to bundle into the
/// environment. The shipped descriptor keeps it empty on purpose: no
/// language-level libraries are pre-installed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct DefaultArtifact {
    /// The base interpreter package.
    pub package: PackageRef,

    /// Interpreter-level libraries bundled into the environment.
    #[serde(default)]
    pub libraries: Vec<PackageRef>,
}
