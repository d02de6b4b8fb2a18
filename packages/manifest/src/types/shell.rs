use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::packages::PackageRef;

/// The dev-shell surface of a descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ShellSpec {
    /// Packages put on the shell's search path on every platform, in the
    /// order they are declared.
    pub packages: Vec<PackageRef>,

    /// The single startup command run after the shell is entered.
    pub hook: String,

    /// Platform-family-specific additions (a la Cargo target tables), keyed
    /// by family name (`linux`, `darwin`). Declared last so TOML emits the
    /// sub-tables after the scalar fields.
    #[serde(default)]
    pub target: BTreeMap<String, TargetPackages>,
}

/// Extra packages for one platform family.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct TargetPackages {
    pub packages: Vec<PackageRef>,
}
