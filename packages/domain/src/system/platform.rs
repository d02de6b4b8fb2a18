use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Operating system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Linux,
    Darwin,
}

impl Os {
    /// The family name used by `[shell.target]` tables.
    pub fn family(&self) -> &'static str {
        match self {
            Os::Linux => "linux",
            Os::Darwin => "darwin",
        }
    }

    pub fn is_darwin(&self) -> bool {
        matches!(self, Os::Darwin)
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.family())
    }
}

/// CPU architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    X86_64,
    Aarch64,
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arch::X86_64 => write!(f, "x86_64"),
            Arch::Aarch64 => write!(f, "aarch64"),
        }
    }
}

/// A platform a descriptor can be evaluated for, identified by the canonical
/// `<arch>-<os>` string (e.g. `x86_64-linux`, `aarch64-darwin`). Serialized
/// as that identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct System {
    pub arch: Arch,
    pub os: Os,
}

impl System {
    pub const fn new(arch: Arch, os: Os) -> Self {
        Self { arch, os }
    }

    /// Map the running host onto a supported platform, if it is one.
    pub fn detect() -> Option<Self> {
        let arch = match std::env::consts::ARCH {
            "x86_64" => Arch::X86_64,
            "aarch64" => Arch::Aarch64,
            _ => return None,
        };
        let os = match std::env::consts::OS {
            "linux" => Os::Linux,
            "macos" => Os::Darwin,
            _ => return None,
        };
        Some(Self { arch, os })
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.arch, self.os)
    }
}

impl From<System> for String {
    fn from(system: System) -> Self {
        system.to_string()
    }
}

impl TryFrom<String> for System {
    type Error = ParsePlatformError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("unrecognized platform identifier `{0}`")]
pub struct ParsePlatformError(pub String);

impl FromStr for System {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unrecognized = || ParsePlatformError(s.to_string());

        let (arch, os) = s.split_once('-').ok_or_else(unrecognized)?;
        let arch = match arch {
            "x86_64" => Arch::X86_64,
            "aarch64" => Arch::Aarch64,
            _ => return Err(unrecognized()),
        };
        let os = match os {
            "linux" => Os::Linux,
            "darwin" => Os::Darwin,
            _ => return Err(unrecognized()),
        };
        Ok(Self { arch, os })
    }
}
