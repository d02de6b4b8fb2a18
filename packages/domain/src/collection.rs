use envseed_manifest::{PackageRef, SourceInput};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use url::Url;

use crate::system::platform::{Os, System};

/// A package resolved to a concrete build for one platform. The version is
/// collection-provided and opaque to the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPackage {
    pub name: String,
    pub version: String,
    pub system: System,
}

/// Lookup failures surfaced by a collection.
#[derive(Error, Debug, PartialEq)]
pub enum CollectionError {
    #[error("package `{package}` cannot be located in the pinned collection")]
    NotFound { package: String },

    #[error("package `{package}` cannot be built for {system}")]
    NotBuildable { package: String, system: System },
}

/// Pin problems detected while locking a declared input.
#[derive(Error, Debug, PartialEq)]
pub enum FetchError {
    #[error("input `{input}` ({url}) has no retrievable pin")]
    InvalidPin { input: String, url: Url },
}

/// Check that every declared input is locked to a retrievable state.
/// Fetching is delegated to the invoking tool, so the only failure detected
/// here is a pin that could never be retrieved (empty channel or revision).
pub fn lock_inputs(inputs: &BTreeMap<String, SourceInput>) -> Result<(), FetchError> {
    for (name, input) in inputs {
        if input.pin.is_empty() {
            return Err(FetchError::InvalidPin {
                input: name.clone(),
                url: input.url.clone(),
            });
        }
    }
    Ok(())
}

/// Read access to an external, versioned repository of pre-built packages.
///
/// Materialization of artifacts is entirely the collection's concern; the
/// resolution layer only asks whether a name maps to a build for a platform.
pub trait PackageCollection {
    fn lookup(
        &self,
        package: &PackageRef,
        system: System,
    ) -> Result<ResolvedPackage, CollectionError>;
}

/// One name in a pinned collection snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    version: String,
    /// `None` means the package builds everywhere.
    families: Option<Vec<Os>>,
}

impl CatalogEntry {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            families: None,
        }
    }

    pub fn only_on(version: impl Into<String>, families: Vec<Os>) -> Self {
        Self {
            version: version.into(),
            families: Some(families),
        }
    }
}

/// An immutable snapshot of a package collection at a pinned revision.
///
/// The real collection lives upstream; this snapshot carries just enough of
/// it (name, version, platform gating) to answer lookups deterministically.
#[derive(Debug, Clone)]
pub struct PinnedCollection {
    catalog: BTreeMap<String, CatalogEntry>,
}

impl PinnedCollection {
    pub fn new() -> Self {
        Self {
            catalog: BTreeMap::new(),
        }
    }

    pub fn with_entry(mut self, name: impl Into<String>, entry: CatalogEntry) -> Self {
        self.catalog.insert(name.into(), entry);
        self
    }

    /// The snapshot backing the built-in descriptor: the Python toolchain on
    /// every platform, the Apple frameworks gated to the Darwin family.
    pub fn pinned_default() -> Self {
        Self::new()
            .with_entry("python3", CatalogEntry::new("3.12.4"))
            .with_entry("uv", CatalogEntry::new("0.4.30"))
            .with_entry("ruff", CatalogEntry::new("0.6.8"))
            .with_entry("libffi", CatalogEntry::new("3.4.6"))
            .with_entry("zsh", CatalogEntry::new("5.9"))
            .with_entry("IOKit", CatalogEntry::only_on("11.3", vec![Os::Darwin]))
            .with_entry("Security", CatalogEntry::only_on("11.3", vec![Os::Darwin]))
    }
}

impl Default for PinnedCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageCollection for PinnedCollection {
    fn lookup(
        &self,
        package: &PackageRef,
        system: System,
    ) -> Result<ResolvedPackage, CollectionError> {
        let entry = self
            .catalog
            .get(package.as_str())
            .ok_or_else(|| CollectionError::NotFound {
                package: package.to_string(),
            })?;

        if let Some(families) = &entry.families {
            if !families.contains(&system.os) {
                return Err(CollectionError::NotBuildable {
                    package: package.to_string(),
                    system,
                });
            }
        }

        Ok(ResolvedPackage {
            name: package.to_string(),
            version: entry.version.clone(),
            system,
        })
    }
}
