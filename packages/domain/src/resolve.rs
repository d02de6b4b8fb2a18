use envseed_manifest::{EnvironmentDescriptor, ValidationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::collection::{
    lock_inputs, CollectionError, FetchError, PackageCollection, ResolvedPackage,
};
use crate::system::platform::System;

/// The full output of evaluating a descriptor for one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub system: System,
    pub default_artifact: ResolvedArtifact,
    pub dev_shell: ResolvedShell,
}

/// The default installable artifact, resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedArtifact {
    pub package: ResolvedPackage,
    pub libraries: Vec<ResolvedPackage>,
}

/// The dev shell, resolved: packages in search-path order plus the single
/// startup command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedShell {
    pub packages: Vec<ResolvedPackage>,
    pub hook: String,
}

/// Everything that can abort an evaluation. There is no partial environment:
/// the first failure is returned as-is and nothing is produced.
#[derive(Error, Debug, PartialEq)]
pub enum ResolveError {
    #[error("unsupported platform `{platform}`")]
    UnsupportedPlatform { platform: String },

    #[error("failed to resolve package `{package}` for {system}")]
    PackageResolution {
        package: String,
        system: System,
        #[source]
        source: CollectionError,
    },

    #[error("failed to fetch pinned input")]
    UpstreamFetch(#[from] FetchError),

    #[error(transparent)]
    Descriptor(#[from] ValidationError),
}

/// Evaluate `descriptor` for `platform` against `collection`.
///
/// Pure and single-step: the same descriptor, identifier and pinned
/// collection always produce the same `Resolution`. Package order is the
/// authored order, with platform-family extras appended after the
/// cross-platform list.
pub fn resolve(
    descriptor: &EnvironmentDescriptor,
    platform: &str,
    collection: &dyn PackageCollection,
) -> Result<Resolution, ResolveError> {
    descriptor.validate()?;
    lock_inputs(&descriptor.inputs)?;

    let system: System = platform.parse().map_err(|_| ResolveError::UnsupportedPlatform {
        platform: platform.to_string(),
    })?;
    if !descriptor.systems.iter().any(|s| s == platform) {
        return Err(ResolveError::UnsupportedPlatform {
            platform: platform.to_string(),
        });
    }

    let lookup = |package: &envseed_manifest::PackageRef| {
        collection
            .lookup(package, system)
            .map_err(|source| ResolveError::PackageResolution {
                package: package.to_string(),
                system,
                source,
            })
    };

    let default_artifact = ResolvedArtifact {
        package: lookup(&descriptor.default_artifact.package)?,
        libraries: descriptor
            .default_artifact
            .libraries
            .iter()
            .map(lookup)
            .collect::<Result<_, _>>()?,
    };

    let mut packages = Vec::with_capacity(descriptor.shell.packages.len());
    for package in &descriptor.shell.packages {
        packages.push(lookup(package)?);
    }
    if let Some(extras) = descriptor.shell.target.get(system.os.family()) {
        for package in &extras.packages {
            packages.push(lookup(package)?);
        }
    }

    Ok(Resolution {
        system,
        default_artifact,
        dev_shell: ResolvedShell {
            packages,
            hook: descriptor.shell.hook.clone(),
        },
    })
}
