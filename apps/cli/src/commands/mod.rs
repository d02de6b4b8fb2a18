pub mod init;
pub mod resolve;
pub mod shell;
pub mod show;

use anyhow::Result;
use envseed_manifest::EnvironmentDescriptor;
use std::path::{Path, PathBuf};

use crate::core::error::CliError;

/// Resolve the `--manifest` argument: an explicit path must load, otherwise
/// discovery falls back to the built-in descriptor.
pub(crate) fn load_descriptor_arg(
    manifest: Option<&Path>,
) -> Result<(Option<PathBuf>, EnvironmentDescriptor)> {
    let loaded = match manifest {
        Some(path) => {
            crate::utils::loader::load_descriptor(path).map(|d| (Some(path.to_path_buf()), d))
        }
        None => {
            let cwd = std::env::current_dir()?;
            crate::utils::loader::load_or_default(&cwd)
        }
    };

    loaded.map_err(|e| CliError::Descriptor(format!("{:#}", e)).into())
}
