use anyhow::{Context, Result};
use clap::Parser;
use domain::{PinnedCollection, System};
use std::path::PathBuf;
use std::process::Command;

use crate::core::error::CliError;
use crate::ui::{Icon, Theme};

#[derive(Parser, Debug)]
pub struct ShellCommand {
    /// Path to the descriptor file
    #[arg(long, short)]
    pub manifest: Option<PathBuf>,
}

impl ShellCommand {
    pub async fn execute(self) -> Result<()> {
        let (_, descriptor) = super::load_descriptor_arg(self.manifest.as_deref())?;

        let system = System::detect().ok_or(CliError::UnsupportedHost)?;
        let collection = PinnedCollection::pinned_default();
        let resolution = domain::resolve(&descriptor, &system.to_string(), &collection)
            .map_err(CliError::Resolution)?;
        tracing::debug!(%system, packages = resolution.dev_shell.packages.len(), "resolved dev shell");

        println!(
            "{} {} {}",
            Icon::Seed,
            Theme::primary("Activating Environment:"),
            Theme::bold(&descriptor.project.name)
        );
        for package in &resolution.dev_shell.packages {
            println!("   {} {}", package.name, Theme::muted(&package.version));
        }

        // Materialization of store paths onto PATH is the collection's job;
        // the child only gets told what the environment contains.
        let packages_env = resolution
            .dev_shell
            .packages
            .iter()
            .map(|p| format!("{}@{}", p.name, p.version))
            .collect::<Vec<_>>()
            .join(":");

        let shell = std::env::var("SHELL").unwrap_or_else(|_| "sh".to_string());

        println!(
            "{} Running hook {} ...",
            Icon::Shell,
            Theme::muted(&resolution.dev_shell.hook)
        );

        let mut child = Command::new(&shell)
            .arg("-c")
            .arg(&resolution.dev_shell.hook)
            .env("ENVSEED_SYSTEM", system.to_string())
            .env("ENVSEED_PACKAGES", packages_env)
            .spawn()
            .context(format!("Failed to run shell hook via: {}", shell))?;

        let status = child.wait()?;

        if status.success() {
            println!("\n{} Shell exited successfully.", Icon::Success);
        } else {
            println!("\n{} Shell exited with error.", Icon::Cross);
        }

        Ok(())
    }
}
