use anyhow::Result;
use clap::Parser;
use domain::{PinnedCollection, System};
use std::path::PathBuf;

use crate::core::error::CliError;

#[derive(Parser, Debug)]
pub struct ResolveCommand {
    /// Platform identifier to resolve for (defaults to the host)
    #[arg(long, short)]
    pub platform: Option<String>,

    /// Path to the descriptor file
    #[arg(long, short)]
    pub manifest: Option<PathBuf>,

    /// Emit the resolution as JSON on stdout, nothing else
    #[arg(long)]
    pub json: bool,
}

impl ResolveCommand {
    pub async fn execute(self) -> Result<()> {
        let (_, descriptor) = super::load_descriptor_arg(self.manifest.as_deref())?;

        let platform = match &self.platform {
            Some(p) => p.clone(),
            None => System::detect()
                .ok_or(CliError::UnsupportedHost)?
                .to_string(),
        };

        let collection = PinnedCollection::pinned_default();
        let resolution = domain::resolve(&descriptor, &platform, &collection)
            .map_err(CliError::Resolution)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&resolution)?);
            return Ok(());
        }

        cliclack::intro(format!(
            "{} {}",
            console::style("Envseed").bold(),
            console::style(concat!("v", env!("CARGO_PKG_VERSION"))).dim()
        ))?;

        cliclack::log::info("Shell plan:")?;
        cliclack::log::info(serde_json::to_string_pretty(&resolution)?)?;

        cliclack::outro(format!(
            "Environment resolved for {}. Use '{}' to enter it.",
            resolution.system,
            console::style("envseed shell").bold()
        ))?;

        Ok(())
    }
}
