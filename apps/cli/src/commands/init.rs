use anyhow::{Context, Result};
use clap::Parser;
use envseed_manifest::EnvironmentDescriptor;

use crate::constants::DESCRIPTOR_TOML;

#[derive(Parser, Debug, Clone)]
pub struct InitCommand {
    /// Environment name
    #[arg(long, default_value = "dev-shell")]
    pub name: String,

    /// Force overwrite existing envseed.toml
    #[arg(long, short)]
    pub force: bool,
}

impl InitCommand {
    pub async fn execute(self) -> Result<()> {
        cliclack::intro("Envseed Initializer")?;

        let cwd = std::env::current_dir()?;
        let path = cwd.join(DESCRIPTOR_TOML);

        if path.exists() && !self.force {
            cliclack::log::error(format!(
                "{} already exists. Pass --force to overwrite it.",
                DESCRIPTOR_TOML
            ))?;
            anyhow::bail!("Refusing to overwrite {}", DESCRIPTOR_TOML);
        }

        let mut descriptor = EnvironmentDescriptor::default();
        descriptor.project.name = self.name.clone();

        let rendered = toml::to_string_pretty(&descriptor)?;
        std::fs::write(&path, rendered)
            .with_context(|| format!("Failed to write {:?}", path))?;

        cliclack::log::step(format!("Wrote {}", path.display()))?;
        cliclack::outro(format!(
            "Initialized environment `{}`. Run '{}' to enter it.",
            self.name,
            console::style("envseed shell").bold()
        ))?;

        Ok(())
    }
}
