use anyhow::Result;
use clap::Parser;
use domain::{PinnedCollection, System};
use std::path::PathBuf;

use crate::core::error::CliError;
use crate::ui::{Icon, Theme};

#[derive(Parser, Debug)]
pub struct ShowCommand {
    /// Platform identifier to resolve for (defaults to the host)
    #[arg(long, short)]
    pub platform: Option<String>,

    /// Path to the descriptor file
    #[arg(long, short)]
    pub manifest: Option<PathBuf>,
}

impl ShowCommand {
    pub async fn execute(self) -> Result<()> {
        let (path, descriptor) = super::load_descriptor_arg(self.manifest.as_deref())?;

        let platform = match &self.platform {
            Some(p) => p.clone(),
            None => System::detect()
                .ok_or(CliError::UnsupportedHost)?
                .to_string(),
        };

        let collection = PinnedCollection::pinned_default();
        let resolution = domain::resolve(&descriptor, &platform, &collection)
            .map_err(CliError::Resolution)?;

        println!(
            "{} {} {}",
            Icon::Seed,
            Theme::primary("Environment:"),
            Theme::bold(&descriptor.project.name)
        );
        match &path {
            Some(p) => println!("   {}", Theme::muted(format!("descriptor: {}", p.display()))),
            None => println!("   {}", Theme::muted("descriptor: built-in")),
        }
        println!(
            "{} {} {}",
            Icon::Platform,
            Theme::primary("Platform:"),
            resolution.system
        );
        println!(
            "{} {}",
            Icon::Info,
            Theme::muted(format!("supported: {}", descriptor.systems.join(", ")))
        );

        println!("\n{} {}", Icon::Package, Theme::primary("Default artifact:"));
        println!(
            "   {} {}",
            resolution.default_artifact.package.name,
            Theme::muted(&resolution.default_artifact.package.version)
        );
        if resolution.default_artifact.libraries.is_empty() {
            println!("   {}", Theme::muted("no interpreter libraries bundled"));
        } else {
            for lib in &resolution.default_artifact.libraries {
                println!("   {} {}", lib.name, Theme::muted(&lib.version));
            }
        }

        println!("\n{} {}", Icon::Package, Theme::primary("Dev shell:"));
        for package in &resolution.dev_shell.packages {
            println!("   {} {}", package.name, Theme::muted(&package.version));
        }

        println!(
            "\n{} {} {}",
            Icon::Shell,
            Theme::primary("Hook:"),
            resolution.dev_shell.hook
        );

        Ok(())
    }
}
