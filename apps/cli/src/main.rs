pub mod commands;
pub mod constants;
pub mod core;
pub mod ui;
pub mod utils;

use clap::{Parser, Subcommand};

use crate::core::error::CliError;

#[derive(Parser)]
#[command(name = "envseed")]
#[command(about = "Seed reproducible development shells", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in descriptor to envseed.toml
    Init(commands::init::InitCommand),
    /// Show the environment a platform resolves to
    Show(commands::show::ShowCommand),
    /// Resolve the environment and emit the plan
    Resolve(commands::resolve::ResolveCommand),
    /// Enter the dev shell for the current platform
    Shell(commands::shell::ShellCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init(cmd) => cmd.execute().await,
        Commands::Show(cmd) => cmd.execute().await,
        Commands::Resolve(cmd) => cmd.execute().await,
        Commands::Shell(cmd) => cmd.execute().await,
    };

    if let Err(err) = result {
        match err.downcast_ref::<CliError>() {
            Some(cli_err) => {
                cli_err.render();
                std::process::exit(1);
            }
            None => return Err(err),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_accepts_platform_and_json() {
        let cli = Cli::parse_from(["envseed", "resolve", "--platform", "x86_64-linux", "--json"]);
        match cli.command {
            Commands::Resolve(cmd) => {
                assert_eq!(cmd.platform.as_deref(), Some("x86_64-linux"));
                assert!(cmd.json);
            }
            _ => panic!("Expected resolve subcommand"),
        }
    }
}
