//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use parley_core::config::Config;

mod commands;

#[derive(Parser)]
#[command(name = "parley")]
#[command(version)]
#[command(about = "Terminal chat session page")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Width in columns below which the narrow layout is used
    #[arg(long, value_name = "COLS", global = true)]
    breakpoint: Option<u16>,

    /// Artificial latency for conversation creation, in milliseconds
    #[arg(long, value_name = "MS", env = "PARLEY_STORE_LATENCY_MS", global = true)]
    store_latency_ms: Option<u64>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Start the interactive session (default)
    Chat,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Print a fresh config generated from the built-in defaults
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        None | Some(Commands::Chat) => {
            let mut config = Config::load().context("load config")?;
            apply_overrides(&mut config, cli.breakpoint, cli.store_latency_ms)?;
            commands::chat::run(config).await
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
        },
    }
}

fn apply_overrides(
    config: &mut Config,
    breakpoint: Option<u16>,
    store_latency_ms: Option<u64>,
) -> Result<()> {
    if let Some(breakpoint) = breakpoint {
        anyhow::ensure!(breakpoint > 0, "--breakpoint must be at least 1");
        config.mobile_breakpoint = breakpoint;
    }
    if let Some(latency) = store_latency_ms {
        config.store.create_latency_ms = latency;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let mut config = Config::default();
        apply_overrides(&mut config, Some(80), Some(250)).unwrap();

        assert_eq!(config.mobile_breakpoint, 80);
        assert_eq!(config.store.create_latency_ms, 250);
    }

    #[test]
    fn test_zero_breakpoint_is_rejected() {
        let mut config = Config::default();
        let err = apply_overrides(&mut config, Some(0), None).unwrap_err();

        assert!(err.to_string().contains("--breakpoint"));
        assert_eq!(config.mobile_breakpoint, Config::DEFAULT_MOBILE_BREAKPOINT);
    }
}
