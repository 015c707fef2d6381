//! Command-line interface for the Seeky job board server.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Seeky - a small job board API
#[derive(Parser)]
#[command(name = "seeky")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config.toml (skips the default search path)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP API (default)
    Serve,

    /// Write a default config.toml if none exists
    InitConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["seeky"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["seeky", "serve", "--config", "alt.toml"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Serve));
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    }

    #[test]
    fn test_init_config_subcommand() {
        let cli = Cli::try_parse_from(["seeky", "init-config"]).unwrap();
        assert_eq!(cli.command, Some(Commands::InitConfig));
    }
}
