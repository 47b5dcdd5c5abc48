use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Task tracker with a terminal UI, hosted-identity sign-in, and a local
/// profile. Run without a subcommand to open the TUI.
#[derive(Debug, Parser)]
#[command(name = "tp", version, about)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a commented config scaffold and exit
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_opens_the_tui() {
        let cli = Cli::parse_from(["tp"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn init_subcommand_parses() {
        let cli = Cli::parse_from(["tp", "init"]);
        assert!(matches!(cli.command, Some(Commands::Init)));
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::parse_from(["tp", "init", "--config", "/tmp/custom.toml"]);
        assert_eq!(cli.config.as_deref().unwrap().to_str(), Some("/tmp/custom.toml"));
    }
}
