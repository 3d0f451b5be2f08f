//! CLI definitions for PageHook.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// PageHook CLI.
#[derive(Parser)]
#[command(name = "pagehook")]
#[command(about = "Messenger page webhook echo service")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the HTTP server in foreground (default)
    Run {
        /// Server host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run the process entry point on a JSON request file
    Process {
        /// Path to the request JSON
        file: PathBuf,
    },

    /// Dispatch a webhook payload from a JSON file
    Dispatch {
        /// Path to the webhook payload JSON
        file: PathBuf,
    },

    /// Validate the configuration file and exit
    CheckConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command() {
        let cli = Cli::try_parse_from(["pagehook"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("config/default.toml"));
    }

    #[test]
    fn test_run_overrides() {
        let cli = Cli::try_parse_from(["pagehook", "run", "--port", "9000"]).unwrap();
        match cli.command {
            Some(Commands::Run { host, port }) => {
                assert!(host.is_none());
                assert_eq!(port, Some(9000));
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli =
            Cli::try_parse_from(["pagehook", "dispatch", "event.json", "-c", "custom.toml"])
                .unwrap();
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert!(matches!(cli.command, Some(Commands::Dispatch { .. })));
    }

    #[test]
    fn test_check_config_command() {
        let cli = Cli::try_parse_from(["pagehook", "check-config"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::CheckConfig)));
    }
}
