//! PageHook - Messenger page webhook echo service
//!
//! Main entry point for the PageHook CLI and server.

mod cli;
mod commands;
mod server;

use clap::Parser;

use pagehook_config::{ConfigLoader, ConfigValidator};

use crate::cli::{Cli, Commands};
use crate::server::{init_tracing, run_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(&cli.config)?;
    init_tracing(&config.logging)?;

    if let Some(Commands::CheckConfig) = cli.command {
        return commands::check_config(&config);
    }

    let validation = ConfigValidator::ensure_valid(&config)?;
    for warning in &validation.warnings {
        tracing::warn!("Config {}: {}", warning.path, warning.message);
    }

    match cli.command {
        None => run_server(config, None, None).await,
        Some(Commands::Run { host, port }) => run_server(config, host, port).await,
        Some(Commands::Process { file }) => commands::process_file(&config, &file),
        Some(Commands::Dispatch { file }) => commands::dispatch_file(&config, &file).await,
        Some(Commands::CheckConfig) => Ok(()),
    }
}
