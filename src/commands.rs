//! One-shot commands that run an entry point on a JSON file.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use pagehook_channel_messenger::{MessengerClient, WebhookDispatcher};
use pagehook_config::{Config, ConfigValidator};
use pagehook_protocols::ActionResult;

pub(crate) fn read_json(path: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let value = serde_json::from_str(&content)
        .map_err(|e| format!("Invalid JSON in {}: {}", path.display(), e))?;
    Ok(value)
}

fn print_result(result: &ActionResult) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

pub(crate) fn process_file(config: &Config, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let request = read_json(path)?;
    let result = pagehook_runtime::process(&config.plugin, &request);
    print_result(&result)
}

pub(crate) async fn dispatch_file(
    config: &Config,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let payload = read_json(path)?;
    let sender = Arc::new(MessengerClient::new(&config.messenger)?);
    let dispatcher = WebhookDispatcher::new(sender, config.messenger.verify_token.clone());

    let result = dispatcher.handle(&payload).await;
    print_result(&result)
}

pub(crate) fn check_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let result = ConfigValidator::ensure_valid(config)?;
    for warning in &result.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }
    info!("Configuration is valid");
    println!("Configuration OK");
    Ok(())
}
