//! Application state.

use std::sync::Arc;
use std::time::Instant;

use pagehook_channel_messenger::{MessengerClient, WebhookDispatcher};
use pagehook_config::Config;
use pagehook_protocols::MessageSender;
use pagehook_provider_rerank::RerankClient;
use pagehook_runtime::PluginService;

use crate::error::ApiServerError;

/// Application state shared across handlers. Read-only after construction.
pub struct AppState {
    pub config: Arc<Config>,
    pub dispatcher: WebhookDispatcher,
    pub plugin: PluginService,
    pub rerank: RerankClient,
    start_time: Instant,
}

impl AppState {
    /// Build state that replies through the Messenger Send API.
    pub fn new(config: Config) -> Result<Self, ApiServerError> {
        let sender = Arc::new(MessengerClient::new(&config.messenger)?);
        Self::with_sender(config, sender)
    }

    /// Build state around a custom message sender.
    pub fn with_sender(
        config: Config,
        sender: Arc<dyn MessageSender>,
    ) -> Result<Self, ApiServerError> {
        let dispatcher = WebhookDispatcher::new(sender, config.messenger.verify_token.clone());
        let plugin = PluginService::new(&config.plugin)?;
        let rerank = RerankClient::from_config(&config)?;

        Ok(Self {
            config: Arc::new(config),
            dispatcher,
            plugin,
            rerank,
            start_time: Instant::now(),
        })
    }

    pub fn uptime(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }
}
