//! Messenger Send API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use pagehook_config::MessengerConfig;
use pagehook_protocols::{ActionResult, MessageSender, SendError};
use pagehook_runtime::RetryPolicy;

pub const MESSENGER_CHANNEL_ID: &str = "messenger";

/// Client for `POST /{api_version}/me/messages`.
pub struct MessengerClient {
    client: Client,
    page_access_token: String,
    messages_url: String,
    policy: RetryPolicy,
}

impl MessengerClient {
    /// Build a client from the `[messenger]` configuration section.
    ///
    /// The retry policy comes from `max_attempts` and `retry`; with the
    /// defaults every message is sent exactly once.
    pub fn new(config: &MessengerConfig) -> Result<Self, SendError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| SendError::SendFailed(e.to_string()))?;

        Ok(Self {
            client,
            page_access_token: config.page_access_token.clone(),
            messages_url: format!(
                "{}/{}/me/messages",
                config.graph_base_url.trim_end_matches('/'),
                config.api_version
            ),
            policy: RetryPolicy::from_settings(config.max_attempts, &config.retry),
        })
    }

    /// Replace the retry policy.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn messages_url(&self) -> &str {
        &self.messages_url
    }

    /// Send `text` to `recipient_id` and wrap the outcome in an [`ActionResult`].
    pub async fn send_message(&self, recipient_id: &str, text: &str) -> ActionResult {
        send_outcome(self.send_text(recipient_id, text).await)
    }

    async fn post_message(&self, recipient_id: &str, text: &str) -> Result<Value, SendError> {
        let body = json!({
            "recipient": { "id": recipient_id },
            "message": { "text": text },
        });

        // reqwest errors carry the request URL, which holds the access token.
        let response = self
            .client
            .post(&self.messages_url)
            .query(&[("access_token", self.page_access_token.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| SendError::ConnectionFailed(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SendError::Http {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Message delivered to {}", recipient_id);

        response
            .json::<Value>()
            .await
            .map_err(|e| SendError::InvalidResponse(e.without_url().to_string()))
    }
}

#[async_trait]
impl MessageSender for MessengerClient {
    fn id(&self) -> &str {
        MESSENGER_CHANNEL_ID
    }

    async fn send_text(&self, recipient_id: &str, text: &str) -> Result<Value, SendError> {
        self.policy
            .run_if("Send message", is_retryable, |_| {
                self.post_message(recipient_id, text)
            })
            .await
    }
}

/// Client errors (4xx) will fail the same way again.
fn is_retryable(error: &SendError) -> bool {
    !matches!(error.status(), Some(400..=499))
}

/// Convert a send outcome into the result envelope.
pub fn send_outcome(result: Result<Value, SendError>) -> ActionResult {
    match result {
        Ok(body) => ActionResult::success_with("Message sent successfully", body),
        Err(e) => ActionResult::failure(format!("Error sending message: {}", e)),
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
