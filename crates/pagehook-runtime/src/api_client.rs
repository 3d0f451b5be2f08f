//! Bearer-authenticated JSON API client with retry.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use pagehook_config::PluginConfig;

use crate::retry::RetryPolicy;

/// Errors from a single API call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Client error: {0}")]
    Client(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Connection(e.to_string())
        }
    }
}

/// JSON-over-HTTP client that retries every failed POST according to its
/// [`RetryPolicy`].
pub struct ApiClient {
    client: Client,
    api_key: Option<String>,
    policy: RetryPolicy,
}

impl ApiClient {
    pub fn new(api_key: Option<String>, policy: RetryPolicy) -> Self {
        Self {
            client: Client::new(),
            api_key,
            policy,
        }
    }

    /// Build a client from the `[plugin]` configuration section.
    pub fn from_config(config: &PluginConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            policy: RetryPolicy::from_settings(config.max_retries, &config.retry),
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

    /// POST `body` to `endpoint` and return the parsed JSON response.
    ///
    /// Non-2xx statuses count as failures. After the last attempt the error
    /// from that attempt is returned.
    pub async fn post_json(&self, endpoint: &str, body: &Value) -> Result<Value, ApiError> {
        self.policy
            .run("API request", |attempt| {
                debug!("POST {} (attempt {})", endpoint, attempt);
                self.post_once(endpoint, body)
            })
            .await
    }

    async fn post_once(&self, endpoint: &str, body: &Value) -> Result<Value, ApiError> {
        let mut request = self
            .client
            .post(endpoint)
            .header("Content-Type", "application/json");

        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
#[path = "api_client_tests.rs"]
mod tests;
