//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub messenger: MessengerConfig,

    #[serde(default)]
    pub plugin: PluginConfig,

    #[serde(default)]
    pub rerank: RerankConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Messenger platform configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessengerConfig {
    /// Page access token used as the `access_token` query credential.
    #[serde(default)]
    pub page_access_token: String,

    /// Token the platform must present during the verification handshake.
    #[serde(default)]
    pub verify_token: String,

    /// Graph API version segment.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Graph API host.
    #[serde(default = "default_graph_base_url")]
    pub graph_base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Total send attempts per message. 1 means no retry.
    #[serde(default = "default_send_attempts")]
    pub max_attempts: u32,

    #[serde(default)]
    pub retry: RetrySettings,
}

impl Default for MessengerConfig {
    fn default() -> Self {
        Self {
            page_access_token: String::new(),
            verify_token: String::new(),
            api_version: default_api_version(),
            graph_base_url: default_graph_base_url(),
            timeout_seconds: default_timeout(),
            max_attempts: default_send_attempts(),
            retry: RetrySettings::default(),
        }
    }
}

fn default_api_version() -> String {
    "v18.0".to_string()
}

fn default_graph_base_url() -> String {
    "https://graph.facebook.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_send_attempts() -> u32 {
    1
}

/// Generic API client configuration (the `process` entry point family).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Bearer credential for outbound API calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Total attempts per API call.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    #[serde(default)]
    pub retry: RetrySettings,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            max_retries: default_max_retries(),
            timeout_seconds: default_timeout(),
            retry: RetrySettings::default(),
        }
    }
}

fn default_max_retries() -> u32 {
    3
}

/// Delay strategy between attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackoffKind {
    /// Retry immediately.
    #[default]
    None,
    /// Constant delay of `base_delay_ms`.
    Fixed,
    /// `base_delay_ms * attempt`.
    Linear,
    /// `base_delay_ms * 2^(attempt - 1)`, capped at `max_delay_ms`.
    Exponential,
}

/// Backoff settings shared by every retrying client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrySettings {
    #[serde(default)]
    pub backoff: BackoffKind,

    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    #[serde(default)]
    pub jitter: bool,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            backoff: BackoffKind::None,
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            jitter: false,
        }
    }
}

fn default_base_delay_ms() -> u64 {
    500
}

fn default_max_delay_ms() -> u64 {
    30_000
}

/// Rerank model endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RerankConfig {
    #[serde(default = "default_rerank_base_url")]
    pub base_url: String,

    /// Overrides `plugin.api_key` for rerank calls when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for RerankConfig {
    fn default() -> Self {
        Self {
            base_url: default_rerank_base_url(),
            api_key: None,
        }
    }
}

fn default_rerank_base_url() -> String {
    "https://api.jina.ai/v1".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for rolling log files.
    #[serde(default = "default_log_dir")]
    pub dir: String,

    /// Write log files in addition to the console.
    #[serde(default = "default_true")]
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: default_log_dir(),
            file: true,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "~/.pagehook/logs".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
