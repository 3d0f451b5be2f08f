//! Outbound channel protocol.
//!
//! A [`MessageSender`] delivers a text reply to a platform user. The
//! webhook dispatcher only depends on this trait so tests and alternative
//! transports can stand in for the Messenger Send API.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::SendError;

/// Core trait for outbound message delivery.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Returns the sender ID (e.g., "messenger").
    fn id(&self) -> &str;

    /// Send `text` to `recipient_id`, returning the platform's response body.
    async fn send_text(&self, recipient_id: &str, text: &str) -> Result<Value, SendError>;
}
