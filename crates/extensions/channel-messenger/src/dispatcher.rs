//! Webhook dispatcher.
//!
//! A payload carrying `hub.mode` is a verification handshake; anything else
//! is treated as an event delivery. Every text message in a delivery is
//! echoed back to its sender through a [`MessageSender`]. A failed send is
//! recorded in the batch result and does not stop the remaining events.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{debug, info, warn};

use pagehook_protocols::{
    ActionResult, MessageSender, MessagingEvent, VerificationRequest, WebhookEvent,
};

use crate::client::send_outcome;

pub const ECHO_PREFIX: &str = "Echo: ";

const INVALID_VERIFY_TOKEN: &str = "Invalid verify token";

/// Routes webhook payloads to verification or echo handling.
pub struct WebhookDispatcher {
    sender: Arc<dyn MessageSender>,
    verify_token: String,
}

impl WebhookDispatcher {
    pub fn new(sender: Arc<dyn MessageSender>, verify_token: impl Into<String>) -> Self {
        Self {
            sender,
            verify_token: verify_token.into(),
        }
    }

    /// Handle any webhook payload.
    pub async fn handle(&self, payload: &Value) -> ActionResult {
        match VerificationRequest::from_value(payload) {
            Some(request) => self.verify(&request),
            None => self.handle_event(payload).await,
        }
    }

    /// Answer the subscription handshake.
    pub fn verify_webhook(&self, mode: &str, token: &str, challenge: &str) -> ActionResult {
        self.verify(&VerificationRequest::new(mode, token, challenge))
    }

    fn verify(&self, request: &VerificationRequest) -> ActionResult {
        if request.is_authorized(&self.verify_token) {
            info!("Webhook verification succeeded");
            ActionResult::success(request.challenge())
        } else {
            warn!("Webhook verification failed for mode {:?}", request.mode);
            ActionResult::failure(INVALID_VERIFY_TOKEN)
        }
    }

    /// Validate an event delivery and echo every text message.
    pub async fn handle_event(&self, payload: &Value) -> ActionResult {
        let event = match WebhookEvent::from_value(payload) {
            Ok(event) => event,
            Err(e) => {
                warn!("Rejected webhook payload: {}", e);
                return ActionResult::failure(e.to_string());
            }
        };

        let mut results = Vec::new();
        let mut failed = 0usize;

        for messaging in event.messaging_events() {
            let Some(result) = self.echo(&messaging).await else {
                continue;
            };
            if !result["success"].as_bool().unwrap_or(false) {
                failed += 1;
            }
            results.push(result);
        }

        info!(
            "Processed {} message(s) from {} entries, {} failed",
            results.len(),
            event.entry.len(),
            failed
        );

        ActionResult::success_with(
            format!("Processed {} message(s)", results.len()),
            json!({
                "results": results,
                "failed": failed,
            }),
        )
    }

    /// Echo a single event. Returns `None` when the event has no text to echo.
    async fn echo(&self, event: &MessagingEvent) -> Option<Value> {
        let (Some(sender_id), Some(text)) = (event.sender_id.as_deref(), event.text()) else {
            debug!("Skipping {} event", event.kind_name());
            return None;
        };

        let reply = format!("{}{}", ECHO_PREFIX, text);
        let outcome = send_outcome(self.sender.send_text(sender_id, &reply).await);
        if !outcome.success {
            warn!("Echo to {} failed: {}", sender_id, outcome.message);
        }

        Some(json!({
            "recipient_id": sender_id,
            "success": outcome.success,
            "message": outcome.message,
            "data": outcome.data,
        }))
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
