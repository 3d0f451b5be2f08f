//! Webhook envelope types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::messaging::MessagingEvent;
use super::validate::validate_webhook_event;
use crate::error::ValidationError;

/// The `object` discriminator Messenger sends for page subscriptions.
pub const PAGE_OBJECT: &str = "page";

/// A validated webhook delivery.
///
/// Deserializing goes through [`validate_webhook_event`], so a `WebhookEvent`
/// only exists for payloads that pass validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct WebhookEvent {
    /// Subscription object type, always [`PAGE_OBJECT`] once validated.
    pub object: String,
    /// Entries in delivery order. May be empty.
    pub entry: Vec<Entry>,
}

impl WebhookEvent {
    /// Validate a raw payload against the `page` object type.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        validate_webhook_event(value, PAGE_OBJECT)
    }

    /// Iterate every messaging event across all entries, in delivery order.
    pub fn messaging_events(&self) -> impl Iterator<Item = MessagingEvent> + '_ {
        self.entry.iter().flat_map(Entry::events)
    }
}

impl TryFrom<Value> for WebhookEvent {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        validate_webhook_event(&value, PAGE_OBJECT)
    }
}

/// A batch of messaging events delivered together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// Page ID.
    pub id: String,
    /// Delivery time in epoch milliseconds.
    pub time: i64,
    /// Raw messaging events. Shapes vary by message kind.
    pub messaging: Vec<Map<String, Value>>,
}

impl Entry {
    /// Classify the raw messaging events, preserving order.
    pub fn events(&self) -> impl Iterator<Item = MessagingEvent> + '_ {
        self.messaging.iter().map(MessagingEvent::from_map)
    }
}
