//! Messaging event classification.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What a messaging event carries.
///
/// The platform reuses one loosely typed mapping for every event kind; the
/// kind is decided once here so callers can match exhaustively instead of
/// probing keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MessagingEventKind {
    /// A message with a `text` field. The text may be empty.
    Text { mid: Option<String>, text: String },
    /// A message carrying attachments and no text.
    Attachment {
        mid: Option<String>,
        attachments: Vec<Value>,
    },
    /// A button or menu postback.
    Postback {
        title: Option<String>,
        payload: Option<String>,
    },
    /// Read receipt.
    Read { watermark: Option<i64> },
    /// Delivery receipt.
    Delivery { watermark: Option<i64> },
    /// Anything else (reactions, referrals, optins, ...).
    Unsupported,
}

/// A single messaging event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagingEvent {
    pub sender_id: Option<String>,
    pub recipient_id: Option<String>,
    pub timestamp: Option<i64>,
    pub kind: MessagingEventKind,
}

impl MessagingEvent {
    /// Classify a raw messaging mapping. Never fails; unknown shapes become
    /// [`MessagingEventKind::Unsupported`].
    pub fn from_map(raw: &Map<String, Value>) -> Self {
        Self {
            sender_id: nested_id(raw, "sender"),
            recipient_id: nested_id(raw, "recipient"),
            timestamp: raw.get("timestamp").and_then(Value::as_i64),
            kind: classify(raw),
        }
    }

    /// Non-empty message text, if this is a text message.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            MessagingEventKind::Text { text, .. } if !text.is_empty() => Some(text.as_str()),
            _ => None,
        }
    }

    /// Short label for logging.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            MessagingEventKind::Text { .. } => "text",
            MessagingEventKind::Attachment { .. } => "attachment",
            MessagingEventKind::Postback { .. } => "postback",
            MessagingEventKind::Read { .. } => "read",
            MessagingEventKind::Delivery { .. } => "delivery",
            MessagingEventKind::Unsupported => "unsupported",
        }
    }
}

fn nested_id(raw: &Map<String, Value>, key: &str) -> Option<String> {
    raw.get(key)
        .and_then(|v| v.get("id"))
        .and_then(scalar_to_string)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn optional_str(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn classify(raw: &Map<String, Value>) -> MessagingEventKind {
    if let Some(message) = raw.get("message").filter(|m| m.is_object()) {
        let mid = optional_str(message, "mid");
        if let Some(text) = message.get("text").and_then(Value::as_str) {
            return MessagingEventKind::Text {
                mid,
                text: text.to_string(),
            };
        }
        if let Some(attachments) = message.get("attachments").and_then(Value::as_array) {
            return MessagingEventKind::Attachment {
                mid,
                attachments: attachments.clone(),
            };
        }
        return MessagingEventKind::Unsupported;
    }

    if let Some(postback) = raw.get("postback") {
        return MessagingEventKind::Postback {
            title: optional_str(postback, "title"),
            payload: optional_str(postback, "payload"),
        };
    }

    if let Some(read) = raw.get("read") {
        return MessagingEventKind::Read {
            watermark: read.get("watermark").and_then(Value::as_i64),
        };
    }

    if let Some(delivery) = raw.get("delivery") {
        return MessagingEventKind::Delivery {
            watermark: delivery.get("watermark").and_then(Value::as_i64),
        };
    }

    MessagingEventKind::Unsupported
}

#[cfg(test)]
#[path = "messaging_tests.rs"]
mod tests;
