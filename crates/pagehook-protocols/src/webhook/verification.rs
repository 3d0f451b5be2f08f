//! Subscription verification handshake.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const HUB_MODE: &str = "hub.mode";
pub const HUB_VERIFY_TOKEN: &str = "hub.verify_token";
pub const HUB_CHALLENGE: &str = "hub.challenge";

/// The only mode the platform uses for endpoint verification.
pub const SUBSCRIBE_MODE: &str = "subscribe";

/// Parameters of a verification request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    #[serde(rename = "hub.mode")]
    pub mode: String,
    #[serde(rename = "hub.verify_token", default)]
    pub verify_token: Option<String>,
    #[serde(rename = "hub.challenge", default)]
    pub challenge: Option<String>,
}

impl VerificationRequest {
    pub fn new(
        mode: impl Into<String>,
        verify_token: impl Into<String>,
        challenge: impl Into<String>,
    ) -> Self {
        Self {
            mode: mode.into(),
            verify_token: Some(verify_token.into()),
            challenge: Some(challenge.into()),
        }
    }

    /// Extract verification parameters from a payload.
    ///
    /// Returns `None` when the payload carries no `hub.mode` key, meaning it
    /// is an event delivery rather than a handshake.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let mode = map.get(HUB_MODE)?;
        Some(Self {
            mode: scalar(mode).unwrap_or_default(),
            verify_token: field(map, HUB_VERIFY_TOKEN),
            challenge: field(map, HUB_CHALLENGE),
        })
    }

    /// Whether `mode` is `subscribe` and the supplied token equals `expected_token`.
    pub fn is_authorized(&self, expected_token: &str) -> bool {
        self.mode == SUBSCRIBE_MODE && self.verify_token.as_deref() == Some(expected_token)
    }

    /// The challenge to echo back, empty if none was supplied.
    pub fn challenge(&self) -> &str {
        self.challenge.as_deref().unwrap_or_default()
    }
}

fn field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(scalar)
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
