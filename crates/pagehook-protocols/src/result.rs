//! Result envelope returned by every public entry point.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outcome of an entry point call.
///
/// Entry points never return errors past their boundary; failures are
/// reported with `success == false` and a human-readable `message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    /// Whether the call succeeded.
    pub success: bool,

    /// Human-readable message (or the verification challenge).
    pub message: String,

    /// Structured payload, `{}` when there is nothing to report.
    #[serde(default = "empty_data")]
    pub data: Value,
}

fn empty_data() -> Value {
    Value::Object(Map::new())
}

impl ActionResult {
    /// Create a successful result with empty data.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: empty_data(),
        }
    }

    /// Create a successful result carrying data.
    pub fn success_with(message: impl Into<String>, data: Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }

    /// Create a failed result with empty data.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: empty_data(),
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
