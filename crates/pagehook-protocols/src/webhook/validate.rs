//! Structural validation of webhook payloads.

use serde_json::{Map, Value};

use super::event::{Entry, WebhookEvent};
use crate::error::ValidationError;

/// Validate a raw payload and build a [`WebhookEvent`].
///
/// Fails on the first structurally invalid field, walking the payload in
/// document order. The `object` discriminator is compared against
/// `expected_object` only after the shape checks pass. Messaging events are
/// only required to be mappings.
pub fn validate_webhook_event(
    value: &Value,
    expected_object: &str,
) -> Result<WebhookEvent, ValidationError> {
    let root = value
        .as_object()
        .ok_or_else(|| ValidationError::invalid_type("$", "object"))?;

    let object = required(root, "object", "object")?
        .as_str()
        .ok_or_else(|| ValidationError::invalid_type("object", "string"))?;

    let raw_entries = required(root, "entry", "entry")?
        .as_array()
        .ok_or_else(|| ValidationError::invalid_type("entry", "array"))?;

    let entry = raw_entries
        .iter()
        .enumerate()
        .map(|(index, raw)| validate_entry(raw, &format!("entry[{}]", index)))
        .collect::<Result<Vec<_>, _>>()?;

    if object != expected_object {
        return Err(ValidationError::UnexpectedObject {
            expected: expected_object.to_string(),
            actual: object.to_string(),
        });
    }

    Ok(WebhookEvent {
        object: object.to_string(),
        entry,
    })
}

fn required<'a>(
    map: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a Value, ValidationError> {
    map.get(key).ok_or_else(|| ValidationError::missing(path))
}

fn validate_entry(raw: &Value, path: &str) -> Result<Entry, ValidationError> {
    let map = raw
        .as_object()
        .ok_or_else(|| ValidationError::invalid_type(path, "object"))?;

    let id_path = format!("{}.id", path);
    let id = required(map, "id", &id_path)?
        .as_str()
        .ok_or_else(|| ValidationError::invalid_type(&id_path, "string"))?;

    let time_path = format!("{}.time", path);
    let time = required(map, "time", &time_path)?
        .as_i64()
        .ok_or_else(|| ValidationError::invalid_type(&time_path, "integer"))?;

    let messaging_path = format!("{}.messaging", path);
    let messaging = required(map, "messaging", &messaging_path)?
        .as_array()
        .ok_or_else(|| ValidationError::invalid_type(&messaging_path, "array"))?
        .iter()
        .enumerate()
        .map(|(index, event)| {
            event.as_object().cloned().ok_or_else(|| {
                ValidationError::invalid_type(format!("{}[{}]", messaging_path, index), "object")
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Entry {
        id: id.to_string(),
        time,
        messaging,
    })
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
