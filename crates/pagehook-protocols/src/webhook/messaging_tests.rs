use super::*;
use serde_json::json;

fn map(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_text_message() {
    let event = MessagingEvent::from_map(&map(json!({
        "sender": {"id": "user123"},
        "recipient": {"id": "page123"},
        "timestamp": 1458692752478i64,
        "message": {"mid": "m-1", "text": "hello"}
    })));

    assert_eq!(event.sender_id.as_deref(), Some("user123"));
    assert_eq!(event.recipient_id.as_deref(), Some("page123"));
    assert_eq!(event.timestamp, Some(1458692752478));
    assert_eq!(event.text(), Some("hello"));
    assert_eq!(event.kind_name(), "text");
}

#[test]
fn test_empty_text_is_not_text() {
    let event = MessagingEvent::from_map(&map(json!({
        "sender": {"id": "u"},
        "message": {"text": ""}
    })));
    assert!(matches!(event.kind, MessagingEventKind::Text { .. }));
    assert!(event.text().is_none());
}

#[test]
fn test_attachment_message() {
    let event = MessagingEvent::from_map(&map(json!({
        "sender": {"id": "u"},
        "message": {"mid": "m-2", "attachments": [{"type": "image"}]}
    })));
    match event.kind {
        MessagingEventKind::Attachment { mid, attachments } => {
            assert_eq!(mid.as_deref(), Some("m-2"));
            assert_eq!(attachments.len(), 1);
        }
        other => panic!("unexpected kind: {:?}", other),
    }
}

#[test]
fn test_postback() {
    let event = MessagingEvent::from_map(&map(json!({
        "sender": {"id": "u"},
        "postback": {"title": "Get Started", "payload": "GET_STARTED"}
    })));
    assert_eq!(
        event.kind,
        MessagingEventKind::Postback {
            title: Some("Get Started".to_string()),
            payload: Some("GET_STARTED".to_string()),
        }
    );
    assert!(event.text().is_none());
}

#[test]
fn test_read_and_delivery_receipts() {
    let read = MessagingEvent::from_map(&map(json!({"read": {"watermark": 42}})));
    assert_eq!(read.kind, MessagingEventKind::Read { watermark: Some(42) });

    let delivery = MessagingEvent::from_map(&map(json!({"delivery": {"watermark": 7}})));
    assert_eq!(delivery.kind_name(), "delivery");
}

#[test]
fn test_unknown_shape_is_unsupported() {
    let event = MessagingEvent::from_map(&map(json!({"reaction": {"emoji": "+1"}})));
    assert_eq!(event.kind, MessagingEventKind::Unsupported);
    assert!(event.sender_id.is_none());
}

#[test]
fn test_numeric_sender_id() {
    let event = MessagingEvent::from_map(&map(json!({
        "sender": {"id": 12345},
        "message": {"text": "x"}
    })));
    assert_eq!(event.sender_id.as_deref(), Some("12345"));
}
