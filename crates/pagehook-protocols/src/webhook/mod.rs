//! Messenger webhook payload types.
//!
//! Payloads arrive as loosely typed JSON. [`validate_webhook_event`] turns the
//! envelope into a typed [`WebhookEvent`]; the per-event mappings inside each
//! [`Entry`] stay raw and are classified on demand into [`MessagingEvent`]s.

mod event;
mod messaging;
mod validate;
mod verification;

pub use event::{Entry, WebhookEvent, PAGE_OBJECT};
pub use messaging::{MessagingEvent, MessagingEventKind};
pub use validate::validate_webhook_event;
pub use verification::{
    VerificationRequest, HUB_CHALLENGE, HUB_MODE, HUB_VERIFY_TOKEN, SUBSCRIBE_MODE,
};
