//! # PageHook Protocols
//!
//! Core protocol definitions for the PageHook webhook service.
//! Contains only types, validation and interface definitions - no I/O.
//!
//! ## Core Types
//!
//! - [`WebhookEvent`] - Validated `page` webhook delivery
//! - [`MessagingEvent`] - One messaging event, classified by [`MessagingEventKind`]
//! - [`VerificationRequest`] - Subscription handshake parameters
//! - [`ActionResult`] - The `{success, message, data}` envelope returned by entry points
//! - [`MessageSender`] - Trait for outbound message delivery

pub mod channel;
pub mod error;
pub mod result;
pub mod webhook;

pub use channel::MessageSender;
pub use error::{SendError, ValidationError};
pub use result::ActionResult;
pub use webhook::{
    validate_webhook_event, Entry, MessagingEvent, MessagingEventKind, VerificationRequest,
    WebhookEvent, PAGE_OBJECT,
};
