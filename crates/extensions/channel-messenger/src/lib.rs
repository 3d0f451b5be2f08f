//! # PageHook Channel - Messenger
//!
//! Messenger Send API client and the `page` webhook dispatcher that echoes
//! inbound text messages back to their sender.

mod client;
mod dispatcher;

pub use client::{send_outcome, MessengerClient, MESSENGER_CHANNEL_ID};
pub use dispatcher::{WebhookDispatcher, ECHO_PREFIX};
