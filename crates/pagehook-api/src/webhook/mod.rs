//! Messenger webhook endpoints.

mod handler;

pub use handler::{receive_webhook, verify_webhook};
