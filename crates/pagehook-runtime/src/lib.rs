//! # PageHook Runtime
//!
//! Outbound call plumbing shared by the webhook and process entry points:
//! a configurable [`RetryPolicy`], the bearer-authenticated [`ApiClient`]
//! and the [`PluginService`] behind `process`.

pub mod api_client;
pub mod retry;
pub mod service;

pub use api_client::{ApiClient, ApiError};
pub use retry::{Backoff, RetryPolicy};
pub use service::{process, PluginService, ProcessRequest};
