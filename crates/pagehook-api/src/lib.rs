//! # PageHook API
//!
//! HTTP surface for the webhook service.
//!
//! - **Webhook**: `GET /webhook` verification handshake, `POST /webhook` event delivery
//! - **Process**: `POST /process` text processing entry point
//! - **Rerank**: `POST /rerank` document reranking
//! - **Health**: `GET /health`

pub mod error;
pub mod http;
pub mod server;
pub mod state;
pub mod webhook;

pub use error::ApiServerError;
pub use http::routes::create_router;
pub use server::ApiServer;
pub use state::AppState;
