//! # PageHook Provider - Rerank
//!
//! Client for Jina-compatible `/rerank` endpoints.

mod error;
mod models;
mod provider;

pub use error::RerankError;
pub use models::{RerankDocument, RerankResult};
pub use provider::{RerankClient, DEFAULT_RERANK_BASE_URL};
