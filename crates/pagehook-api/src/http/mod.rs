//! HTTP interface module.
//!
//! Provides REST endpoints for:
//! - The `process` entry point
//! - Document reranking
//! - Health checks

pub mod handlers;
pub mod routes;

pub(crate) mod monitoring;
