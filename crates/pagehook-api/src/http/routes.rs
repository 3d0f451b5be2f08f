//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::http::{handlers, monitoring};
use crate::state::AppState;
use crate::webhook::{receive_webhook, verify_webhook};

/// Create the main router.
///
/// ```text
/// GET    /webhook  - Verification handshake (hub.* query parameters)
/// POST   /webhook  - Event delivery
/// POST   /process  - Process entry point
/// POST   /rerank   - Rerank documents
/// POST   /rerank/validate - Check rerank credentials
/// GET    /health   - Health check
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/webhook", get(verify_webhook).post(receive_webhook))
        .route("/process", post(handlers::process))
        .route("/rerank", post(handlers::rerank))
        .route("/rerank/validate", post(handlers::validate_rerank_credentials))
        .route("/health", get(monitoring::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
