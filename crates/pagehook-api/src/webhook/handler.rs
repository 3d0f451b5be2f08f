//! Webhook handlers.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::{debug, info};

use pagehook_protocols::webhook::{HUB_CHALLENGE, HUB_MODE, HUB_VERIFY_TOKEN};
use pagehook_protocols::VerificationRequest;

use crate::state::AppState;

/// Verification handshake.
///
/// GET /webhook?hub.mode=subscribe&hub.verify_token=..&hub.challenge=..
///
/// Replies 200 with the challenge as plain text, 403 otherwise.
pub async fn verify_webhook(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let param = |key: &str| params.get(key).map(String::as_str).unwrap_or_default();

    let result = state.dispatcher.verify_webhook(
        param(HUB_MODE),
        param(HUB_VERIFY_TOKEN),
        param(HUB_CHALLENGE),
    );

    if result.success {
        (StatusCode::OK, result.message).into_response()
    } else {
        (StatusCode::FORBIDDEN, Json(result)).into_response()
    }
}

/// Event delivery.
///
/// POST /webhook
///
/// Replies 200 with the batch result. Payloads that fail validation get
/// 400; handshake payloads with a wrong token get 403.
pub async fn receive_webhook(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Response {
    let is_handshake = VerificationRequest::from_value(&body).is_some();
    debug!("Webhook delivery received (handshake: {})", is_handshake);

    let result = state.dispatcher.handle(&body).await;

    let status = match (result.success, is_handshake) {
        (true, _) => StatusCode::OK,
        (false, true) => StatusCode::FORBIDDEN,
        (false, false) => StatusCode::BAD_REQUEST,
    };
    info!("Webhook handled: {} ({})", status, result.message);

    (status, Json(result)).into_response()
}
