//! Process and rerank handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use pagehook_protocols::ActionResult;
use pagehook_provider_rerank::RerankResult;

use crate::error::ApiServerError;
use crate::state::AppState;

/// POST /process
///
/// Replies 200 with the result envelope, or 400 when the request is invalid.
pub async fn process(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let result = state.plugin.process_request(&body);
    let status = if result.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(result))
}

/// Rerank request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RerankRequest {
    pub model: String,
    pub query: String,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    pub score_threshold: Option<f64>,
    #[serde(default)]
    pub top_n: Option<usize>,
}

/// POST /rerank
pub async fn rerank(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RerankRequest>,
) -> Result<Json<RerankResult>, ApiServerError> {
    info!(
        "Rerank request: model={}, documents={}",
        request.model,
        request.documents.len()
    );

    let result = state
        .rerank
        .rerank(
            &request.model,
            &request.query,
            &request.documents,
            request.score_threshold,
            request.top_n,
        )
        .await?;

    Ok(Json(result))
}

/// Credential check request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateCredentialsRequest {
    pub model: String,
}

/// POST /rerank/validate
///
/// Runs a fixed query against the rerank service. Rejected credentials
/// reply 401.
pub async fn validate_rerank_credentials(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ValidateCredentialsRequest>,
) -> Result<Json<ActionResult>, ApiServerError> {
    state.rerank.validate_credentials(&request.model).await?;
    info!("Rerank credentials valid for model {}", request.model);
    Ok(Json(ActionResult::success("Credentials valid")))
}
