//! API server error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use pagehook_protocols::{ActionResult, SendError};
use pagehook_provider_rerank::RerankError;
use pagehook_runtime::ApiError;

#[derive(Debug, Error)]
pub enum ApiServerError {
    /// Invalid listen address.
    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] std::net::AddrParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Messenger client construction failed.
    #[error("Messenger error: {0}")]
    Messenger(#[from] SendError),

    /// Generic API client construction failed.
    #[error("API client error: {0}")]
    Client(#[from] ApiError),

    #[error(transparent)]
    Rerank(#[from] RerankError),
}

impl ApiServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Rerank(RerankError::CredentialsValidateFailed(_)) => StatusCode::UNAUTHORIZED,
            Self::Rerank(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiServerError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ActionResult::failure(self.to_string())),
        )
            .into_response()
    }
}
