//! Rerank errors.

use thiserror::Error;

use pagehook_runtime::ApiError;

#[derive(Debug, Error)]
pub enum RerankError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Server unavailable: HTTP {status}: {body}")]
    ServerUnavailable { status: u16, body: String },

    #[error("Bad response: {0}")]
    BadResponse(String),

    #[error("Credentials validation failed: {0}")]
    CredentialsValidateFailed(String),
}

impl From<ApiError> for RerankError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Status { status, body } => RerankError::ServerUnavailable { status, body },
            ApiError::Decode(msg) => RerankError::BadResponse(msg),
            ApiError::Connection(_) | ApiError::Timeout | ApiError::Client(_) => {
                RerankError::Connection(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_maps_to_server_unavailable() {
        let err: RerankError = ApiError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        }
        .into();
        assert!(matches!(err, RerankError::ServerUnavailable { status: 502, .. }));
        assert!(err.to_string().contains("bad gateway"));
    }

    #[test]
    fn test_timeout_maps_to_connection() {
        let err: RerankError = ApiError::Timeout.into();
        assert!(matches!(err, RerankError::Connection(_)));
    }

    #[test]
    fn test_decode_maps_to_bad_response() {
        let err: RerankError = ApiError::Decode("eof".to_string()).into();
        assert!(matches!(err, RerankError::BadResponse(_)));
    }
}
