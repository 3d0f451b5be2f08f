//! Outbound send errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SendError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Send failed: {0}")]
    SendFailed(String),
}

impl SendError {
    /// HTTP status code if the remote answered with an error status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
