//! Payload validation errors.

use thiserror::Error;

/// Structural validation failure for an inbound payload.
///
/// Every variant names the offending field by its JSON path
/// (`$` for the payload root, `entry[0].time` for nested fields).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid type for {field}: expected {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Unexpected object type: expected \"{expected}\", got \"{actual}\"")]
    UnexpectedObject { expected: String, actual: String },
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn invalid_type(field: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected,
        }
    }

    /// Path of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField(field) => field,
            Self::InvalidType { field, .. } => field,
            Self::InvalidValue { field, .. } => field,
            Self::UnexpectedObject { .. } => "object",
        }
    }
}
