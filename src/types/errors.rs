//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.
//!
//! Execution outcomes (a tool exiting non-zero, a tool hitting its deadline)
//! are deliberately *not* errors — they are recorded as
//! [`ExecutionResult`](crate::exec::ExecutionResult) values so a batch survey
//! can continue past any single tool's failure.

use axum::http::StatusCode;
use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the toolgate service.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or incomplete descriptor source (fatal at load time,
    /// never partially loaded).
    #[error("schema error: {0}")]
    Schema(String),

    /// Requested tool name absent from the registry (maps to HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed request input (maps to HTTP 400).
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal errors (map to HTTP 500).
    #[error("internal error: {0}")]
    Internal(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Convert to an HTTP status code for the gateway boundary.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Schema(_)
            | Error::Internal(_)
            | Error::Serialization(_)
            | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing detail message, without the variant prefix.
    pub fn detail(&self) -> String {
        match self {
            Error::Schema(msg)
            | Error::NotFound(msg)
            | Error::Validation(msg)
            | Error::Internal(msg) => msg.clone(),
            Error::Serialization(e) => e.to_string(),
            Error::Io(e) => e.to_string(),
        }
    }
}

// Convenience constructors
impl Error {
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = Error::schema("root must be a JSON object");
        assert_eq!(err.to_string(), "schema error: root must be a JSON object");

        let err = Error::not_found("Tool 'dslist' not found");
        assert_eq!(err.to_string(), "not found: Tool 'dslist' not found");
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            Error::not_found("x").http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::validation("x").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::schema("x").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::internal("x").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_detail_strips_variant_prefix() {
        let err = Error::not_found("Tool 'xtrace' not found");
        assert_eq!(err.detail(), "Tool 'xtrace' not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
