//! Core error types for Convai RS
//!
//! Query construction failures are local precondition violations and live in
//! [`QueryError`]. Everything that can go wrong while talking to the platform
//! is folded into [`ConvaiError`].

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while building a query document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A field name was blank or whitespace only
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// An operand was set while no predicate was pending
    #[error("Invalid state: cannot call {operation} before calling where")]
    InvalidState { operation: &'static str },
}

impl QueryError {
    pub fn blank_field() -> Self {
        QueryError::InvalidArgument {
            message: "cannot query blank field".to_string(),
        }
    }

    pub fn no_pending(operation: &'static str) -> Self {
        QueryError::InvalidState { operation }
    }
}

/// Top-level error type for all client operations
#[derive(Error, Debug)]
pub enum ConvaiError {
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ConvaiError {
    /// HTTP status associated with the error, if the platform returned one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ConvaiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ConvaiError::Query(QueryError::InvalidArgument { .. }) => "invalid_argument",
            ConvaiError::Query(QueryError::InvalidState { .. }) => "invalid_state",
            ConvaiError::Config(_) => "configuration_error",
            ConvaiError::InvalidUrl(_) => "invalid_url",
            ConvaiError::Transport(_) => "transport_error",
            ConvaiError::Api { .. } => "api_error",
            ConvaiError::Decode(_) => "decode_error",
        }
    }

    /// Whether a caller may reasonably retry the same request
    pub fn is_retryable(&self) -> bool {
        match self {
            ConvaiError::Transport(_) => true,
            ConvaiError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_messages() {
        assert_eq!(
            QueryError::blank_field().to_string(),
            "Invalid argument: cannot query blank field"
        );
        assert_eq!(
            QueryError::no_pending("equals").to_string(),
            "Invalid state: cannot call equals before calling where"
        );
    }

    #[test]
    fn test_error_codes() {
        let err: ConvaiError = QueryError::no_pending("exists").into();
        assert_eq!(err.error_code(), "invalid_state");
        assert_eq!(err.status_code(), None);

        let err = ConvaiError::Api {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.error_code(), "api_error");
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn test_retryable() {
        assert!(ConvaiError::Transport("reset".to_string()).is_retryable());
        assert!(ConvaiError::Api { status: 503, message: String::new() }.is_retryable());
        assert!(ConvaiError::Api { status: 429, message: String::new() }.is_retryable());
        assert!(!ConvaiError::Api { status: 400, message: String::new() }.is_retryable());
        assert!(!ConvaiError::Query(QueryError::blank_field()).is_retryable());
    }
}
