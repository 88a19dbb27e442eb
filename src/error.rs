//! Client error types
//!
//! Every failure the request helper can produce. The `Display` output of
//! each variant is the message shown to the user, so `Api` renders only
//! the server-supplied text.

use thiserror::Error;

/// Fallback message when a failed response carries no `error` field
pub const GENERIC_FAILURE: &str = "Request failed";

/// Errors returned by [`crate::client::ApiClient`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Non-2xx response
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Request never produced a response
    #[error("{0}")]
    Transport(#[from] TransportError),

    /// Response body was not the JSON we expected
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Request body could not be serialized
    #[error("Invalid request: {0}")]
    Encode(String),
}

impl ClientError {
    /// HTTP status for API errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server rejected the API key
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Failures below HTTP: connection, timeout, browser fetch errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Credential store errors
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt credentials file: {0}")]
    Format(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_server_message() {
        let err = ClientError::Api {
            status: 409,
            message: "Wallet already registered".to_string(),
        };
        assert_eq!(err.to_string(), "Wallet already registered");
        assert_eq!(err.status(), Some(409));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_transport_error_message() {
        let err: ClientError = TransportError::Network("connection refused".into()).into();
        assert_eq!(err.to_string(), "Network error: connection refused");
        assert_eq!(err.status(), None);
    }
}
