//! Error types for the Lab Nocturne client.
//!
//! Every failure surfaced by the client is a variant of `LnError`. JSON
//! endpoints and the upload/key endpoints fail with different variants
//! (`Api` and `Http`); the two are kept apart rather than unified.

use thiserror::Error;

/// Convenience type alias for Results using LnError.
pub type LnResult<T> = Result<T, LnError>;

/// Message used when a failed response carries no `error.message`.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Unified error type for the Lab Nocturne client.
#[derive(Error, Debug)]
pub enum LnError {
    // -- Remote errors --
    /// A JSON endpoint returned a non-success status. `message` is the
    /// server's `error.message`, or "Unknown error".
    #[error("API Error: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body.
        message: String,
    },

    /// The upload or key endpoint returned a non-success status.
    #[error("HTTP error {status}: {reason}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status.
        reason: String,
    },

    // -- Transport / IO --
    /// Connection, socket or protocol fault from the HTTP transport.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A success response body was not the JSON we expected.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Configuration --
    /// Failed to load or parse configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- Lifecycle --
    /// The client was closed before this call.
    #[error("client is closed")]
    Closed,
}

impl LnError {
    /// Build an `Http` error from a status code.
    pub fn http(status: reqwest::StatusCode) -> Self {
        LnError::Http {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    /// HTTP status carried by `Api` and `Http` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            LnError::Api { status, .. } | LnError::Http { status, .. } => Some(*status),
            LnError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The server-provided message of an `Api` error.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            LnError::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Whether the transport gave up waiting for the server.
    pub fn is_timeout(&self) -> bool {
        matches!(self, LnError::Transport(e) if e.is_timeout())
    }

    /// Whether the transport failed to connect.
    pub fn is_connect(&self) -> bool {
        matches!(self, LnError::Transport(e) if e.is_connect())
    }
}

impl From<serde_json::Error> for LnError {
    fn from(e: serde_json::Error) -> Self {
        LnError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for LnError {
    fn from(e: toml::de::Error) -> Self {
        LnError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = LnError::Api {
            status: 404,
            message: "File not found".into(),
        };
        assert_eq!(err.to_string(), "API Error: File not found");
        assert_eq!(err.api_message(), Some("File not found"));
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_http_error_from_status() {
        let err = LnError::http(reqwest::StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.status(), Some(413));
        assert_eq!(err.to_string(), "HTTP error 413: Payload Too Large");
        assert!(err.api_message().is_none());
    }

    #[test]
    fn test_io_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = LnError::from(io);
        assert_eq!(err.to_string(), "no such file");
        assert!(matches!(err, LnError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[test]
    fn test_config_error_display() {
        let err = LnError::Config("bad value".to_string());
        assert_eq!(err.to_string(), "configuration error: bad value");
        assert!(!err.is_timeout());
    }
}
