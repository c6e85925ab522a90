/*
[INPUT]:  Error sources (HTTP transport, envelope, framing, WebSocket, TLS)
[OUTPUT]: Structured error types for the entire crate
[POS]:    Error handling layer - unified error types
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the cosigner adapter.
#[derive(Error, Debug)]
pub enum CosignerError {
    /// Connection, TLS handshake or other transport-level failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server's envelope carried a non-empty error field.
    #[error("remote call failed: {message}")]
    Remote { message: String },

    /// Response body was not a well-formed envelope or typed result.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The streaming peer violated the frame protocol. Fatal to the session.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// WebSocket connect or send failure.
    #[error("websocket error: {0}")]
    WebSocket(String),

    /// Serialization of outgoing parameters failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed.
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Reading TLS material from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TLS material was present but unusable.
    #[error("TLS configuration error: {0}")]
    Tls(String),
}

impl CosignerError {
    /// True when the server itself rejected the call.
    pub fn is_remote(&self) -> bool {
        matches!(self, CosignerError::Remote { .. })
    }

    /// True when the failure happened below the application protocol.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            CosignerError::Transport(_) | CosignerError::WebSocket(_)
        )
    }

    /// Create a remote failure carrying the server-provided message verbatim.
    pub fn remote(message: impl Into<String>) -> Self {
        CosignerError::Remote {
            message: message.into(),
        }
    }
}

/// Result type alias for cosigner operations.
pub type Result<T> = std::result::Result<T, CosignerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_predicate() {
        let err = CosignerError::remote("insufficient funds");
        assert!(err.is_remote());
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "remote call failed: insufficient funds");
    }

    #[test]
    fn test_transport_predicate() {
        let err = CosignerError::WebSocket("connection reset".to_string());
        assert!(err.is_transport());
        assert!(!err.is_remote());
    }

    #[test]
    fn test_protocol_is_neither() {
        let err = CosignerError::Protocol("bad frame length".to_string());
        assert!(!err.is_remote());
        assert!(!err.is_transport());
    }
}
