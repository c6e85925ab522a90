/*
[INPUT]:  Externally supplied transport settings (base URLs, timeouts, TLS paths)
[OUTPUT]: Immutable configuration consumed at connector construction
[POS]:    Configuration layer - shared transport configuration
[UPDATE]: When adding connection options
*/

use std::path::PathBuf;
use std::time::Duration;

/// PEM material for mutual TLS against the cosigner server.
///
/// The same bundle is applied to the request transport and the streaming
/// transport. Loading the files happens once, at connector construction.
#[derive(Debug, Clone)]
pub struct TlsBundle {
    /// Trust root used to verify the server certificate.
    pub ca_cert: PathBuf,
    /// Client certificate presented to the server.
    pub client_cert: PathBuf,
    /// Private key matching the client certificate.
    pub client_key: PathBuf,
}

/// Transport configuration for the connector.
///
/// Read once at construction; the connector never observes later changes.
/// Loading values from disk or the environment is the caller's concern.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for request/response endpoints.
    pub rs_server_url: String,
    /// Base URL for the streaming endpoint.
    pub ws_server_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub tls: Option<TlsBundle>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rs_server_url: "http://localhost:8080".to_string(),
            ws_server_url: "ws://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            tls: None,
        }
    }
}
