/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for cosigner-adapter tests

use cosigner_adapter::ClientConfig;
use wiremock::{MockServer, ResponseTemplate};

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client configuration pointed at a mock server
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        rs_server_url: server.uri(),
        ..ClientConfig::default()
    }
}

/// Envelope body carrying a successful result
pub fn ok_envelope(result: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "result": result,
        "error": "",
    }))
}

/// Envelope body carrying a remote failure
pub fn err_envelope(error: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "result": "",
        "error": error,
    }))
}
