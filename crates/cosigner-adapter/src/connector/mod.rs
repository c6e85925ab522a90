/*
[INPUT]:  ClientConfig (base URLs, optional TLS bundle)
[OUTPUT]: One method per cosigner operation plus monitor session lifecycle
[POS]:    Orchestration layer - composes request client and monitor sessions
[UPDATE]: When adding remote operations or changing transport composition
*/

pub mod transaction;
pub mod wallet;

use std::sync::Arc;

use rustls::ClientConfig as RustlsClientConfig;
use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::http::CosignerClient;
use crate::http::error::Result;
use crate::tls;
use crate::types::CurrencyParameters;
use crate::ws::MonitorSession;

const MONITOR_ENDPOINT: &str = "/ws/MonitorBalance";

/// Entry point for talking to a cosigner server.
///
/// Construction resolves the optional TLS bundle once and applies the same
/// material to the request transport and every monitor stream. The
/// configuration is immutable for the connector's lifetime.
#[derive(Debug, Clone)]
pub struct CurrencyConnector {
    config: ClientConfig,
    client: CosignerClient,
    stream_tls: Option<Arc<RustlsClientConfig>>,
}

impl CurrencyConnector {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let material = config.tls.as_ref().map(tls::load).transpose()?;
        let client = CosignerClient::with_tls(config, material.as_ref())?;
        Ok(Self {
            config: config.clone(),
            client,
            stream_tls: material.map(|m| m.stream_config),
        })
    }

    /// Canonical serialized form of a parameter payload.
    pub fn stringify_params(params: &CurrencyParameters) -> Result<String> {
        Ok(serde_json::to_string(params)?)
    }

    /// Parse a serialized parameter payload.
    pub fn parameterize_string(raw: &str) -> Result<CurrencyParameters> {
        Ok(serde_json::from_str(raw)?)
    }

    pub(crate) async fn post_params(
        &self,
        endpoint: &str,
        params: &CurrencyParameters,
    ) -> Result<String> {
        let body = Self::stringify_params(params)?;
        self.client.post(endpoint, body).await
    }

    pub(crate) fn client(&self) -> &CosignerClient {
        &self.client
    }

    /// Set up a monitor for the given currency and accounts.
    ///
    /// A monitor provides balance updates for the watched addresses plus all
    /// transactions that come in while it is active; the two are told apart
    /// by the transaction data field of each update. Returns `None` when the
    /// stream cannot be opened; the caller retries by calling again. There
    /// is no automatic reconnection once a session closes.
    pub async fn monitor_balance(&self, params: &CurrencyParameters) -> Option<MonitorSession> {
        let url = format!(
            "{}{}",
            self.config.ws_server_url.trim_end_matches('/'),
            MONITOR_ENDPOINT
        );
        debug!(url, "starting balance monitor");

        match MonitorSession::connect(&url, params, self.stream_tls.clone()).await {
            Ok(session) => Some(session),
            Err(err) => {
                error!(error = %err, "monitor connect failed");
                None
            }
        }
    }
}
