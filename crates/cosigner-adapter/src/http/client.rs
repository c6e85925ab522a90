/*
[INPUT]:  Transport configuration (base URL, timeouts, optional TLS material)
[OUTPUT]: Single-shot GET/POST calls returning the unwrapped envelope result
[POS]:    HTTP layer - core request client
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use tracing::debug;

use crate::config::ClientConfig;
use crate::http::error::Result;
use crate::tls::TlsMaterial;
use crate::types::CosignerResponse;

/// Request client for the cosigner REST endpoints.
///
/// Every call is a fresh connect/release cycle: pooling is disabled so the
/// connection is torn down when the response body has been read, on success
/// and failure alike. No retries; a failed attempt surfaces as-is.
#[derive(Debug, Clone)]
pub struct CosignerClient {
    http_client: Client,
    base_url: Url,
}

impl CosignerClient {
    /// Create a client from the shared transport configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Self::with_tls(config, None)
    }

    /// Create a client, applying already-resolved TLS material if present.
    pub(crate) fn with_tls(config: &ClientConfig, tls: Option<&TlsMaterial>) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(0);

        if let Some(material) = tls {
            builder = builder
                .use_rustls_tls()
                .identity(material.identity.clone())
                .add_root_certificate(material.trust_anchor.clone());
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: Url::parse(&config.rs_server_url)?,
        })
    }

    /// Issue one GET request and unwrap the envelope.
    pub async fn get(&self, endpoint: &str) -> Result<String> {
        let url = self.base_url.join(endpoint)?;
        debug!(%url, "sending GET request");
        let response = self.http_client.get(url).send().await?;
        let body = response.text().await?;
        debug!(bytes = body.len(), "got response");
        CosignerResponse::decode(&body)?.into_result()
    }

    /// Issue one POST request with a pre-encoded JSON body and unwrap the
    /// envelope.
    pub async fn post(&self, endpoint: &str, body: String) -> Result<String> {
        let url = self.base_url.join(endpoint)?;
        debug!(%url, bytes = body.len(), "sending POST request");
        let response = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let body = response.text().await?;
        debug!(bytes = body.len(), "got response");
        CosignerResponse::decode(&body)?.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = ClientConfig::default();
        assert!(CosignerClient::new(&config).is_ok());
    }

    #[test]
    fn test_client_rejects_bad_base_url() {
        let config = ClientConfig {
            rs_server_url: "not a url".to_string(),
            ..ClientConfig::default()
        };
        assert!(CosignerClient::new(&config).is_err());
    }
}
