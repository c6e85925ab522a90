/*
[INPUT]:  TlsBundle PEM paths (trust root, client certificate, client key)
[OUTPUT]: TLS material usable by both the HTTP and websocket transports
[POS]:    Transport layer - one-time TLS resolution
[UPDATE]: When TLS material formats change
*/

use std::sync::Arc;

use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::{ClientConfig as RustlsClientConfig, RootCertStore};
use tracing::debug;

use crate::config::TlsBundle;
use crate::http::error::{CosignerError, Result};

/// Resolved TLS material, loaded once at connector construction and shared
/// by the request client and every monitor session.
#[derive(Debug, Clone)]
pub(crate) struct TlsMaterial {
    /// Client identity for the HTTP transport.
    pub identity: reqwest::Identity,
    /// Pinned trust root for the HTTP transport.
    pub trust_anchor: reqwest::Certificate,
    /// Equivalent configuration for the websocket transport.
    pub stream_config: Arc<RustlsClientConfig>,
}

/// Load the PEM bundle from disk and build both transport configurations
/// from the same material.
pub(crate) fn load(bundle: &TlsBundle) -> Result<TlsMaterial> {
    debug!(
        ca = %bundle.ca_cert.display(),
        cert = %bundle.client_cert.display(),
        "loading TLS material"
    );

    let ca_pem = std::fs::read(&bundle.ca_cert)?;
    let cert_pem = std::fs::read(&bundle.client_cert)?;
    let key_pem = std::fs::read(&bundle.client_key)?;

    // reqwest takes the identity as one PEM with certificate and key.
    let mut identity_pem = cert_pem.clone();
    identity_pem.extend_from_slice(b"\n");
    identity_pem.extend_from_slice(&key_pem);
    let identity = reqwest::Identity::from_pem(&identity_pem)?;
    let trust_anchor = reqwest::Certificate::from_pem(&ca_pem)?;

    let stream_config = Arc::new(build_rustls_config(&ca_pem, &cert_pem, &key_pem)?);

    Ok(TlsMaterial {
        identity,
        trust_anchor,
        stream_config,
    })
}

fn build_rustls_config(
    ca_pem: &[u8],
    cert_pem: &[u8],
    key_pem: &[u8],
) -> Result<RustlsClientConfig> {
    let mut roots = RootCertStore::empty();
    for cert in rustls_pemfile::certs(&mut &ca_pem[..]) {
        roots
            .add(cert?)
            .map_err(|err| CosignerError::Tls(err.to_string()))?;
    }
    if roots.is_empty() {
        return Err(CosignerError::Tls(
            "trust root PEM contained no certificates".to_string(),
        ));
    }

    let chain: Vec<CertificateDer<'static>> =
        rustls_pemfile::certs(&mut &cert_pem[..]).collect::<std::io::Result<_>>()?;
    if chain.is_empty() {
        return Err(CosignerError::Tls(
            "client certificate PEM contained no certificates".to_string(),
        ));
    }

    let key: PrivateKeyDer<'static> = rustls_pemfile::private_key(&mut &key_pem[..])?
        .ok_or_else(|| CosignerError::Tls("client key PEM contained no key".to_string()))?;

    RustlsClientConfig::builder()
        .with_root_certificates(roots)
        .with_client_auth_cert(chain, key)
        .map_err(|err| CosignerError::Tls(err.to_string()))
}
