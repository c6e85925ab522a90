/*
[INPUT]:  Raw response bodies from the cosigner server
[OUTPUT]: The uniform {result, error} envelope and its success/failure split
[POS]:    Data layer - response envelope for every request/response call
[UPDATE]: When the server envelope format changes
*/

use serde::{Deserialize, Serialize};

use crate::http::error::{CosignerError, Result};

/// The envelope wrapped around every request/response call.
///
/// Exactly one of `result`/`error` is meaningfully populated for a completed
/// call. An empty-but-present error string means success.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CosignerResponse {
    pub result: Option<String>,
    pub error: Option<String>,
}

impl CosignerResponse {
    /// Decode an envelope from a raw response body.
    pub fn decode(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|err| CosignerError::MalformedResponse(err.to_string()))
    }

    /// Split the envelope into the carried result or the remote failure.
    ///
    /// `result` is never inspected when a non-empty error is present.
    pub fn into_result(self) -> Result<String> {
        match self.error {
            Some(message) if !message.is_empty() => Err(CosignerError::Remote { message }),
            _ => Ok(self.result.unwrap_or_default()),
        }
    }
}
