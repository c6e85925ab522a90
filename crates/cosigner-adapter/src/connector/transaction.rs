/*
[INPUT]:  Parameter payloads carrying transaction data through signing stages
[OUTPUT]: Transaction lifecycle results from the cosigner server
[POS]:    Orchestration layer - transaction operations
[UPDATE]: When the server's transaction endpoints change
*/

use crate::connector::CurrencyConnector;
use crate::http::error::{CosignerError, Result};
use crate::types::CurrencyParameters;

impl CurrencyConnector {
    /// List transactions for the given addresses and currency.
    ///
    /// POST /rs/ListTransactions
    pub async fn list_transactions(&self, params: &CurrencyParameters) -> Result<String> {
        self.post_params("/rs/ListTransactions", params).await
    }

    /// Look up a single transaction.
    ///
    /// POST /rs/GetTransaction
    pub async fn get_transaction(&self, params: &CurrencyParameters) -> Result<String> {
        self.post_params("/rs/GetTransaction", params).await
    }

    /// Create a transaction and sign it with the user's key. The server keys
    /// are not used until the approve stage.
    ///
    /// POST /rs/PrepareTransaction
    pub async fn prepare_transaction(&self, params: &CurrencyParameters) -> Result<String> {
        self.post_params("/rs/PrepareTransaction", params).await
    }

    /// Addresses that could sign the transaction.
    ///
    /// POST /rs/GetSignersForTransaction
    pub async fn get_signers_for_transaction(
        &self,
        params: &CurrencyParameters,
    ) -> Result<Vec<String>> {
        let response = self
            .post_params("/rs/GetSignersForTransaction", params)
            .await?;
        serde_json::from_str(&response)
            .map_err(|err| CosignerError::MalformedResponse(err.to_string()))
    }

    /// Signing data for an offline signature.
    ///
    /// POST /rs/GetSignatureString
    pub async fn get_signature_string(
        &self,
        params: &CurrencyParameters,
    ) -> Result<Vec<Vec<String>>> {
        let response = self.post_params("/rs/GetSignatureString", params).await?;
        serde_json::from_str(&response)
            .map_err(|err| CosignerError::MalformedResponse(err.to_string()))
    }

    /// Apply an offline signature to a transaction.
    ///
    /// POST /rs/ApplySignature
    pub async fn apply_signature(&self, params: &CurrencyParameters) -> Result<String> {
        self.post_params("/rs/ApplySignature", params).await
    }

    /// Approve a transaction the user has signed off on; this stage signs
    /// with the server keys after validation.
    ///
    /// POST /rs/ApproveTransaction
    pub async fn approve_transaction(&self, params: &CurrencyParameters) -> Result<String> {
        self.post_params("/rs/ApproveTransaction", params).await
    }

    /// Submit a transaction for processing on the network.
    ///
    /// POST /rs/BroadcastTransaction
    pub async fn broadcast_transaction(&self, params: &CurrencyParameters) -> Result<String> {
        self.post_params("/rs/BroadcastTransaction", params).await
    }
}
