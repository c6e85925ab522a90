/*
[INPUT]:  Parameter payloads naming a currency and accounts
[OUTPUT]: Address and balance results from the cosigner server
[POS]:    Orchestration layer - address/balance operations
[UPDATE]: When the server's wallet endpoints change
*/

use crate::connector::CurrencyConnector;
use crate::http::error::Result;
use crate::types::CurrencyParameters;

impl CurrencyConnector {
    /// List currencies provided by the cosigner server.
    ///
    /// GET /rs/ListCurrencies
    pub async fn list_currencies(&self) -> Result<String> {
        self.client().get("/rs/ListCurrencies").await
    }

    /// Register addresses for currency libraries that need a watch list.
    ///
    /// POST /rs/RegisterAddress
    pub async fn register_address(&self, params: &CurrencyParameters) -> Result<String> {
        self.post_params("/rs/RegisterAddress", params).await
    }

    /// Get a new address.
    ///
    /// POST /rs/GetNewAddress
    pub async fn get_new_address(&self, params: &CurrencyParameters) -> Result<String> {
        self.post_params("/rs/GetNewAddress", params).await
    }

    /// Convert a public key into the relevant address.
    ///
    /// POST /rs/GenerateAddressFromKey
    pub async fn convert_key_to_address(&self, params: &CurrencyParameters) -> Result<String> {
        self.post_params("/rs/GenerateAddressFromKey", params).await
    }

    /// List all addresses generated for the given user key and currency.
    ///
    /// POST /rs/ListAllAddresses
    pub async fn list_all_addresses(&self, params: &CurrencyParameters) -> Result<String> {
        self.post_params("/rs/ListAllAddresses", params).await
    }

    /// Combined balance of all addresses provided in the parameters.
    ///
    /// POST /rs/GetBalance
    pub async fn get_balance(&self, params: &CurrencyParameters) -> Result<String> {
        self.post_params("/rs/GetBalance", params).await
    }
}
