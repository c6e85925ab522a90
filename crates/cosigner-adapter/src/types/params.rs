/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request/stream payload structs with serialization support
[POS]:    Data layer - the shared parameter payload for every remote operation
[UPDATE]: When the cosigner server schema changes
*/

use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One recipient entry: destination address and string-encoded decimal amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub recipient_address: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

impl Recipient {
    pub fn new(recipient_address: impl Into<String>, amount: Decimal) -> Self {
        Self {
            recipient_address: recipient_address.into(),
            amount,
        }
    }
}

/// The parameter payload shared by every cosigner operation and every
/// streamed monitor update.
///
/// Equality and hashing are structural for transaction dedup: currency
/// symbol, transaction data and source accounts. Recipients and the user
/// key do not participate. Account and recipient order is caller-supplied
/// and preserved as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyParameters {
    pub currency_symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_key: Option<String>,
    pub account: Vec<String>,
    pub receiving_account: Vec<Recipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_data: Option<String>,
}

impl CurrencyParameters {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            ..Self::default()
        }
    }

    /// Replace the source account list.
    pub fn with_accounts(mut self, accounts: Vec<String>) -> Self {
        self.account = accounts;
        self
    }

    /// Replace the recipient list.
    pub fn with_recipients(mut self, recipients: Vec<Recipient>) -> Self {
        self.receiving_account = recipients;
        self
    }

    pub fn with_user_key(mut self, user_key: impl Into<String>) -> Self {
        self.user_key = Some(user_key.into());
        self
    }

    pub fn with_transaction_data(mut self, transaction_data: impl Into<String>) -> Self {
        self.transaction_data = Some(transaction_data.into());
        self
    }

    /// True when this payload carries transaction data, i.e. it describes a
    /// transaction rather than a balance update.
    pub fn has_transaction_data(&self) -> bool {
        self.transaction_data
            .as_deref()
            .is_some_and(|data| !data.is_empty())
    }
}

impl PartialEq for CurrencyParameters {
    fn eq(&self, other: &Self) -> bool {
        self.currency_symbol == other.currency_symbol
            && self.transaction_data == other.transaction_data
            && self.account == other.account
    }
}

impl Eq for CurrencyParameters {}

impl Hash for CurrencyParameters {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.currency_symbol.hash(state);
        self.transaction_data.hash(state);
        self.account.hash(state);
    }
}
