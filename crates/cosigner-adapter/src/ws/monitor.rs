/*
[INPUT]:  Streaming endpoint URL, subscription parameters, optional TLS config
[OUTPUT]: A live monitor session exposing reconciled balance/transaction state
[POS]:    WebSocket layer - session lifecycle and observable state
[UPDATE]: When the monitor stream contract or session lifecycle changes
*/

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures_util::{SinkExt, StreamExt};
use rust_decimal::Decimal;
use rustls::ClientConfig as RustlsClientConfig;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{Connector, connect_async, connect_async_tls_with_config};
use tracing::{debug, error};

use crate::http::error::{CosignerError, Result};
use crate::types::CurrencyParameters;
use crate::ws::handler::{MonitorHandler, StreamHandler};

/// Lifecycle of one monitor session. `Closed` is terminal; a new session is
/// constructed by calling the connector's monitor method again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Disconnected,
    Connecting,
    Open,
    Closed,
}

#[derive(Debug, Default)]
struct StateInner {
    balances: HashMap<String, Decimal>,
    all_transactions: HashSet<CurrencyParameters>,
    new_transactions: HashSet<CurrencyParameters>,
}

/// Observable aggregate of the monitor stream: latest balance per address
/// plus the transactions seen over the session's life.
///
/// Written only by the session's delivery task; readers poll concurrently.
/// The new-transaction drain happens under one lock acquisition, so a
/// transaction is never lost or handed out twice across drains.
#[derive(Debug, Default)]
pub struct MonitorState {
    inner: Mutex<StateInner>,
}

impl MonitorState {
    fn lock(&self) -> MutexGuard<'_, StateInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Latest known balance per address.
    pub fn balances(&self) -> HashMap<String, Decimal> {
        self.lock().balances.clone()
    }

    /// Every transaction observed during this session.
    pub fn all_transactions(&self) -> HashSet<CurrencyParameters> {
        self.lock().all_transactions.clone()
    }

    /// Transactions observed since the previous drain; read-and-clear.
    pub fn new_transactions(&self) -> HashSet<CurrencyParameters> {
        std::mem::take(&mut self.lock().new_transactions)
    }

    /// Apply one decoded message.
    ///
    /// No transaction data: a balance update, last write wins per address;
    /// without recipients it is a no-op. With transaction data: recorded
    /// once by structural identity, re-delivery is silently ignored.
    pub(crate) fn apply(&self, params: CurrencyParameters) {
        let mut inner = self.lock();
        if !params.has_transaction_data() {
            for recipient in &params.receiving_account {
                inner
                    .balances
                    .insert(recipient.recipient_address.clone(), recipient.amount);
            }
        } else if !inner.all_transactions.contains(&params) {
            inner.new_transactions.insert(params.clone());
            inner.all_transactions.insert(params);
        }
    }
}

/// Handle to one persistent monitor stream.
///
/// Delivery runs on a background task; the handle only polls state and can
/// request an explicit close. Dropping every handle also closes the stream.
#[derive(Debug, Clone)]
pub struct MonitorSession {
    state: Arc<MonitorState>,
    status: Arc<Mutex<SessionStatus>>,
    outbound_tx: mpsc::Sender<WsMessage>,
}

impl MonitorSession {
    /// Open the stream, send the one subscription message, and hand delivery
    /// off to a background task.
    pub(crate) async fn connect(
        url: &str,
        params: &CurrencyParameters,
        tls: Option<Arc<RustlsClientConfig>>,
    ) -> Result<Self> {
        let status = Arc::new(Mutex::new(SessionStatus::Disconnected));
        set_status(&status, SessionStatus::Connecting);
        debug!(url, "connecting monitor stream");

        let connect_result = match tls {
            Some(config) => {
                connect_async_tls_with_config(url, None, false, Some(Connector::Rustls(config)))
                    .await
            }
            None => connect_async(url).await,
        };
        let (stream, _response) =
            connect_result.map_err(|err| CosignerError::WebSocket(err.to_string()))?;
        let (mut write, mut read) = stream.split();

        // The initial interest set goes out as one plain JSON message.
        let subscription = serde_json::to_string(params)?;
        write
            .send(WsMessage::Text(subscription.into()))
            .await
            .map_err(|err| CosignerError::WebSocket(err.to_string()))?;

        let state = Arc::new(MonitorState::default());
        let mut handler = MonitorHandler::new(state.clone());
        handler.on_open();
        set_status(&status, SessionStatus::Open);

        let (outbound_tx, mut outbound_rx) = mpsc::channel::<WsMessage>(16);
        let task_status = status.clone();

        tokio::spawn(async move {
            let reason = loop {
                tokio::select! {
                    outbound = outbound_rx.recv() => {
                        match outbound {
                            Some(message) => {
                                let closing = matches!(message, WsMessage::Close(_));
                                if write.send(message).await.is_err() {
                                    break "send failed";
                                }
                                if closing {
                                    break "closed by caller";
                                }
                            }
                            None => {
                                let _ = write.send(WsMessage::Close(None)).await;
                                break "handle dropped";
                            }
                        }
                    }
                    incoming = read.next() => {
                        match incoming {
                            Some(Ok(WsMessage::Text(text))) => {
                                if let Err(err) = handler.on_message(text.as_bytes()) {
                                    error!(error = %err, "monitor stream protocol failure");
                                    let _ = write.send(WsMessage::Close(None)).await;
                                    break "protocol error";
                                }
                            }
                            Some(Ok(WsMessage::Binary(bytes))) => {
                                if let Err(err) = handler.on_message(&bytes) {
                                    error!(error = %err, "monitor stream protocol failure");
                                    let _ = write.send(WsMessage::Close(None)).await;
                                    break "protocol error";
                                }
                            }
                            Some(Ok(WsMessage::Close(_))) => {
                                let _ = write.send(WsMessage::Close(None)).await;
                                break "closed by peer";
                            }
                            Some(Ok(_)) => {}
                            Some(Err(err)) => {
                                error!(error = %err, "monitor stream transport failure");
                                break "transport error";
                            }
                            None => break "stream ended",
                        }
                    }
                }
            };
            handler.on_close(reason);
            set_status(&task_status, SessionStatus::Closed);
        });

        Ok(Self {
            state,
            status,
            outbound_tx,
        })
    }

    pub fn status(&self) -> SessionStatus {
        *self
            .status
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_open(&self) -> bool {
        self.status() == SessionStatus::Open
    }

    /// Latest known balance per address.
    pub fn balances(&self) -> HashMap<String, Decimal> {
        self.state.balances()
    }

    /// Every transaction observed during this session.
    pub fn all_transactions(&self) -> HashSet<CurrencyParameters> {
        self.state.all_transactions()
    }

    /// Transactions observed since the previous call; read-and-clear.
    pub fn new_transactions(&self) -> HashSet<CurrencyParameters> {
        self.state.new_transactions()
    }

    /// Request an orderly close. Safe to call on an already closed session.
    pub async fn close(&self) {
        let _ = self.outbound_tx.send(WsMessage::Close(None)).await;
    }
}

fn set_status(status: &Arc<Mutex<SessionStatus>>, value: SessionStatus) {
    *status.lock().unwrap_or_else(PoisonError::into_inner) = value;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Recipient;

    fn balance_update(address: &str, amount: &str) -> CurrencyParameters {
        CurrencyParameters::new("BTC").with_recipients(vec![Recipient::new(
            address,
            amount.parse().expect("decimal"),
        )])
    }

    fn transaction(data: &str) -> CurrencyParameters {
        CurrencyParameters::new("BTC")
            .with_accounts(vec!["addr-1".to_string()])
            .with_transaction_data(data)
    }

    #[test]
    fn test_balance_last_write_wins() {
        let state = MonitorState::default();
        state.apply(balance_update("addr-1", "10"));
        state.apply(balance_update("addr-1", "12"));

        let balances = state.balances();
        assert_eq!(balances.get("addr-1"), Some(&"12".parse().expect("decimal")));
        assert_eq!(balances.len(), 1);
    }

    #[test]
    fn test_balance_update_without_recipients_ignored() {
        let state = MonitorState::default();
        state.apply(CurrencyParameters::new("BTC"));
        assert!(state.balances().is_empty());
        assert!(state.all_transactions().is_empty());
    }

    #[test]
    fn test_duplicate_transaction_recorded_once() {
        let state = MonitorState::default();
        state.apply(transaction("deadbeef"));
        state.apply(transaction("deadbeef"));

        assert_eq!(state.all_transactions().len(), 1);
        assert_eq!(state.new_transactions().len(), 1);
    }

    #[test]
    fn test_new_transactions_drain_is_read_and_clear() {
        let state = MonitorState::default();
        state.apply(transaction("deadbeef"));

        assert_eq!(state.new_transactions().len(), 1);
        assert!(state.new_transactions().is_empty());
        // The full history is untouched by draining.
        assert_eq!(state.all_transactions().len(), 1);
    }

    #[test]
    fn test_redelivery_after_drain_stays_empty() {
        let state = MonitorState::default();
        state.apply(transaction("deadbeef"));
        state.new_transactions();

        state.apply(transaction("deadbeef"));
        assert!(state.new_transactions().is_empty());

        state.apply(transaction("cafebabe"));
        assert_eq!(state.new_transactions().len(), 1);
    }

    #[test]
    fn test_transactions_keyed_by_structural_identity() {
        let state = MonitorState::default();
        let mut first = transaction("deadbeef");
        first.user_key = Some("user-1".to_string());
        let mut second = transaction("deadbeef");
        second.user_key = Some("user-2".to_string());

        state.apply(first);
        state.apply(second);
        assert_eq!(state.all_transactions().len(), 1);
    }
}
