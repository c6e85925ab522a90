/*
[INPUT]:  An in-process websocket server standing in for the cosigner stream
[OUTPUT]: Test results for the monitor session lifecycle and reconciliation
[POS]:    Integration tests - monitor stream
[UPDATE]: When the monitor session or frame protocol changes
*/

use std::time::Duration;

use cosigner_adapter::{
    ClientConfig, CurrencyConnector, CurrencyParameters, MonitorSession, SessionStatus,
};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

fn frame(payload: &str) -> String {
    format!("{}|{}", payload.len(), payload)
}

fn balance_message(address: &str, amount: &str) -> String {
    format!(
        r#"{{"currencySymbol":"BTC","receivingAccount":[{{"recipientAddress":"{}","amount":"{}"}}]}}"#,
        address, amount
    )
}

fn transaction_message(data: &str) -> String {
    format!(
        r#"{{"currencySymbol":"BTC","account":["addr-1"],"transactionData":"{}"}}"#,
        data
    )
}

/// Accept one connection, capture the subscription message, play back the
/// given text deliveries, then close. Returns the captured subscription.
async fn spawn_stream_server(deliveries: Vec<String>) -> (ClientConfig, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept");
        let mut ws = accept_async(stream).await.expect("handshake");

        let subscription = match ws.next().await.expect("subscription").expect("read") {
            Message::Text(text) => text.to_string(),
            other => panic!("expected text subscription, got {:?}", other),
        };

        for delivery in deliveries {
            ws.send(Message::text(delivery)).await.expect("send");
        }
        ws.send(Message::Close(None)).await.expect("close");
        // Drain until the peer acknowledges the close.
        while let Some(Ok(_)) = ws.next().await {}

        subscription
    });

    let config = ClientConfig {
        ws_server_url: format!("ws://{}", addr),
        ..ClientConfig::default()
    };
    (config, handle)
}

async fn wait_for_closed(session: &MonitorSession) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while session.status() != SessionStatus::Closed {
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    })
    .await
    .expect("session did not close");
}

#[tokio::test]
async fn test_monitor_sends_subscription_and_reconciles_stream() {
    let tx = transaction_message("deadbeef");
    let balance_early = frame(&balance_message("addr-1", "10"));
    let balance_late = frame(&balance_message("addr-1", "12"));

    // One frame split mid-payload, two balance updates for the same address,
    // and the same transaction delivered twice.
    let split_frame = frame(&balance_message("addr-2", "3"));
    let (head, tail) = split_frame.split_at(split_frame.len() / 2);

    let deliveries = vec![
        head.to_string(),
        tail.to_string(),
        format!("{}{}", balance_early, frame(&tx)),
        balance_late,
        frame(&tx),
    ];
    let (config, server) = spawn_stream_server(deliveries).await;

    let connector = CurrencyConnector::new(&config).expect("connector");
    let params = CurrencyParameters::new("BTC").with_accounts(vec!["addr-1".to_string()]);
    let session = connector
        .monitor_balance(&params)
        .await
        .expect("session should open");

    wait_for_closed(&session).await;

    let subscription = server.await.expect("server task");
    let subscribed: CurrencyParameters =
        serde_json::from_str(&subscription).expect("subscription decodes");
    assert_eq!(subscribed, params);

    let balances = session.balances();
    assert_eq!(balances.get("addr-1"), Some(&"12".parse().expect("decimal")));
    assert_eq!(balances.get("addr-2"), Some(&"3".parse().expect("decimal")));

    assert_eq!(session.all_transactions().len(), 1);
    let drained = session.new_transactions();
    assert_eq!(drained.len(), 1);
    assert!(session.new_transactions().is_empty());
}

#[tokio::test]
async fn test_peer_close_transitions_session_to_closed() {
    let (config, server) = spawn_stream_server(Vec::new()).await;

    let connector = CurrencyConnector::new(&config).expect("connector");
    let params = CurrencyParameters::new("BTC");
    let session = connector
        .monitor_balance(&params)
        .await
        .expect("session should open");

    wait_for_closed(&session).await;
    assert!(!session.is_open());
    assert!(session.balances().is_empty());
    server.await.expect("server task");
}

#[tokio::test]
async fn test_explicit_close() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    // Server holds the connection open until the client closes it.
    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept");
        let mut ws = accept_async(stream).await.expect("handshake");
        let _subscription = ws.next().await.expect("subscription").expect("read");
        while let Some(Ok(message)) = ws.next().await {
            if message.is_close() {
                break;
            }
        }
    });

    let config = ClientConfig {
        ws_server_url: format!("ws://{}", addr),
        ..ClientConfig::default()
    };
    let connector = CurrencyConnector::new(&config).expect("connector");
    let session = connector
        .monitor_balance(&CurrencyParameters::new("BTC"))
        .await
        .expect("session should open");
    assert!(session.is_open());

    session.close().await;
    wait_for_closed(&session).await;
    server.await.expect("server task");
}

#[tokio::test]
async fn test_connect_failure_returns_no_session() {
    let config = ClientConfig {
        ws_server_url: "ws://127.0.0.1:9".to_string(),
        ..ClientConfig::default()
    };
    let connector = CurrencyConnector::new(&config).expect("connector");

    let params = CurrencyParameters::new("BTC");
    let attempt = tokio::time::timeout(
        Duration::from_secs(5),
        connector.monitor_balance(&params),
    );
    assert!(attempt.await.expect("must not hang").is_none());
}
