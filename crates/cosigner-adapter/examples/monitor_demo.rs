/*
[INPUT]:  A running cosigner server exposing the monitor stream
[OUTPUT]: Live balance/transaction updates polled from a monitor session
[POS]:    Examples - monitor stream usage
[UPDATE]: When the monitor session API changes
*/

use cosigner_adapter::{ClientConfig, CurrencyConnector, CurrencyParameters};
use tokio::time::{Duration, sleep};

/// Example: monitoring balances and transactions
///
/// The monitor keeps one streaming connection open; the caller polls the
/// session for the latest balances and drains new transactions as they
/// arrive.
#[tokio::main]
async fn main() {
    println!("=== Cosigner Monitor Example ===\n");

    let config = ClientConfig::default();
    let connector = CurrencyConnector::new(&config).expect("connector init");

    let params = CurrencyParameters::new("BTC")
        .with_accounts(vec!["example-address".to_string()]);

    let Some(session) = connector.monitor_balance(&params).await else {
        println!("✗ Could not open the monitor stream at {}", config.ws_server_url);
        println!("\nMonitor Usage:");
        println!("  1. Open: let session = connector.monitor_balance(&params).await");
        println!("  2. Poll: session.balances()");
        println!("  3. Drain: session.new_transactions()");
        println!("  4. Close: session.close().await");
        return;
    };
    println!("✓ Monitor session open");

    for _ in 0..5 {
        sleep(Duration::from_secs(2)).await;
        println!("balances: {:?}", session.balances());
        for tx in session.new_transactions() {
            println!("new transaction: {:?}", tx.transaction_data);
        }
        if !session.is_open() {
            println!("✗ Session closed by the server");
            break;
        }
    }

    session.close().await;
    println!("\n✓ Monitor example complete");
}
