/*
[INPUT]:  A running cosigner server (defaults to localhost)
[OUTPUT]: Walkthrough of the request/response operations
[POS]:    Examples - request/response usage
[UPDATE]: When connector endpoints change
*/

use cosigner_adapter::{ClientConfig, CurrencyConnector, CurrencyParameters, Recipient};

/// Example: request/response calls against a cosigner server
///
/// Every operation shares the same parameter payload and returns the
/// server's result string, with remote failures surfaced as errors.
#[tokio::main]
async fn main() {
    println!("=== Cosigner Request Example ===\n");

    let config = ClientConfig::default();
    let connector = CurrencyConnector::new(&config).expect("connector init");
    println!("✓ Connector created for {}", config.rs_server_url);

    match connector.list_currencies().await {
        Ok(currencies) => println!("✓ Supported currencies: {}", currencies),
        Err(err) => {
            println!("✗ No server reachable ({})", err);
            println!("\nRequest Usage:");
            println!("  let params = CurrencyParameters::new(\"BTC\")");
            println!("      .with_user_key(\"user-1\")");
            println!("      .with_accounts(vec![\"addr\".into()]);");
            println!("  connector.get_new_address(&params).await?");
            println!("  connector.get_balance(&params).await?");
            println!("  connector.prepare_transaction(&params).await?");
            return;
        }
    }

    let params = CurrencyParameters::new("BTC")
        .with_user_key("example-user")
        .with_accounts(vec!["example-address".to_string()])
        .with_recipients(vec![Recipient::new(
            "destination-address",
            "0.1".parse().expect("decimal"),
        )]);

    match connector.get_balance(&params).await {
        Ok(balance) => println!("✓ Balance: {}", balance),
        Err(err) => println!("✗ GetBalance failed: {}", err),
    }

    println!("\n✓ Request example complete");
}
