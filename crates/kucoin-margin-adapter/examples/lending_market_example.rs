/*
[INPUT]:  Currency identifier (e.g., "USDT")
[OUTPUT]: Lending market depth, recent fills and lending configuration
[POS]:    Examples - lending market queries
[UPDATE]: When adding new market data endpoints
*/

use kucoin_margin_adapter::*;

/// Example: Query the lending market
///
/// Market depth and fills do not need credentials; the v2 lending
/// configuration requires the "General" permission.
#[tokio::main]
async fn main() {
    println!("=== KuCoin Lending Market Example ===\n");

    let client = match MarginClient::http(ClientConfig::default(), None) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let currency = "USDT";

    println!("Querying lending market for {}...", currency);
    match client.get_lending_market_data(currency, Some(7)).await {
        Ok(response) => match response.decode_data::<Vec<LendingMarketEntry>>() {
            Ok(entries) => {
                for entry in entries {
                    println!(
                        "  term {:>2}d  rate {}  size {}",
                        entry.term, entry.daily_int_rate, entry.size
                    );
                }
            }
            Err(_) => println!("✗ API answered: {}", response.as_value()),
        },
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying last fills for {}...", currency);
    match client.get_margin_fills_trade_data(currency).await {
        Ok(response) => println!("✓ Fills: {}", response.as_value()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Lending market example complete");
}
