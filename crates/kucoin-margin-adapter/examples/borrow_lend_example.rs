/*
[INPUT]:  API credentials from KUCOIN_API_KEY / KUCOIN_API_SECRET / KUCOIN_API_PASSPHRASE
[OUTPUT]: Lend order placed, listed and cancelled
[POS]:    Examples - authenticated lend order lifecycle
[UPDATE]: When lend endpoints or credential handling change
*/

use kucoin_margin_adapter::*;
use rust_decimal::Decimal;

#[tokio::main]
async fn main() {
    println!("=== KuCoin Lend Order Example ===\n");

    let (Ok(key), Ok(secret), Ok(passphrase)) = (
        std::env::var("KUCOIN_API_KEY"),
        std::env::var("KUCOIN_API_SECRET"),
        std::env::var("KUCOIN_API_PASSPHRASE"),
    ) else {
        eprintln!("Set KUCOIN_API_KEY, KUCOIN_API_SECRET and KUCOIN_API_PASSPHRASE first");
        return;
    };

    let client = match MarginClient::http(
        ClientConfig::default(),
        Some(Credentials::new(key, secret, passphrase)),
    ) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let size = Decimal::new(10, 0);
    let rate = Decimal::new(2, 3);

    println!("Posting lend order: 10 USDT at {} for 7 days...", rate);
    let order_id = match client.post_lend_order("USDT", size, rate, 7).await {
        Ok(response) if response.is_success() => match response.decode_data::<LendOrderId>() {
            Ok(id) => id.order_id,
            Err(e) => {
                eprintln!("✗ Unexpected payload: {}", e);
                return;
            }
        },
        Ok(response) => {
            eprintln!("✗ API rejected order: {}", response.as_value());
            return;
        }
        Err(e) => {
            eprintln!("✗ Error: {}", e);
            return;
        }
    };
    println!("✓ Order id: {}", order_id);

    match client
        .get_active_order(Some("USDT"), PageRequest::new(1, 10))
        .await
    {
        Ok(response) => println!("✓ Active orders: {}", response.as_value()),
        Err(e) => println!("✗ Error: {}", e),
    }

    match client.cancel_lend_order(&order_id).await {
        Ok(response) => println!("✓ Cancelled: {}", response.as_value()),
        Err(e) => println!("✗ Error: {}", e),
    }
}
