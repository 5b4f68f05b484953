//! Notifier binary entry point
//!
//! Runs the order notification exercise against built-in sample orders and
//! prints the resulting notification history.

use clap::Parser;

use notifier::{Customer, NotifierResult, OrderInfo, OrderItem, OrderProcessor};
use shared::logging;

#[derive(Parser)]
#[command(name = "notifier")]
#[command(about = "Dispatches order confirmations over email, SMS and push")]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn sample_orders() -> Vec<OrderInfo> {
    vec![
        // Premium customer: announce on every channel
        OrderInfo {
            order_id: "ORD-1001".to_string(),
            customer: Customer {
                name: "Alice Grant".to_string(),
                email: "alice.grant@example.com".to_string(),
                phone: "+1-555-0101".to_string(),
                device_id: "DEVICE-A1B2".to_string(),
            },
            total: 150.50,
            items: vec![
                OrderItem {
                    product: "Laptop stand".to_string(),
                    quantity: 1,
                },
                OrderItem {
                    product: "USB-C cable".to_string(),
                    quantity: 2,
                },
            ],
            channels: vec!["email".to_string(), "sms".to_string(), "push".to_string()],
        },
        // Standard customer: email only
        OrderInfo {
            order_id: "ORD-1002".to_string(),
            customer: Customer {
                name: "Carlos Ruiz".to_string(),
                email: "carlos.ruiz@example.com".to_string(),
                phone: "+1-555-0102".to_string(),
                device_id: "DEVICE-X9Y8".to_string(),
            },
            total: 75.00,
            items: vec![OrderItem {
                product: "Mechanical keyboard".to_string(),
                quantity: 1,
            }],
            channels: vec!["email".to_string()],
        },
    ]
}

fn main() -> NotifierResult<()> {
    let args = Args::parse();
    logging::init_tracing(Some(&args.log_level));
    logging::log_startup("notifier", "order notification exercise");

    let mut processor = OrderProcessor::new();

    for order in sample_orders() {
        let results = processor.process(&order)?;
        let delivered = results.iter().filter(|r| r.succeeded()).count();
        logging::log_success(
            "notifier",
            &format!(
                "order {} announced on {}/{} channels",
                order.order_id,
                delivered,
                results.len()
            ),
        );
    }

    println!("\nNOTIFICATION HISTORY");
    println!("{}", serde_json::to_string_pretty(processor.history().list())?);

    Ok(())
}
