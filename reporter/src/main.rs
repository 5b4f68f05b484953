//! Reporter binary entry point
//!
//! Runs the report generation exercise: three sample reports, each through a
//! different format and delivery channel, then prints the run history.

use clap::Parser;

use reporter::{
    delivery::EmailDelivery, DeliveryFactory, FormatFactory, ReportFactory, ReportParams,
    ReportRequest, ReportSystem, ReporterResult, Sale, StockItem,
};
use shared::logging;

#[derive(Parser)]
#[command(name = "reporter")]
#[command(about = "Generates, formats and delivers business reports")]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Recipient for email deliveries
    #[arg(long)]
    recipient: Option<String>,
}

fn sample_requests() -> Vec<ReportRequest> {
    vec![
        ReportRequest {
            report: "sales".to_string(),
            format: "pdf".to_string(),
            delivery: "email".to_string(),
            params: ReportParams {
                period: Some("2024-Q1".to_string()),
                sales: Some(vec![
                    Sale {
                        product: "Laptop".to_string(),
                        amount: 899.99,
                    },
                    Sale {
                        product: "Mouse".to_string(),
                        amount: 25.50,
                    },
                    Sale {
                        product: "Mechanical keyboard".to_string(),
                        amount: 120.00,
                    },
                    Sale {
                        product: "24\" monitor".to_string(),
                        amount: 199.99,
                    },
                ]),
                ..Default::default()
            },
        },
        ReportRequest {
            report: "inventory".to_string(),
            format: "excel".to_string(),
            delivery: "download".to_string(),
            params: ReportParams {
                stock: Some(vec![
                    StockItem {
                        name: "Laptop".to_string(),
                        category: "Computers".to_string(),
                        quantity: 15,
                    },
                    StockItem {
                        name: "Mouse".to_string(),
                        category: "Accessories".to_string(),
                        quantity: 50,
                    },
                    StockItem {
                        name: "Mechanical keyboard".to_string(),
                        category: "Accessories".to_string(),
                        quantity: 30,
                    },
                    StockItem {
                        name: "24\" monitor".to_string(),
                        category: "Displays".to_string(),
                        quantity: 20,
                    },
                ]),
                ..Default::default()
            },
        },
        ReportRequest {
            report: "financial".to_string(),
            format: "html".to_string(),
            delivery: "cloud".to_string(),
            params: ReportParams {
                income: Some(50_000.00),
                expenses: Some(32_000.00),
                ..Default::default()
            },
        },
    ]
}

fn main() -> ReporterResult<()> {
    let args = Args::parse();
    logging::init_tracing(Some(&args.log_level));
    logging::log_startup("reporter", "report generation exercise");

    // An overridden recipient is wired in through factory registration, the
    // same way any other variant would be added.
    let mut deliveries = DeliveryFactory::new();
    if let Some(recipient) = args.recipient {
        deliveries.register("email", move || Box::new(EmailDelivery::new(&recipient)));
    }

    let mut system =
        ReportSystem::with_factories(ReportFactory::new(), FormatFactory::new(), deliveries);

    for request in sample_requests() {
        let result = system.run(&request)?;
        logging::log_success(
            "reporter",
            &format!(
                "{} report ({}) via {}: {} -> {}",
                request.report, request.format, request.delivery, result.outcome, result.target
            ),
        );
    }

    println!("\nREPORT RUN HISTORY");
    println!("{}", serde_json::to_string_pretty(system.history().list())?);

    Ok(())
}
