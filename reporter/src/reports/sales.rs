//! Sales report: totals and per-sale detail for a period

use crate::error::ReporterResult;
use crate::traits::ReportStrategy;
use crate::types::ReportParams;

pub struct SalesReport;

impl ReportStrategy for SalesReport {
    fn title(&self) -> String {
        "SALES REPORT".to_string()
    }

    fn body(&self, params: &ReportParams) -> ReporterResult<String> {
        let period = params.period()?;
        let sales = params.sales()?;
        let total: f64 = sales.iter().map(|s| s.amount).sum();

        let mut lines = vec![
            format!("Total sales: ${total:.2}"),
            format!("Transactions: {}", sales.len()),
            format!("Period: {period}"),
            String::new(),
            "Sales detail:".to_string(),
            "-".repeat(60),
        ];
        for sale in sales {
            lines.push(format!("  - {}: ${:.2}", sale.product, sale.amount));
        }

        Ok(lines.join("\n"))
    }
}
