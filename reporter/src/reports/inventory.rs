//! Inventory report: unit and category counts plus current stock lines

use std::collections::HashSet;

use crate::error::ReporterResult;
use crate::traits::ReportStrategy;
use crate::types::ReportParams;

pub struct InventoryReport;

impl ReportStrategy for InventoryReport {
    fn title(&self) -> String {
        "INVENTORY REPORT".to_string()
    }

    fn body(&self, params: &ReportParams) -> ReporterResult<String> {
        let stock = params.stock()?;
        let total_units: u32 = stock.iter().map(|item| item.quantity).sum();
        let categories: HashSet<&str> = stock.iter().map(|item| item.category.as_str()).collect();

        let mut lines = vec![
            format!("Total units: {total_units}"),
            format!("Categories: {}", categories.len()),
            String::new(),
            "Current stock:".to_string(),
            "-".repeat(60),
        ];
        for item in stock {
            lines.push(format!(
                "  - {} ({}): {} units",
                item.name, item.category, item.quantity
            ));
        }

        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StockItem;
    use chrono::Utc;

    #[test]
    fn test_counts_units_and_categories() {
        let params = ReportParams {
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
                    name: "Keyboard".to_string(),
                    category: "Accessories".to_string(),
                    quantity: 30,
                },
            ]),
            ..Default::default()
        };

        let content = InventoryReport.generate(&params, Utc::now()).unwrap();
        let text = content.render();
        assert!(text.contains("Total units: 95"));
        assert!(text.contains("Categories: 2"));
        assert!(text.contains("Mouse (Accessories): 50 units"));
    }
}
