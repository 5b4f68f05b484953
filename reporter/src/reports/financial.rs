//! Financial report: income, expenses and resulting balance

use crate::error::ReporterResult;
use crate::traits::ReportStrategy;
use crate::types::ReportParams;

pub struct FinancialReport;

impl ReportStrategy for FinancialReport {
    fn title(&self) -> String {
        "FINANCIAL REPORT".to_string()
    }

    fn body(&self, params: &ReportParams) -> ReporterResult<String> {
        let income = params.income()?;
        let expenses = params.expenses()?;
        let balance = income - expenses;

        Ok([
            format!("Income: ${income:.2}"),
            format!("Expenses: ${expenses:.2}"),
            format!("Balance: ${balance:.2}"),
        ]
        .join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReporterError;
    use chrono::Utc;

    #[test]
    fn test_balance_is_income_minus_expenses() {
        let params = ReportParams {
            income: Some(50_000.0),
            expenses: Some(32_000.0),
            ..Default::default()
        };

        let content = FinancialReport.generate(&params, Utc::now()).unwrap();
        assert!(content.render().contains("Balance: $18000.00"));
    }

    #[test]
    fn test_missing_expenses_aborts() {
        let params = ReportParams {
            income: Some(50_000.0),
            ..Default::default()
        };

        let err = FinancialReport.generate(&params, Utc::now()).unwrap_err();
        assert!(
            matches!(err, ReporterError::MissingParameter { ref parameter } if parameter == "expenses")
        );
    }
}
