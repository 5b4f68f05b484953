//! Report pipeline orchestration
//!
//! Resolves the three strategies, then pipes generate → render → deliver.
//! Any stage error short-circuits via `?` and surfaces to the caller
//! unchanged; only completed runs reach the history.

use chrono::Utc;
use shared::DeliveryResult;
use tracing::info;

use crate::error::ReporterResult;
use crate::factory::{DeliveryFactory, FormatFactory, ReportFactory};
use crate::history::ReportHistory;
use crate::types::ReportRequest;

pub struct ReportSystem {
    reports: ReportFactory,
    formats: FormatFactory,
    deliveries: DeliveryFactory,
    history: ReportHistory,
}

impl ReportSystem {
    pub fn new() -> Self {
        Self::with_factories(
            ReportFactory::new(),
            FormatFactory::new(),
            DeliveryFactory::new(),
        )
    }

    /// Build a system around pre-configured factories
    pub fn with_factories(
        reports: ReportFactory,
        formats: FormatFactory,
        deliveries: DeliveryFactory,
    ) -> Self {
        Self {
            reports,
            formats,
            deliveries,
            history: ReportHistory::new(),
        }
    }

    /// Run one report request end to end
    ///
    /// All three strategies are resolved before any content is generated, so
    /// an unsupported tag aborts the run with no side effects at all.
    pub fn run(&mut self, request: &ReportRequest) -> ReporterResult<DeliveryResult> {
        let report = self.reports.create(&request.report)?;
        let format = self.formats.create(&request.format)?;
        let delivery = self.deliveries.create(&request.delivery)?;

        let generated_at = Utc::now();
        let content = report.generate(&request.params, generated_at)?;
        let output = format.render(&content);
        let result = delivery.deliver(&output);

        self.history.record(request, generated_at, result.outcome.clone());
        info!(
            report = %request.report,
            format = %request.format,
            delivery = %request.delivery,
            outcome = %result.outcome,
            "report run completed"
        );

        Ok(result)
    }

    pub fn history(&self) -> &ReportHistory {
        &self.history
    }
}

impl Default for ReportSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReporterError;
    use crate::traits::DeliveryStrategy;
    use crate::types::{ReportParams, Sale};
    use shared::SharedError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn sales_request(format: &str, delivery: &str) -> ReportRequest {
        ReportRequest {
            report: "sales".to_string(),
            format: format.to_string(),
            delivery: delivery.to_string(),
            params: ReportParams {
                period: Some("2024-Q1".to_string()),
                sales: Some(vec![Sale {
                    product: "Laptop".to_string(),
                    amount: 899.99,
                }]),
                ..Default::default()
            },
        }
    }

    /// Delivery stub that counts invocations
    struct CountingDelivery(Arc<AtomicUsize>);

    impl DeliveryStrategy for CountingDelivery {
        fn channel(&self) -> &'static str {
            "counting"
        }

        fn deliver(&self, output: &crate::types::FormattedOutput) -> DeliveryResult {
            self.0.fetch_add(1, Ordering::SeqCst);
            DeliveryResult::delivered(self.channel(), "test", &output.format)
        }
    }

    fn system_with_counting_delivery(counter: Arc<AtomicUsize>) -> ReportSystem {
        let mut deliveries = DeliveryFactory::new();
        deliveries.register("counting", move || {
            Box::new(CountingDelivery(Arc::clone(&counter)))
        });
        ReportSystem::with_factories(ReportFactory::new(), FormatFactory::new(), deliveries)
    }

    #[test]
    fn test_sales_pdf_email_succeeds_and_records() {
        let mut system = ReportSystem::new();
        let result = system.run(&sales_request("pdf", "email")).unwrap();

        assert!(result.succeeded());
        assert_eq!(result.channel, "email");
        assert_eq!(system.history().len(), 1);
        assert_eq!(system.history().list()[0].report, "sales");
    }

    #[test]
    fn test_unsupported_format_short_circuits_before_delivery() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let mut system = system_with_counting_delivery(Arc::clone(&attempts));

        let err = system.run(&sales_request("xml", "counting")).unwrap_err();
        assert!(matches!(
            err,
            ReporterError::Shared(SharedError::UnsupportedTag { .. })
        ));
        assert_eq!(attempts.load(Ordering::SeqCst), 0);
        assert!(system.history().is_empty());
    }

    #[test]
    fn test_missing_parameter_aborts_before_delivery() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let mut system = system_with_counting_delivery(Arc::clone(&attempts));

        let mut request = sales_request("pdf", "counting");
        request.params.period = None;

        let err = system.run(&request).unwrap_err();
        assert!(matches!(err, ReporterError::MissingParameter { .. }));
        assert_eq!(attempts.load(Ordering::SeqCst), 0);
        assert!(system.history().is_empty());
    }

    #[test]
    fn test_registered_delivery_is_used() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let mut system = system_with_counting_delivery(Arc::clone(&attempts));

        let result = system.run(&sales_request("html", "counting")).unwrap();
        assert!(result.succeeded());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }
}
