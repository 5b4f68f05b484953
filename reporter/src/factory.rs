//! Factories mapping tags to report, format and delivery strategies

use shared::Registry;

use crate::delivery::{CloudDelivery, DownloadDelivery, EmailDelivery};
use crate::error::ReporterResult;
use crate::formats::{ExcelFormat, HtmlFormat, PdfFormat};
use crate::reports::{FinancialReport, InventoryReport, SalesReport};
use crate::traits::{DeliveryStrategy, FormatStrategy, ReportStrategy};

/// Resolves a report tag (`sales`, `inventory`, `financial`)
pub struct ReportFactory {
    registry: Registry<dyn ReportStrategy>,
}

impl ReportFactory {
    pub fn new() -> Self {
        let mut registry: Registry<dyn ReportStrategy> = Registry::new("report");
        registry.register("sales", || Box::new(SalesReport));
        registry.register("inventory", || Box::new(InventoryReport));
        registry.register("financial", || Box::new(FinancialReport));
        Self { registry }
    }

    pub fn create(&self, tag: &str) -> ReporterResult<Box<dyn ReportStrategy>> {
        Ok(self.registry.create(tag)?)
    }

    pub fn register<F>(&mut self, tag: &'static str, ctor: F)
    where
        F: Fn() -> Box<dyn ReportStrategy> + Send + Sync + 'static,
    {
        self.registry.register(tag, ctor);
    }

    pub fn supported_tags(&self) -> Vec<&'static str> {
        self.registry.tags()
    }
}

impl Default for ReportFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves a format tag (`pdf`, `excel`, `html`)
pub struct FormatFactory {
    registry: Registry<dyn FormatStrategy>,
}

impl FormatFactory {
    pub fn new() -> Self {
        let mut registry: Registry<dyn FormatStrategy> = Registry::new("format");
        registry.register("pdf", || Box::new(PdfFormat));
        registry.register("excel", || Box::new(ExcelFormat));
        registry.register("html", || Box::new(HtmlFormat));
        Self { registry }
    }

    pub fn create(&self, tag: &str) -> ReporterResult<Box<dyn FormatStrategy>> {
        Ok(self.registry.create(tag)?)
    }

    pub fn register<F>(&mut self, tag: &'static str, ctor: F)
    where
        F: Fn() -> Box<dyn FormatStrategy> + Send + Sync + 'static,
    {
        self.registry.register(tag, ctor);
    }

    pub fn supported_tags(&self) -> Vec<&'static str> {
        self.registry.tags()
    }
}

impl Default for FormatFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves a delivery tag (`email`, `download`, `cloud`)
pub struct DeliveryFactory {
    registry: Registry<dyn DeliveryStrategy>,
}

impl DeliveryFactory {
    pub fn new() -> Self {
        let mut registry: Registry<dyn DeliveryStrategy> = Registry::new("delivery");
        registry.register("email", || Box::new(EmailDelivery::default()));
        registry.register("download", || Box::new(DownloadDelivery));
        registry.register("cloud", || Box::new(CloudDelivery::default()));
        Self { registry }
    }

    pub fn create(&self, tag: &str) -> ReporterResult<Box<dyn DeliveryStrategy>> {
        Ok(self.registry.create(tag)?)
    }

    pub fn register<F>(&mut self, tag: &'static str, ctor: F)
    where
        F: Fn() -> Box<dyn DeliveryStrategy> + Send + Sync + 'static,
    {
        self.registry.register(tag, ctor);
    }

    pub fn supported_tags(&self) -> Vec<&'static str> {
        self.registry.tags()
    }
}

impl Default for DeliveryFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReporterError;
    use shared::SharedError;

    #[test]
    fn test_report_factory_resolves_builtins() {
        let factory = ReportFactory::new();
        for tag in ["sales", "inventory", "financial"] {
            assert!(factory.create(tag).is_ok(), "tag {tag} should resolve");
        }
    }

    #[test]
    fn test_format_factory_resolves_builtins() {
        let factory = FormatFactory::new();
        for tag in ["pdf", "excel", "html"] {
            assert_eq!(factory.create(tag).unwrap().format(), tag);
        }
    }

    #[test]
    fn test_delivery_factory_resolves_builtins() {
        let factory = DeliveryFactory::new();
        for tag in ["email", "download", "cloud"] {
            assert_eq!(factory.create(tag).unwrap().channel(), tag);
        }
    }

    #[test]
    fn test_unknown_format_tag_is_rejected() {
        let factory = FormatFactory::new();
        match factory.create("xml") {
            Err(ReporterError::Shared(SharedError::UnsupportedTag { kind, tag })) => {
                assert_eq!(kind, "format");
                assert_eq!(tag, "xml");
            }
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("unknown tag must be rejected"),
        }
    }

    #[test]
    fn test_unknown_report_and_delivery_tags_are_rejected() {
        assert!(matches!(
            ReportFactory::new().create("audit"),
            Err(ReporterError::Shared(SharedError::UnsupportedTag { .. }))
        ));
        assert!(matches!(
            DeliveryFactory::new().create("fax"),
            Err(ReporterError::Shared(SharedError::UnsupportedTag { .. }))
        ));
    }
}
