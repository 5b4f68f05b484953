//! Strategy trait definitions for the three report axes

use chrono::{DateTime, Utc};
use shared::DeliveryResult;

use crate::builder::ReportBuilder;
use crate::error::ReporterResult;
use crate::types::{FormattedOutput, ReportContent, ReportParams};

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Report content generation, template-method style
///
/// `generate` is the fixed skeleton — header, title, body, footer assembled
/// through the builder in that order — and only `title` and `body` vary per
/// report type.
pub trait ReportStrategy: Send + Sync {
    /// Report headline, e.g. "SALES REPORT"
    fn title(&self) -> String;

    /// Variant-specific body text, derived from the request parameters
    fn body(&self, params: &ReportParams) -> ReporterResult<String>;

    /// Fixed skeleton shared by every report type
    fn generate(
        &self,
        params: &ReportParams,
        generated_at: DateTime<Utc>,
    ) -> ReporterResult<ReportContent> {
        let body = self.body(params)?;
        let footer = format!(
            "{}\nGenerated: {}",
            rule(),
            generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );

        Ok(ReportBuilder::new()
            .add_section("header", &rule())
            .add_section("title", &format!("{:^1$}", self.title(), RULE_WIDTH))
            .add_section("body", &body)
            .add_section("footer", &footer)
            .build())
    }
}

/// Pure encoding of assembled report content into a target format
#[mockall::automock]
pub trait FormatStrategy: Send + Sync {
    /// Tag this strategy serves, e.g. "pdf"
    fn format(&self) -> &'static str;

    /// File extension for the encoded output
    fn extension(&self) -> &'static str;

    /// Encode the content; no side effects
    fn render(&self, content: &ReportContent) -> FormattedOutput;
}

/// Hand-off of a formatted report to its destination
#[mockall::automock]
pub trait DeliveryStrategy: Send + Sync {
    /// Tag this strategy serves, e.g. "download"
    fn channel(&self) -> &'static str;

    /// Dispatch the formatted report; failures are reported in the result,
    /// never retried
    fn deliver(&self, output: &FormattedOutput) -> DeliveryResult;
}
