//! PDF format stub

use crate::traits::FormatStrategy;
use crate::types::{FormattedOutput, ReportContent};

pub struct PdfFormat;

impl FormatStrategy for PdfFormat {
    fn format(&self) -> &'static str {
        "pdf"
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, content: &ReportContent) -> FormattedOutput {
        FormattedOutput {
            format: self.format().to_string(),
            extension: self.extension().to_string(),
            payload: format!("%PDF-REPORT 1.0\n{}\n%%EOF", content.render()),
        }
    }
}
