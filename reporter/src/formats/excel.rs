//! Excel format stub, one sheet per section

use crate::traits::FormatStrategy;
use crate::types::{FormattedOutput, ReportContent};

pub struct ExcelFormat;

impl FormatStrategy for ExcelFormat {
    fn format(&self) -> &'static str {
        "excel"
    }

    fn extension(&self) -> &'static str {
        "xlsx"
    }

    fn render(&self, content: &ReportContent) -> FormattedOutput {
        let payload = content
            .sections()
            .iter()
            .map(|section| format!("[Sheet: {}]\n{}", section.name, section.content))
            .collect::<Vec<_>>()
            .join("\n");

        FormattedOutput {
            format: self.format().to_string(),
            extension: self.extension().to_string(),
            payload,
        }
    }
}
