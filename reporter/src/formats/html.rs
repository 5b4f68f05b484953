//! HTML format stub

use crate::traits::FormatStrategy;
use crate::types::{FormattedOutput, ReportContent};

pub struct HtmlFormat;

impl FormatStrategy for HtmlFormat {
    fn format(&self) -> &'static str {
        "html"
    }

    fn extension(&self) -> &'static str {
        "html"
    }

    fn render(&self, content: &ReportContent) -> FormattedOutput {
        FormattedOutput {
            format: self.format().to_string(),
            extension: self.extension().to_string(),
            payload: format!(
                "<html><body><pre>\n{}\n</pre></body></html>",
                content.render()
            ),
        }
    }
}
