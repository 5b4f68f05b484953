//! Fluent, by-value report section accumulator

use crate::types::{ReportContent, Section};

/// Accumulates named sections and produces the final immutable content
///
/// Section order equals call order. Adding a section under an existing name
/// overwrites that section's content in place (last write wins, the original
/// position is kept). Moving by value keeps accumulation off any shared
/// mutable state.
#[derive(Default)]
pub struct ReportBuilder {
    sections: Vec<Section>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_section(mut self, name: &str, content: &str) -> Self {
        match self.sections.iter_mut().find(|s| s.name == name) {
            Some(existing) => existing.content = content.to_string(),
            None => self.sections.push(Section {
                name: name.to_string(),
                content: content.to_string(),
            }),
        }
        self
    }

    pub fn build(self) -> ReportContent {
        ReportContent::new(self.sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_keep_call_order() {
        let content = ReportBuilder::new()
            .add_section("title", "Quarterly Sales")
            .add_section("body", "details")
            .add_section("footer", "end")
            .build();

        assert_eq!(content.section_names(), vec!["title", "body", "footer"]);
    }

    #[test]
    fn test_duplicate_name_overwrites_in_place() {
        let content = ReportBuilder::new()
            .add_section("title", "first")
            .add_section("body", "details")
            .add_section("title", "second")
            .build();

        assert_eq!(content.section_names(), vec!["title", "body"]);
        assert_eq!(content.sections()[0].content, "second");
    }

    #[test]
    fn test_render_joins_in_order() {
        let content = ReportBuilder::new()
            .add_section("a", "one")
            .add_section("b", "two")
            .build();

        assert_eq!(content.render(), "one\ntwo");
    }

    #[test]
    fn test_empty_builder_builds_empty_content() {
        let content = ReportBuilder::new().build();
        assert!(content.sections().is_empty());
        assert_eq!(content.render(), "");
    }
}
