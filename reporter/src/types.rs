//! Report request, parameter and content types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::Outcome;

use crate::error::{ReporterError, ReporterResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sale {
    pub product: String,
    pub amount: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StockItem {
    pub name: String,
    pub category: String,
    pub quantity: u32,
}

/// Parameter bag for one report request
///
/// All fields are optional; each report variant pulls what it needs through
/// the accessor methods, which turn an absent field into a
/// `MissingParameter` error.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReportParams {
    pub period: Option<String>,
    pub sales: Option<Vec<Sale>>,
    pub stock: Option<Vec<StockItem>>,
    pub income: Option<f64>,
    pub expenses: Option<f64>,
}

impl ReportParams {
    pub fn period(&self) -> ReporterResult<&str> {
        self.period.as_deref().ok_or_else(|| Self::missing("period"))
    }

    pub fn sales(&self) -> ReporterResult<&[Sale]> {
        self.sales.as_deref().ok_or_else(|| Self::missing("sales"))
    }

    pub fn stock(&self) -> ReporterResult<&[StockItem]> {
        self.stock.as_deref().ok_or_else(|| Self::missing("stock"))
    }

    pub fn income(&self) -> ReporterResult<f64> {
        self.income.ok_or_else(|| Self::missing("income"))
    }

    pub fn expenses(&self) -> ReporterResult<f64> {
        self.expenses.ok_or_else(|| Self::missing("expenses"))
    }

    fn missing(parameter: &str) -> ReporterError {
        ReporterError::MissingParameter {
            parameter: parameter.to_string(),
        }
    }
}

/// One report invocation: which report, in which format, delivered where
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportRequest {
    pub report: String,
    pub format: String,
    pub delivery: String,
    pub params: ReportParams,
}

/// Named chunk of report text
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub content: String,
}

/// Assembled report, ordered sections only
///
/// Produced by [`ReportBuilder`](crate::builder::ReportBuilder); section
/// order is exactly the order the builder was fed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportContent {
    sections: Vec<Section>,
}

impl ReportContent {
    pub(crate) fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    /// Plain-text rendition, sections joined in order
    pub fn render(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Report text after a format strategy has encoded it
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FormattedOutput {
    pub format: String,
    pub extension: String,
    pub payload: String,
}

/// One completed report run, as kept by the report history
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportRecord {
    pub report: String,
    pub format: String,
    pub delivery: String,
    pub generated_at: DateTime<Utc>,
    pub outcome: Outcome,
}
