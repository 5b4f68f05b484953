//! Append-only in-memory report run history

use chrono::{DateTime, Utc};
use shared::Outcome;

use crate::types::{ReportRecord, ReportRequest};

/// Keeps every completed report run for the lifetime of the process
#[derive(Default)]
pub struct ReportHistory {
    records: Vec<ReportRecord>,
}

impl ReportHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, request: &ReportRequest, generated_at: DateTime<Utc>, outcome: Outcome) {
        self.records.push(ReportRecord {
            report: request.report.clone(),
            format: request.format.clone(),
            delivery: request.delivery.clone(),
            generated_at,
            outcome,
        });
    }

    pub fn list(&self) -> &[ReportRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
