//! Append-only in-memory notification history

use chrono::Utc;
use shared::Outcome;

use crate::types::HistoryRecord;

/// Keeps every processed send for the lifetime of the process
///
/// Append-only: insertion order is preserved, nothing is deduplicated or
/// pruned within a run.
#[derive(Default)]
pub struct HistoryManager {
    records: Vec<HistoryRecord>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, order_id: &str, channel: &str, outcome: Outcome) {
        self.records.push(HistoryRecord {
            order_id: order_id.to_string(),
            channel: channel.to_string(),
            recorded_at: Utc::now(),
            outcome,
        });
    }

    pub fn list(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
