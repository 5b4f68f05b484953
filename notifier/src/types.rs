//! Order data model and history records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::Outcome;

/// Contact details for the person who placed the order
///
/// Any field may be empty; a channel whose contact field is missing reports
/// a failed send rather than rejecting the whole order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub device_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: String,
    pub quantity: u32,
}

/// Immutable snapshot of one incoming order
///
/// `channels` carries the notification tags the order should be announced
/// on, in the order they will be sent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderInfo {
    pub order_id: String,
    pub customer: Customer,
    pub total: f64,
    pub items: Vec<OrderItem>,
    pub channels: Vec<String>,
}

impl OrderInfo {
    /// True when at least one contact field could address the customer
    pub fn has_contact(&self) -> bool {
        !self.customer.email.is_empty()
            || !self.customer.phone.is_empty()
            || !self.customer.device_id.is_empty()
    }
}

/// One processed send, as kept by the history manager
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub order_id: String,
    pub channel: String,
    pub recorded_at: DateTime<Utc>,
    pub outcome: Outcome,
}
