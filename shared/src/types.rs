//! Core shared types and identifiers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a completed send or delivery attempt
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for ReceiptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Terminal state of a send or delivery attempt
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Delivered,
    Failed { reason: String },
}

impl Outcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Outcome::Delivered)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Delivered => write!(f, "delivered"),
            Outcome::Failed { reason } => write!(f, "failed: {reason}"),
        }
    }
}

/// Result of handing content to a transport channel
///
/// Both notification strategies and report delivery strategies return this.
/// A transport that could not complete reports `Outcome::Failed` here rather
/// than an `Err`; callers record the failure and move on, they never retry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeliveryResult {
    pub receipt: ReceiptId,
    pub channel: String,
    pub target: String,
    pub detail: String,
    pub completed_at: DateTime<Utc>,
    pub outcome: Outcome,
}

impl DeliveryResult {
    /// Record a completed hand-off to the channel
    pub fn delivered(channel: &str, target: &str, detail: &str) -> Self {
        Self {
            receipt: ReceiptId::new(),
            channel: channel.to_string(),
            target: target.to_string(),
            detail: detail.to_string(),
            completed_at: Utc::now(),
            outcome: Outcome::Delivered,
        }
    }

    /// Record a hand-off the channel refused or could not address
    pub fn failed(channel: &str, target: &str, reason: &str) -> Self {
        Self {
            receipt: ReceiptId::new(),
            channel: channel.to_string(),
            target: target.to_string(),
            detail: String::new(),
            completed_at: Utc::now(),
            outcome: Outcome::Failed {
                reason: reason.to_string(),
            },
        }
    }

    pub fn succeeded(&self) -> bool {
        self.outcome.is_delivered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivered_result_succeeds() {
        let result = DeliveryResult::delivered("email", "ana@example.com", "order confirmation");
        assert!(result.succeeded());
        assert_eq!(result.channel, "email");
        assert_eq!(result.target, "ana@example.com");
    }

    #[test]
    fn test_failed_result_carries_reason() {
        let result = DeliveryResult::failed("sms", "", "no phone number on file");
        assert!(!result.succeeded());
        assert_eq!(
            result.outcome,
            Outcome::Failed {
                reason: "no phone number on file".to_string()
            }
        );
    }

    #[test]
    fn test_receipt_id_round_trip() {
        let receipt = ReceiptId::new();
        let parsed = ReceiptId::from_string(&receipt.to_string()).unwrap();
        assert_eq!(receipt, parsed);
    }
}
