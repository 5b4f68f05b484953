//! Notification trait definitions for dependency injection

use shared::DeliveryResult;

use crate::types::OrderInfo;

/// One interchangeable notification transport
///
/// `send` formats a channel-specific confirmation from the order fields and
/// hands it to the (simulated) transport. The call itself never fails; a
/// transport that cannot address the customer reports `Outcome::Failed`
/// inside the result and the caller records it without retrying.
#[mockall::automock]
pub trait NotificationStrategy: Send + Sync {
    /// Tag this strategy serves, e.g. "email"
    fn channel(&self) -> &'static str;

    /// Send the order confirmation over this channel
    fn send(&self, order: &OrderInfo) -> DeliveryResult;
}
