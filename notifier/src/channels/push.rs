//! Push notification channel (simulated transport)

use shared::DeliveryResult;
use tracing::info;

use crate::traits::NotificationStrategy;
use crate::types::OrderInfo;

pub struct PushChannel;

impl NotificationStrategy for PushChannel {
    fn channel(&self) -> &'static str {
        "push"
    }

    fn send(&self, order: &OrderInfo) -> DeliveryResult {
        if order.customer.device_id.is_empty() {
            return DeliveryResult::failed(self.channel(), "", "no registered device");
        }

        let message = format!("Order confirmed! #{} - ${:.2}", order.order_id, order.total);

        info!(device = %order.customer.device_id, "🔔 push notification sent");

        DeliveryResult::delivered(self.channel(), &order.customer.device_id, &message)
    }
}
