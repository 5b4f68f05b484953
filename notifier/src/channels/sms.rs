//! SMS notification channel (simulated transport)

use shared::DeliveryResult;
use tracing::info;

use crate::traits::NotificationStrategy;
use crate::types::OrderInfo;

pub struct SmsChannel;

impl NotificationStrategy for SmsChannel {
    fn channel(&self) -> &'static str {
        "sms"
    }

    fn send(&self, order: &OrderInfo) -> DeliveryResult {
        if order.customer.phone.is_empty() {
            return DeliveryResult::failed(self.channel(), "", "no phone number on file");
        }

        let message = format!(
            "Order #{} confirmed. Total: ${:.2}. Thank you for your purchase!",
            order.order_id, order.total
        );

        info!(to = %order.customer.phone, "📱 SMS sent");

        DeliveryResult::delivered(self.channel(), &order.customer.phone, &message)
    }
}
