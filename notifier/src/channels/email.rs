//! Email notification channel (simulated transport)

use shared::DeliveryResult;
use tracing::info;

use crate::traits::NotificationStrategy;
use crate::types::OrderInfo;

pub struct EmailChannel;

impl NotificationStrategy for EmailChannel {
    fn channel(&self) -> &'static str {
        "email"
    }

    fn send(&self, order: &OrderInfo) -> DeliveryResult {
        if order.customer.email.is_empty() {
            return DeliveryResult::failed(self.channel(), "", "no email address on file");
        }

        let subject = format!("Order Confirmation #{}", order.order_id);
        let message = format!(
            "Dear {}, your order #{} for ${:.2} has been confirmed.",
            order.customer.name, order.order_id, order.total
        );

        info!(
            to = %order.customer.email,
            subject = %subject,
            "📧 email sent"
        );

        DeliveryResult::delivered(self.channel(), &order.customer.email, &message)
    }
}
